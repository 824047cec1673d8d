//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by `dotenvy`. Every variable has a default except the access token.

use std::env;
use std::time::Duration;

use crate::shared::application::pagination::MAX_PAGE_SIZE;
use crate::shared::errors::{AppError, AppResult};

pub const GRAPHQL_URL_VAR: &str = "VAS_GRAPHQL_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "VAS_REQUEST_TIMEOUT_SECS";
pub const PAGE_SIZE_VAR: &str = "VAS_PAGE_SIZE";
pub const AUTO_CONFIRM_VAR: &str = "VAS_AUTO_CONFIRM";
pub const ACCESS_TOKEN_VAR: &str = "VAS_ACCESS_TOKEN";

const DEFAULT_GRAPHQL_URL: &str = "http://localhost:3000/graphql";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub graphql_url: String,
    pub request_timeout: Duration,
    pub page_size: u32,
    /// Answer the headless notifier gives to confirmation prompts
    pub auto_confirm: bool,
    /// Sent as a bearer token when present
    pub access_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            auto_confirm: false,
            access_token: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let graphql_url = match lookup(GRAPHQL_URL_VAR) {
            Some(url) => Self::validate_url(url.trim())?,
            None => defaults.graphql_url,
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = Self::parse_var(REQUEST_TIMEOUT_VAR, &raw)?;
                if secs == 0 {
                    return Err(AppError::ConfigError(format!(
                        "{} must be greater than zero",
                        REQUEST_TIMEOUT_VAR
                    )));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let page_size = match lookup(PAGE_SIZE_VAR) {
            Some(raw) => {
                let size: u32 = Self::parse_var(PAGE_SIZE_VAR, &raw)?;
                if size == 0 || size > MAX_PAGE_SIZE {
                    return Err(AppError::ConfigError(format!(
                        "{} must be between 1 and {}",
                        PAGE_SIZE_VAR, MAX_PAGE_SIZE
                    )));
                }
                size
            }
            None => defaults.page_size,
        };

        let auto_confirm = match lookup(AUTO_CONFIRM_VAR) {
            Some(raw) => Self::parse_bool(AUTO_CONFIRM_VAR, &raw)?,
            None => defaults.auto_confirm,
        };

        let access_token = lookup(ACCESS_TOKEN_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(Self {
            graphql_url,
            request_timeout,
            page_size,
            auto_confirm,
            access_token,
        })
    }

    fn validate_url(url: &str) -> AppResult<String> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::ConfigError(format!(
                "{} must be an http(s) URL, got '{}'",
                GRAPHQL_URL_VAR, url
            )));
        }
        Ok(url.to_string())
    }

    fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> AppResult<T> {
        raw.trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} has invalid value '{}'", name, raw)))
    }

    fn parse_bool(name: &str, raw: &str) -> AppResult<bool> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(AppError::ConfigError(format!(
                "{} has invalid value '{}'",
                name, raw
            ))),
        }
    }
}
