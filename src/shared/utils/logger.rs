use log::{debug, error, info};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*};

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("vas_admin_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        // Transport events go through `tracing`
        let targets = tracing_targets();
        // The subscriber itself is installed before `try_init` bridges `log`;
        // that bridge always fails because env_logger already owns the facade.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(targets)
            .try_init();

        info!("Logging system initialized");
    });
}

/// `tracing` filter mirroring the `env_logger` levels above
fn tracing_targets() -> Targets {
    Targets::new()
        .with_default(Level::INFO)
        .with_target("vas_admin_lib", Level::DEBUG)
        .with_target("reqwest", Level::WARN)
        .with_target("hyper", Level::WARN)
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log GraphQL operations
    pub fn graphql_operation(operation: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("GraphQL: {} {} in {}ms", operation, status, duration),
            None => debug!("GraphQL: Starting {}", operation),
        }
    }

    /// Log page lifecycle transitions
    pub fn page_transition(page: &str, from: &str, to: &str) {
        debug!("Page {}: {} -> {}", page, from, to);
    }

    /// Log import/export batches
    pub fn transfer(direction: &str, rows: usize, columns: usize) {
        info!("{}: {} rows x {} columns", direction, rows, columns);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
