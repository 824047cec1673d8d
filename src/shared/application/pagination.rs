/// Pagination support for list queries
///
/// Mirrors the `{ page, limit }` argument accepted by the GraphQL list resolvers.
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Largest page the grid may request in one round trip
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination parameters for queries (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Reject pages the server would refuse anyway
    pub fn validate(&self) -> AppResult<()> {
        if self.page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if self.limit == 0 {
            return Err(AppError::ValidationError(
                "Limit must be positive".to_string(),
            ));
        }
        if self.limit > MAX_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "Limit cannot exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        total.div_ceil(u64::from(self.limit))
    }
}
