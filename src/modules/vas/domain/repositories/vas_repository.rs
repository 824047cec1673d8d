use async_trait::async_trait;

use crate::modules::vas::domain::{
    entities::PendingPatch,
    value_objects::{FetchResult, VasQuery},
};
use crate::shared::errors::AppResult;

/// Outcome of a mutation the server answered.
///
/// Errors the server reports alongside a response are data, not transport
/// failures: the caller decides which side effects to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationResult {
    Applied,
    Rejected { messages: Vec<String> },
}

impl MutationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationResult::Applied)
    }
}

/// Remote VAS catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VasRepository: Send + Sync {
    /// One filtered, sorted page plus the unpaged total
    async fn find_page(&self, query: &VasQuery) -> AppResult<FetchResult>;

    /// Bulk create/update keyed by id
    async fn update_multiple(&self, patches: &[PendingPatch]) -> AppResult<MutationResult>;

    /// Bulk delete by id
    async fn delete_many(&self, ids: &[String]) -> AppResult<MutationResult>;
}
