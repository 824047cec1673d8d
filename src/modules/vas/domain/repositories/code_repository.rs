use async_trait::async_trait;

use crate::modules::vas::domain::entities::CodeDetail;
use crate::shared::errors::AppResult;

/// Server-side code tables (currencies, units, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeRepository: Send + Sync {
    /// Entries of the code table called `name`, in server order
    async fn get_code_by_name(&self, name: &str) -> AppResult<Vec<CodeDetail>>;
}
