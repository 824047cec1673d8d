use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use super::client::{GraphqlRequest, GraphqlTransport};
use super::models::CommonCodeData;
use super::queries::COMMON_CODE_QUERY;
use crate::modules::vas::domain::{CodeDetail, CodeRepository};
use crate::shared::errors::AppResult;

/// [`CodeRepository`] backed by the `commonCode` resolver
pub struct GraphqlCodeRepository {
    transport: Arc<dyn GraphqlTransport>,
}

impl GraphqlCodeRepository {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl CodeRepository for GraphqlCodeRepository {
    async fn get_code_by_name(&self, name: &str) -> AppResult<Vec<CodeDetail>> {
        let request = GraphqlRequest::new(COMMON_CODE_QUERY, json!({ "name": name }));
        let data: CommonCodeData = self.transport.execute(request).await?.into_data()?;

        let details = data
            .common_code
            .and_then(|code| code.details)
            .unwrap_or_default();
        log::debug!("Loaded {} entries of code table {}", details.len(), name);
        Ok(details)
    }
}
