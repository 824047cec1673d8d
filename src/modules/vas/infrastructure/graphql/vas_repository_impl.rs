use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use super::client::{GraphqlRequest, GraphqlResponse, GraphqlTransport};
use super::models::VasListData;
use super::queries::{DELETE_VASS_MUTATION, UPDATE_MULTIPLE_VAS_MUTATION, VAS_LIST_QUERY};
use crate::modules::vas::domain::{
    FetchResult, MutationResult, PendingPatch, VasQuery, VasRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// [`VasRepository`] backed by the `vass` / `updateMultipleVas` / `deleteVass` resolvers
pub struct GraphqlVasRepository {
    transport: Arc<dyn GraphqlTransport>,
}

impl GraphqlVasRepository {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    async fn run(&self, operation: &str, request: GraphqlRequest) -> AppResult<GraphqlResponse> {
        LogContext::graphql_operation(operation, "", None);
        let started = Instant::now();
        let response = self.transport.execute(request).await?;
        let status = if response.has_errors() { "failed" } else { "ok" };
        LogContext::graphql_operation(
            operation,
            status,
            Some(started.elapsed().as_millis() as u64),
        );
        Ok(response)
    }

    fn mutation_result(response: &GraphqlResponse) -> MutationResult {
        if response.has_errors() {
            MutationResult::Rejected {
                messages: response.error_messages(),
            }
        } else {
            MutationResult::Applied
        }
    }
}

#[async_trait]
impl VasRepository for GraphqlVasRepository {
    async fn find_page(&self, query: &VasQuery) -> AppResult<FetchResult> {
        let request = GraphqlRequest::new(VAS_LIST_QUERY, serde_json::to_value(query)?);
        let response = self.run("vass", request).await?;

        let data: VasListData = response.into_data()?;
        Ok(data.vass.unwrap_or_default().into())
    }

    async fn update_multiple(&self, patches: &[PendingPatch]) -> AppResult<MutationResult> {
        let request = GraphqlRequest::new(
            UPDATE_MULTIPLE_VAS_MUTATION,
            json!({ "patches": serde_json::to_value(patches)? }),
        );
        let response = self.run("updateMultipleVas", request).await?;
        Ok(Self::mutation_result(&response))
    }

    async fn delete_many(&self, ids: &[String]) -> AppResult<MutationResult> {
        let request = GraphqlRequest::new(DELETE_VASS_MUTATION, json!({ "ids": ids }));
        let response = self.run("deleteVass", request).await?;

        let result = Self::mutation_result(&response);
        if result.is_applied() {
            let deleted = response.data.as_ref().and_then(|data| data.get("deleteVass"));
            if deleted == Some(&Value::Bool(false)) {
                return Ok(MutationResult::Rejected {
                    messages: vec!["deleteVass reported no deletion".to_string()],
                });
            }
        }
        Ok(result)
    }
}
