//! In-process stand-ins for the GraphQL server and the UI collaborators

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Mutex;

use vas_admin_lib::modules::vas::application::{Alert, ConfirmPrompt, Notice};
use vas_admin_lib::modules::vas::application::rows_to_patches;
use vas_admin_lib::modules::vas::domain::{PendingPatch, VasRecord};
use vas_admin_lib::modules::vas::infrastructure::graphql::{
    GraphqlRequest, GraphqlResponse, GraphqlTransport,
};
use vas_admin_lib::modules::vas::traits::{ImportConfig, ImportPopup, ImportRow, Notifier};
use vas_admin_lib::shared::errors::{AppError, AppResult};

/// Serves `vass`, `updateMultipleVas`, `deleteVass` and `commonCode`
/// from an in-memory catalog and records every request it sees
pub struct FakeGraphqlServer {
    records: Mutex<Vec<Value>>,
    currencies: Vec<&'static str>,
    requests: Mutex<Vec<GraphqlRequest>>,
    mutation_errors: Mutex<Option<String>>,
    list_override: Mutex<Option<Value>>,
    code_lookup_down: bool,
    next_id: Mutex<usize>,
}

impl FakeGraphqlServer {
    pub fn with_records(records: Vec<VasRecord>) -> Self {
        let records = records
            .iter()
            .map(|record| serde_json::to_value(record).unwrap())
            .collect();
        Self {
            records: Mutex::new(records),
            currencies: vec!["USD", "EUR", "KRW"],
            requests: Mutex::new(Vec::new()),
            mutation_errors: Mutex::new(None),
            list_override: Mutex::new(None),
            code_lookup_down: false,
            next_id: Mutex::new(0),
        }
    }

    pub fn without_code_lookup(mut self) -> Self {
        self.code_lookup_down = true;
        self
    }

    /// Every following mutation answers with a GraphQL error
    pub fn reject_mutations(&self, message: &str) {
        *self.mutation_errors.lock().unwrap() = Some(message.to_string());
    }

    /// Answer list queries with `data` verbatim
    pub fn override_list_payload(&self, data: Value) {
        *self.list_override.lock().unwrap() = Some(data);
    }

    pub fn requests_for(&self, operation: &str) -> Vec<GraphqlRequest> {
        let marker = format!("{}(", operation);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.query.contains(&marker))
            .cloned()
            .collect()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.requests_for(operation).len()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record["id"] == json!(id))
            .cloned()
    }

    pub fn stored_by_name(&self, name: &str) -> Option<Value> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record["name"] == json!(name))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn rejection(&self) -> Option<GraphqlResponse> {
        self.mutation_errors
            .lock()
            .unwrap()
            .as_deref()
            .map(|message| GraphqlResponse::with_errors(&[message]))
    }

    fn list(&self, variables: &Value) -> GraphqlResponse {
        if let Some(data) = self.list_override.lock().unwrap().clone() {
            return GraphqlResponse::with_data(data);
        }

        let mut matching: Vec<Value> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| matches_filters(record, &variables["filters"]))
            .cloned()
            .collect();

        if let Some(sorter) = variables["sortings"].as_array().and_then(|s| s.first()) {
            let field = sorter["name"].as_str().unwrap_or("name").to_string();
            matching.sort_by(|a, b| {
                let a = a[&field].as_str().unwrap_or_default().to_string();
                let b = b[&field].as_str().unwrap_or_default().to_string();
                a.cmp(&b)
            });
            if sorter["desc"] == json!(true) {
                matching.reverse();
            }
        }

        let page = variables["pagination"]["page"].as_u64().unwrap_or(1) as usize;
        let limit = variables["pagination"]["limit"].as_u64().unwrap_or(20) as usize;
        let total = matching.len();
        let items: Vec<Value> = matching
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        GraphqlResponse::with_data(json!({ "vass": { "items": items, "total": total } }))
    }

    fn update(&self, variables: &Value) -> GraphqlResponse {
        if let Some(rejection) = self.rejection() {
            return rejection;
        }

        let mut records = self.records.lock().unwrap();
        let mut touched = Vec::new();
        for patch in variables["patches"].as_array().cloned().unwrap_or_default() {
            let Value::Object(mut fields) = patch else {
                continue;
            };
            fields.remove("cuFlag");

            let position = fields
                .get("id")
                .and_then(Value::as_str)
                .and_then(|id| records.iter().position(|record| record["id"] == json!(id)));
            match position {
                Some(index) => {
                    if let Value::Object(stored) = &mut records[index] {
                        for (key, value) in fields {
                            stored.insert(key, value);
                        }
                        touched.push(json!({ "name": stored.get("name").cloned() }));
                    }
                }
                None => {
                    let mut next_id = self.next_id.lock().unwrap();
                    *next_id += 1;
                    fields.insert("id".to_string(), json!(format!("new-{}", *next_id)));
                    touched.push(json!({ "name": fields.get("name").cloned() }));
                    records.push(Value::Object(fields));
                }
            }
        }

        GraphqlResponse::with_data(json!({ "updateMultipleVas": touched }))
    }

    fn delete(&self, variables: &Value) -> GraphqlResponse {
        if let Some(rejection) = self.rejection() {
            return rejection;
        }

        let ids: Vec<Value> = variables["ids"].as_array().cloned().unwrap_or_default();
        self.records
            .lock()
            .unwrap()
            .retain(|record| !ids.contains(&record["id"]));
        GraphqlResponse::with_data(json!({ "deleteVass": true }))
    }

    fn common_code(&self, variables: &Value) -> AppResult<GraphqlResponse> {
        if self.code_lookup_down {
            return Err(AppError::ExternalServiceError(
                "code service unavailable".to_string(),
            ));
        }
        if variables["name"] != json!("CURRENCY_TYPES") {
            return Ok(GraphqlResponse::with_data(json!({ "commonCode": null })));
        }

        let details: Vec<Value> = self
            .currencies
            .iter()
            .map(|code| json!({ "name": code, "description": null }))
            .collect();
        Ok(GraphqlResponse::with_data(
            json!({ "commonCode": { "details": details } }),
        ))
    }
}

/// `i_like` / `like` match as case-insensitive contains, `eq` as equality
fn matches_filters(record: &Value, filters: &Value) -> bool {
    filters.as_array().into_iter().flatten().all(|filter| {
        let field = record[filter["name"].as_str().unwrap_or_default()]
            .as_str()
            .unwrap_or_default()
            .to_lowercase();
        let value = filter["value"].as_str().unwrap_or_default().to_lowercase();
        match filter["operator"].as_str() {
            Some("eq") => field == value,
            _ => field.contains(value.trim_matches('%')),
        }
    })
}

#[async_trait]
impl GraphqlTransport for FakeGraphqlServer {
    async fn execute(&self, request: GraphqlRequest) -> AppResult<GraphqlResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let query = request.query.as_str();
        if query.contains("updateMultipleVas(") {
            Ok(self.update(&request.variables))
        } else if query.contains("deleteVass(") {
            Ok(self.delete(&request.variables))
        } else if query.contains("commonCode(") {
            self.common_code(&request.variables)
        } else if query.contains("vass(") {
            Ok(self.list(&request.variables))
        } else {
            Err(AppError::ApiError(format!("unexpected document: {}", query)))
        }
    }
}

/// Records every notice and answers confirmation prompts with a fixed reply
pub struct RecordingNotifier {
    accept: bool,
    pub toasts: Mutex<Vec<Notice>>,
    pub alerts: Mutex<Vec<Alert>>,
    pub prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(accept: bool) -> Self {
        Self {
            accept,
            toasts: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Vec<Notice> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Toasts, alerts and prompts together
    pub fn total_notices(&self) -> usize {
        self.toasts().len() + self.alerts().len() + self.prompt_count()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn show_toast(&self, notice: Notice) {
        self.toasts.lock().unwrap().push(notice);
    }

    fn alert(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.prompts.lock().unwrap().push(prompt);
        self.accept
    }
}

/// Import popup that approves rows as mapped, or backs out when told to
pub struct RecordingPopup {
    approve: bool,
    pub opened_with: Mutex<Vec<(Vec<ImportRow>, ImportConfig)>>,
    pub closed: Mutex<usize>,
}

impl RecordingPopup {
    pub fn approving() -> Self {
        Self::new(true)
    }

    pub fn cancelling() -> Self {
        Self::new(false)
    }

    fn new(approve: bool) -> Self {
        Self {
            approve,
            opened_with: Mutex::new(Vec::new()),
            closed: Mutex::new(0),
        }
    }

    pub fn close_count(&self) -> usize {
        *self.closed.lock().unwrap()
    }

    pub fn last_config(&self) -> Option<ImportConfig> {
        self.opened_with
            .lock()
            .unwrap()
            .last()
            .map(|(_, config)| config.clone())
    }
}

#[async_trait]
impl ImportPopup for RecordingPopup {
    async fn open(
        &self,
        records: Vec<ImportRow>,
        config: ImportConfig,
    ) -> AppResult<Option<Vec<PendingPatch>>> {
        self.opened_with
            .lock()
            .unwrap()
            .push((records.clone(), config.clone()));
        if !self.approve {
            return Ok(None);
        }
        rows_to_patches(&records, &config.columns).map(Some)
    }

    fn close(&self) {
        *self.closed.lock().unwrap() += 1;
    }
}

/// Sheet row from a JSON object literal
pub fn sheet_row(value: Value) -> ImportRow {
    match value {
        Value::Object(map) => map,
        other => {
            let mut row = Map::new();
            row.insert("value".to_string(), other);
            row
        }
    }
}
