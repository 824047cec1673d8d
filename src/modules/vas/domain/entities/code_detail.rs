use serde::{Deserialize, Serialize};

/// Code table the currency column is populated from
pub const CURRENCY_CODE_NAME: &str = "CURRENCY_TYPES";

/// One entry of a server-side code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDetail {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CodeDetail {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}
