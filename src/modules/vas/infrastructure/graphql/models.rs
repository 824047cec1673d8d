//! Wire shapes of the VAS GraphQL responses

use serde::Deserialize;

use crate::modules::vas::domain::{CodeDetail, FetchResult, VasRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct VasListData {
    pub vass: Option<VasPageDto>,
}

/// `items`/`total` may be null; both read as empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VasPageDto {
    #[serde(default)]
    pub items: Option<Vec<VasRecord>>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl From<VasPageDto> for FetchResult {
    fn from(page: VasPageDto) -> Self {
        FetchResult {
            total: page.total.unwrap_or(0),
            records: page.items.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonCodeData {
    pub common_code: Option<CommonCodeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonCodeDto {
    #[serde(default)]
    pub details: Option<Vec<CodeDetail>>,
}
