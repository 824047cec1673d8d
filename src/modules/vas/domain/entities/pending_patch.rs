use serde::{Deserialize, Serialize};

use crate::shared::utils::parse_float_lenient;

/// Key under which the grid tags each dirty row with its [`CuFlag`]
pub const DIRTY_FLAG_NAME: &str = "cuFlag";

/// Create/update/delete marker the grid puts on dirty rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuFlag {
    #[serde(rename = "+")]
    Create,
    #[serde(rename = "M")]
    Modify,
    #[serde(rename = "-")]
    Delete,
}

/// Price as typed into the grid: cells may hold text until saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Zero, NaN and empty text count as "no value" and are left alone on save
    pub fn is_truthy(&self) -> bool {
        match self {
            PriceInput::Number(n) => *n != 0.0 && !n.is_nan(),
            PriceInput::Text(text) => !text.is_empty(),
        }
    }

    /// Numeric form of a truthy price; unparseable text becomes NaN
    pub fn coerced(&self) -> PriceInput {
        if !self.is_truthy() {
            return self.clone();
        }
        match self {
            PriceInput::Number(n) => PriceInput::Number(*n),
            PriceInput::Text(text) => PriceInput::Number(parse_float_lenient(text)),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PriceInput::Number(n) => Some(*n),
            PriceInput::Text(_) => None,
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

/// Unsaved edits for one row, as collected from the grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_guide_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_guide: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price: Option<PriceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cu_flag: Option<CuFlag>,
}

impl PendingPatch {
    /// Patch for a row that already exists server-side
    pub fn modify(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            cu_flag: Some(CuFlag::Modify),
            ..Default::default()
        }
    }

    /// Patch for a row typed into the grid but never saved
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cu_flag: Some(CuFlag::Create),
            ..Default::default()
        }
    }

    pub fn with_default_price(mut self, price: impl Into<PriceInput>) -> Self {
        self.default_price = Some(price.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Coerce `default_price` to a number before it goes on the wire
    pub fn normalized(mut self) -> Self {
        self.default_price = self.default_price.as_ref().map(PriceInput::coerced);
        self
    }
}
