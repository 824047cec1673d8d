use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Comparison operators understood by the list resolvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOperator {
    Eq,
    Like,
    /// Case-insensitive "contains"
    ILike,
}

impl SearchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperator::Eq => "eq",
            SearchOperator::Like => "like",
            SearchOperator::ILike => "i_like",
        }
    }

    /// Wrap the value the way the resolver expects for this operator
    fn wrap(&self, value: &str) -> String {
        match self {
            SearchOperator::Eq => value.to_string(),
            SearchOperator::Like | SearchOperator::ILike => format!("%{}%", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFieldType {
    Text,
}

/// One input of the search form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    /// Translation key for the label
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: SearchFieldType,
    pub search_oper: SearchOperator,
}

impl SearchField {
    pub fn contains_text(name: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            field_type: SearchFieldType::Text,
            search_oper: SearchOperator::ILike,
        }
    }
}

/// `{ name, operator, value }` predicate sent with the list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub name: String,
    pub operator: String,
    pub value: String,
}

/// Values currently typed into the search form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    values: BTreeMap<String, String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.set(field, value);
        self
    }

    /// Blank values clear the field
    pub fn set(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.values.remove(field);
        } else {
            self.values.insert(field.to_string(), value.to_string());
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Predicates for every field that has a value, in form order.
    /// Values for names that are not form fields are ignored.
    pub fn to_filters(&self, fields: &[SearchField]) -> Vec<QueryFilter> {
        fields
            .iter()
            .filter_map(|field| {
                self.get(&field.name).map(|value| QueryFilter {
                    name: field.name.clone(),
                    operator: field.search_oper.as_str().to_string(),
                    value: field.search_oper.wrap(value),
                })
            })
            .collect()
    }
}
