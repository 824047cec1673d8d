use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Acting user reference attached by the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Updater {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One value-added-service catalog entry as returned by the list query.
///
/// `id`, `updated_at` and `updater` are server-assigned; edits travel as
/// [`PendingPatch`](super::PendingPatch), which has no slot for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VasRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub description: Option<String>,
    pub operation_guide_type: Option<String>,
    pub operation_guide: Option<String>,
    pub uom: Option<String>,
    pub currency: Option<String>,
    pub default_price: Option<f64>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    pub updater: Option<Updater>,
}

impl VasRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Rows saved without a name come back as `"name": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `updatedAt` arrives either as RFC 3339 text or as epoch milliseconds
/// (number or numeric string); it is written back as RFC 3339.
pub mod timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use crate::shared::errors::{AppError, AppResult};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", n))),
            Some(Value::String(text)) => parse(&text).map(Some).map_err(de::Error::custom),
            Some(other) => Err(de::Error::custom(format!(
                "expected timestamp, got {}",
                other
            ))),
        }
    }

    pub fn parse(text: &str) -> AppResult<DateTime<Utc>> {
        let text = text.trim();
        if let Ok(ms) = text.parse::<i64>() {
            return Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| AppError::InvalidInput(format!("timestamp out of range: {}", ms)));
        }
        Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
    }
}
