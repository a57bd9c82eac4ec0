use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The labor statistics document as published by the data repository.
///
/// Entries are not validated: every field is carried as raw JSON and handed
/// to the page untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborStatsDocument {
    #[serde(default = "empty_series", deserialize_with = "series_or_empty")]
    pub monthly: Value,
    #[serde(default = "empty_series", deserialize_with = "series_or_empty")]
    pub industries: Value,
    #[serde(default = "empty_series", deserialize_with = "series_or_empty")]
    pub occupations: Value,
    #[serde(default)]
    pub generated_at: Option<Value>,
    #[serde(default)]
    pub lookback_months: Option<Value>,
}

impl Default for LaborStatsDocument {
    fn default() -> Self {
        Self {
            monthly: empty_series(),
            industries: empty_series(),
            occupations: empty_series(),
            generated_at: None,
            lookback_months: None,
        }
    }
}

impl LaborStatsDocument {
    /// Projects a parsed body. Objects are read field by field; `null` is
    /// rejected; any other JSON value has no fields, so every default applies.
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(_) | Value::Null => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

fn empty_series() -> Value {
    Value::Array(Vec::new())
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// 缺少或為假值的序列一律以空陣列取代，其餘原樣保留
fn series_or_empty<'de, D>(deserializer: D) -> std::result::Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        Ok(empty_series())
    } else {
        Ok(value)
    }
}

/// Data handed to the labor market page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub monthly: Value,
    pub industries: Value,
    pub occupations: Value,
    pub generated_at: Option<Value>,
    pub lookback_months: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageData {
    pub fn from_document(doc: LaborStatsDocument) -> Self {
        Self {
            monthly: doc.monthly,
            industries: doc.industries,
            occupations: doc.occupations,
            generated_at: doc.generated_at,
            lookback_months: doc.lookback_months,
            error: None,
        }
    }

    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            monthly: empty_series(),
            industries: empty_series(),
            occupations: empty_series(),
            generated_at: None,
            lookback_months: Some(Value::from(0)),
            error: Some(message.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Entry counts of (monthly, industries, occupations). A series that is
    /// not an array counts as zero.
    pub fn entry_counts(&self) -> (usize, usize, usize) {
        let count = |v: &Value| v.as_array().map_or(0, Vec::len);
        (
            count(&self.monthly),
            count(&self.industries),
            count(&self.occupations),
        )
    }

    /// `generated_at` as a UTC timestamp. Accepts an RFC 3339 string or
    /// integer Unix seconds; anything else yields `None`.
    pub fn generated_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self.generated_at.as_ref()? {
            Value::String(raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&chrono::Utc)),
            Value::Number(n) => chrono::DateTime::from_timestamp(n.as_i64()?, 0),
            _ => None,
        }
    }
}
