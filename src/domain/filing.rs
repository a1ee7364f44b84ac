use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a filing by its accession number.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilingRef {
    #[serde(default)]
    pub accession_number: Option<String>,
}

/// Typed view over the `metadata` object of a comparison payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonMetadata {
    /// Set by the backend when it compared an amendment instead of the
    /// requested filing. Usually the amendment's accession number.
    #[serde(default)]
    pub amendment_used: Option<Value>,
    #[serde(default)]
    pub latest_filing: Option<FilingRef>,
    #[serde(default)]
    pub previous_filing: Option<FilingRef>,
}

impl ComparisonMetadata {
    /// Reads the metadata of a comparison payload.
    ///
    /// A payload without `metadata`, or with a metadata object of an
    /// unexpected shape, is treated as carrying no metadata.
    pub fn from_payload(payload: &Value) -> Self {
        let Some(metadata) = payload.get("metadata") else {
            return Self::default();
        };

        match serde_json::from_value(metadata.clone()) {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!("Ignoring malformed comparison metadata: {err}");
                Self::default()
            }
        }
    }

    /// The amendment marker when it is set to a truthy value.
    pub fn swapped_filing(&self) -> Option<&Value> {
        self.amendment_used.as_ref().filter(|value| is_truthy(value))
    }

    pub fn latest_accession(&self) -> Option<&str> {
        self.latest_filing
            .as_ref()
            .and_then(|filing| filing.accession_number.as_deref())
    }

    pub fn previous_accession(&self) -> Option<&str> {
        self.previous_filing
            .as_ref()
            .and_then(|filing| filing.accession_number.as_deref())
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
