//! Minimal per-kind payload shapes.
//!
//! Only the fields the formatter reads are modelled. Every field is optional
//! and `decode` falls back to the all-`None` value when the raw payload does
//! not fit the shape, so a malformed payload can never abort formatting.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a raw payload into `T`, or `T::default()` when it does not fit.
pub fn decode<T: DeserializeOwned + Default>(raw: &Value) -> T {
    if raw.is_null() {
        return T::default();
    }
    match serde_json::from_value(raw.clone()) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "payload does not match expected shape, using defaults");
            T::default()
        }
    }
}

/// Deserialize an optional field, mapping a value of the wrong JSON type to
/// `None` rather than failing the enclosing structure.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct PushPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub commits: Option<Vec<Value>>,
}

impl PushPayload {
    pub fn commit_count(&self) -> usize {
        self.commits.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Titled {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct IssuesPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub issue: Option<Titled>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct PullRequestPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<Titled>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Forkee {
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ForkPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub forkee: Option<Forkee>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CreatePayload {
    #[serde(default, deserialize_with = "lenient")]
    pub ref_type: Option<String>,
}
