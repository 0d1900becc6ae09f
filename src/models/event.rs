use crate::models::event_type::EventKind;
use crate::models::payload::{self, lenient};
use serde::Deserialize;
use serde_json::Value;

/// One activity record as returned by `GET /users/{user}/events`.
///
/// All fields are optional: the formatter substitutes defaults for anything
/// missing instead of rejecting the record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub repo: Option<Repo>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Repo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl Event {
    pub fn event_kind(&self) -> EventKind {
        EventKind::from_tag(self.kind.as_deref())
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|r| r.name.as_deref())
    }

    pub fn payload_as<T: serde::de::DeserializeOwned + Default>(&self) -> T {
        payload::decode(&self.payload)
    }
}
