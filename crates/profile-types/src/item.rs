use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

/// A single entry of a multi-valued contact field (emails, phone numbers,
/// urls, photos).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
pub struct ProfileItem {
    /// The value, e.g. an email address or a photo url.
    pub value: String,
    /// Free-text category such as "home" or "work".
    #[serde(rename = "type")]
    #[ts(optional)]
    pub kind: Option<String>,
    /// Whether this is the primary or preferred value for the field.
    #[ts(optional)]
    pub primary: Option<bool>,
    /// Whether the provider has verified the value.
    #[ts(optional)]
    pub verified: Option<bool>,
}

impl ProfileItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: None,
            primary: None,
            verified: None,
        }
    }

    /// Returns the first item explicitly flagged as primary.
    ///
    /// Nothing is inferred from position: a list without a flagged item has no
    /// primary entry.
    pub fn find_primary(items: &[ProfileItem]) -> Option<&ProfileItem> {
        items.iter().find(|item| item.primary == Some(true))
    }
}
