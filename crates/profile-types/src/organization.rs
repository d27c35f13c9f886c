use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

use crate::address::ProfileAddress;

/// An organization the user is or was part of.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOrganization {
    /// The name of the organization.
    #[ts(optional)]
    pub name: Option<String>,
    /// The department within the organization.
    #[ts(optional)]
    pub department: Option<String>,
    /// Job title or role within the organization.
    #[ts(optional)]
    pub title: Option<String>,
    /// Free-text organization type.
    #[serde(rename = "type")]
    #[ts(optional)]
    pub kind: Option<String>,
    /// When the user joined. Not checked against `end_date`.
    #[ts(optional)]
    pub start_date: Option<DateTime<Utc>>,
    /// When the user left.
    #[ts(optional)]
    pub end_date: Option<DateTime<Utc>>,
    /// The physical location of the organization.
    #[ts(optional)]
    pub location: Option<OrganizationLocation>,
    /// Description of the user's role in the organization.
    #[ts(optional)]
    pub description: Option<String>,
}

/// Where an organization is located, as precise as the provider knows it.
///
/// On the wire a JSON string is `Text` and a JSON object is `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(untagged)]
pub enum OrganizationLocation {
    Text(String),
    Address(ProfileAddress),
}

impl OrganizationLocation {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OrganizationLocation::Text(text) => Some(text),
            OrganizationLocation::Address(_) => None,
        }
    }

    pub fn as_address(&self) -> Option<&ProfileAddress> {
        match self {
            OrganizationLocation::Text(_) => None,
            OrganizationLocation::Address(address) => Some(address),
        }
    }
}

impl From<String> for OrganizationLocation {
    fn from(text: String) -> Self {
        OrganizationLocation::Text(text)
    }
}

impl From<&str> for OrganizationLocation {
    fn from(text: &str) -> Self {
        OrganizationLocation::Text(text.to_string())
    }
}

impl From<ProfileAddress> for OrganizationLocation {
    fn from(address: ProfileAddress) -> Self {
        OrganizationLocation::Address(address)
    }
}
