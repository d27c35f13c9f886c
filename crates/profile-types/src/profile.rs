use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;
use serde_with::skip_serializing_none;
use ts_rs::TS;

use crate::{
    account::ProfileAccount, address::ProfileAddress, date::ProfileDate, error::ProfileError,
    item::ProfileItem, name::ProfileName, organization::ProfileOrganization,
};

/// A user profile normalized from an identity provider's response.
///
/// `provider`, `id`, `raw` and `json` are always present. Every other field is
/// `None` when the provider did not supply it; an empty string or an empty
/// list is a value the provider sent, not a stand-in for "unknown".
///
/// `T` is the shape of the parsed provider payload. Untyped consumers keep the
/// default [`serde_json::Value`]; typed consumers pick their own type through
/// [`Profile::from_raw`] or [`Profile::narrow`].
///
/// `provider` + `id` identifying one real account, at most one `primary` item
/// per list and legal calendar dates are all left to the producer. Nothing in
/// this crate checks them.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile<T = JsonValue> {
    /// Identifier of the provider the profile came from.
    pub provider: String,
    /// The user's id within the provider.
    pub id: String,
    /// The user's username.
    #[ts(optional)]
    pub username: Option<String>,
    /// The user's displayed or preferred name.
    #[ts(optional)]
    pub display_name: Option<String>,
    /// Link to the user's profile on the provider.
    #[ts(optional)]
    pub profile_url: Option<String>,
    /// The gender the user identifies as.
    #[ts(optional)]
    pub gender: Option<String>,
    /// The user's birthday.
    #[ts(optional)]
    pub birthday: Option<ProfileDate>,
    /// A short description about the user.
    #[ts(optional)]
    pub about_me: Option<String>,
    /// When the user created the profile on the provider.
    #[ts(optional)]
    pub created: Option<DateTime<Utc>>,
    /// The user's real name.
    #[ts(optional)]
    pub name: Option<ProfileName>,
    /// Email addresses associated with the user.
    #[ts(optional)]
    pub emails: Option<Vec<ProfileItem>>,
    /// Photos of the user.
    #[ts(optional)]
    pub photos: Option<Vec<ProfileItem>>,
    /// Urls associated with the user.
    #[ts(optional)]
    pub urls: Option<Vec<ProfileItem>>,
    /// Phone numbers associated with the user.
    #[ts(optional)]
    pub phone_numbers: Option<Vec<ProfileItem>>,
    /// Physical addresses associated with the user.
    #[ts(optional)]
    pub addresses: Option<Vec<ProfileAddress>>,
    /// Organizations the user is or has been part of.
    #[ts(optional)]
    pub organizations: Option<Vec<ProfileOrganization>>,
    /// Accounts the user has on other services.
    #[ts(optional)]
    pub accounts: Option<Vec<ProfileAccount>>,
    /// The response body exactly as the provider returned it.
    #[serde(rename = "_raw")]
    pub raw: String,
    /// The parsed form of `_raw`.
    #[serde(rename = "_json")]
    pub json: T,
}

impl<T> Profile<T> {
    /// A profile with only the required fields set.
    ///
    /// `json` must be the parse of `raw`; [`Profile::from_raw`] guarantees that.
    pub fn new(
        provider: impl Into<String>,
        id: impl Into<String>,
        raw: impl Into<String>,
        json: T,
    ) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
            username: None,
            display_name: None,
            profile_url: None,
            gender: None,
            birthday: None,
            about_me: None,
            created: None,
            name: None,
            emails: None,
            photos: None,
            urls: None,
            phone_numbers: None,
            addresses: None,
            organizations: None,
            accounts: None,
            raw: raw.into(),
            json,
        }
    }

    pub fn primary_email(&self) -> Option<&ProfileItem> {
        self.emails.as_deref().and_then(ProfileItem::find_primary)
    }

    fn with_payload<U>(self, json: U) -> Profile<U> {
        Profile {
            provider: self.provider,
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            profile_url: self.profile_url,
            gender: self.gender,
            birthday: self.birthday,
            about_me: self.about_me,
            created: self.created,
            name: self.name,
            emails: self.emails,
            photos: self.photos,
            urls: self.urls,
            phone_numbers: self.phone_numbers,
            addresses: self.addresses,
            organizations: self.organizations,
            accounts: self.accounts,
            raw: self.raw,
            json,
        }
    }
}

impl<T: DeserializeOwned> Profile<T> {
    /// Parses `raw` into the payload type, so `json` and `raw` cannot disagree.
    pub fn from_raw(
        provider: impl Into<String>,
        id: impl Into<String>,
        raw: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let provider = provider.into();
        let raw = raw.into();

        let json = match serde_json::from_str::<T>(&raw) {
            Ok(json) => json,
            Err(source) => {
                tracing::debug!(%provider, error = %source, "failed to parse provider payload");
                return Err(ProfileError::InvalidPayload { provider, source });
            }
        };
        tracing::debug!(%provider, bytes = raw.len(), "parsed provider payload");

        Ok(Self::new(provider, id, raw, json))
    }
}

impl Profile<JsonValue> {
    /// Re-types the payload, keeping every other field.
    pub fn narrow<U: DeserializeOwned>(mut self) -> Result<Profile<U>, ProfileError> {
        let json = serde_json::from_value(self.json.take()).map_err(ProfileError::PayloadShape)?;
        Ok(self.with_payload(json))
    }
}

impl<T> Profile<T> {
    /// Erases the payload type back to [`serde_json::Value`].
    ///
    /// The untyped payload is parsed again from `_raw`, so fields the typed
    /// payload does not model are not lost.
    pub fn into_untyped(self) -> Result<Profile<JsonValue>, ProfileError> {
        match serde_json::from_str(&self.raw) {
            Ok(json) => Ok(self.with_payload(json)),
            Err(source) => Err(ProfileError::InvalidPayload {
                provider: self.provider,
                source,
            }),
        }
    }
}
