//! JSON encoding of [`Profile`] values.
//!
//! Absent optional fields are omitted rather than written as `null`, and list
//! order is kept as-is, so decoding an encoded profile gives back an equal
//! value.

use serde::{Serialize, de::DeserializeOwned};

use crate::{error::ProfileError, profile::Profile};

pub fn to_json<T: Serialize>(profile: &Profile<T>) -> Result<String, ProfileError> {
    tracing::trace!(provider = %profile.provider, id = %profile.id, "encoding profile");
    Ok(serde_json::to_string(profile)?)
}

pub fn to_json_pretty<T: Serialize>(profile: &Profile<T>) -> Result<String, ProfileError> {
    tracing::trace!(provider = %profile.provider, id = %profile.id, "encoding profile");
    Ok(serde_json::to_string_pretty(profile)?)
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<Profile<T>, ProfileError> {
    let profile: Profile<T> = serde_json::from_str(input)?;
    tracing::trace!(provider = %profile.provider, id = %profile.id, "decoded profile");
    Ok(profile)
}

pub fn from_json_slice<T: DeserializeOwned>(input: &[u8]) -> Result<Profile<T>, ProfileError> {
    let profile: Profile<T> = serde_json::from_slice(input)?;
    tracing::trace!(provider = %profile.provider, id = %profile.id, "decoded profile");
    Ok(profile)
}
