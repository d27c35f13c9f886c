use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

/// An account the user claims to have on another service.
///
/// Either `username` or `userid` is normally set, but neither is required.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAccount {
    /// Domain of the service the account lives on.
    pub domain: String,
    /// The username of the account.
    #[ts(optional)]
    pub username: Option<String>,
    /// The user id of the account.
    #[ts(optional)]
    pub userid: Option<String>,
    /// Link to the account's profile.
    #[ts(optional)]
    pub profile_url: Option<String>,
    /// Whether the provider has verified the account with the other service.
    #[ts(optional)]
    pub verified: Option<bool>,
}

impl ProfileAccount {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            username: None,
            userid: None,
            profile_url: None,
            verified: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_required() {
        let result = serde_json::from_str::<ProfileAccount>(r#"{"username":"ana"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn wire_names() {
        let account = ProfileAccount {
            userid: Some("42".to_string()),
            profile_url: Some("https://example.com/ana".to_string()),
            verified: Some(false),
            ..ProfileAccount::new("example.com")
        };

        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            serde_json::json!({
                "domain": "example.com",
                "userid": "42",
                "profileUrl": "https://example.com/ana",
                "verified": false
            })
        );
    }
}
