use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

/// A breakout of the user's real name.
///
/// `formatted` and the individual parts are independent: a producer may send
/// either or both, and neither is derived from the other. For
/// "Dr. Timothy Antonio Smith, Jr." the parts are "Dr", "Timothy", "Antonio",
/// "Smith" and "Jr".
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    /// The full name, including all middle names, titles and suffixes,
    /// formatted for display, e.g. "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub formatted: Option<String>,
    /// The honorific prefix (title), e.g. the "Dr" in
    /// "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub honorific_prefix: Option<String>,
    /// The given (first) name, e.g. the "Timothy" in
    /// "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub given_name: Option<String>,
    /// The middle name, e.g. the "Antonio" in "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub middle_name: Option<String>,
    /// The family (last) name, e.g. the "Smith" in
    /// "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub family_name: Option<String>,
    /// The honorific suffix, e.g. the "Jr" in "Dr. Timothy Antonio Smith, Jr.".
    #[ts(optional)]
    pub honorific_suffix: Option<String>,
}

impl ProfileName {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_do_not_produce_formatted() {
        let name: ProfileName =
            serde_json::from_str(r#"{"givenName":"Ana","familyName":"Lee"}"#).unwrap();

        assert_eq!(name.given_name.as_deref(), Some("Ana"));
        assert_eq!(name.family_name.as_deref(), Some("Lee"));
        assert!(name.formatted.is_none());
        assert!(!name.is_empty());
    }

    #[test]
    fn empty_string_is_not_absent() {
        let name = ProfileName {
            middle_name: Some(String::new()),
            ..Default::default()
        };

        assert!(!name.is_empty());
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"middleName":""}"#);
    }
}
