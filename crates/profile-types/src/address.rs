use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

/// A physical address. `formatted` is never derived from the components.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAddress {
    /// The full mailing address formatted for display.
    #[ts(optional)]
    pub formatted: Option<String>,
    /// The street address.
    #[ts(optional)]
    pub street_address: Option<String>,
    /// City or locality.
    #[ts(optional)]
    pub locality: Option<String>,
    /// State or region.
    #[ts(optional)]
    pub region: Option<String>,
    /// The zip or postal code.
    #[ts(optional)]
    pub postal_code: Option<String>,
    /// Country name.
    #[ts(optional)]
    pub country: Option<String>,
}

impl ProfileAddress {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_to_empty_object() {
        let address = ProfileAddress::default();
        assert!(address.is_empty());
        assert_eq!(serde_json::to_string(&address).unwrap(), "{}");
    }

    #[test]
    fn uses_camel_case_keys() {
        let address = ProfileAddress {
            street_address: Some("1 Main St".to_string()),
            postal_code: Some("12345".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            serde_json::json!({ "streetAddress": "1 Main St", "postalCode": "12345" })
        );
    }
}
