//! Postal address and geocoding lookup types.

use serde::{Deserialize, Serialize};

/// Postal address as used by checkout and place lookups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPrediction {
    pub place_id: String,
    pub description: String,
}

/// One component of a place-details result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(long_name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            long_name: long_name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Address {
    /// Build an address from place-details components.
    ///
    /// Only the first type of each component is considered: `route` becomes
    /// `line1`, `street_number` is appended to it after a space, `locality`
    /// becomes `city` and `postal_code` becomes `postal_code`.
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut address = Address::default();
        let mut street_number = String::new();

        for component in components {
            match component.types.first().map(String::as_str) {
                Some("route") => address.line1 = component.long_name.clone(),
                Some("street_number") => street_number = component.long_name.clone(),
                Some("locality") => address.city = component.long_name.clone(),
                Some("postal_code") => address.postal_code = component.long_name.clone(),
                _ => {}
            }
        }

        if !street_number.is_empty() {
            address.line1.push(' ');
            address.line1.push_str(&street_number);
        }

        address
    }
}
