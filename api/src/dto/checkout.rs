use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::address::Address;
use sf_core::domain::entities::checkout::{CheckoutRequest, CustomerDetails};

/// Body of `POST /api/checkout`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    /// Code mailed by `GET /api/verify`, or the operator bypass value
    #[validate(length(min = 1, max = 64))]
    pub verification_code: String,

    #[validate(length(max = 256))]
    #[serde(default)]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 64))]
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: AddressPayload,
}

/// Billing address as sent by the storefront
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
}

impl From<CheckoutPayload> for CheckoutRequest {
    fn from(payload: CheckoutPayload) -> Self {
        CheckoutRequest {
            verification_code: payload.verification_code,
            customer: CustomerDetails {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                address: Address {
                    line1: payload.address.line1,
                    line2: payload.address.line2,
                    city: payload.address.city,
                    postal_code: payload.address.postal_code,
                },
            },
        }
    }
}

/// Successful checkout: where to redirect the shopper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub url: String,
}
