use crate::domain::entities::checkout::Cart;

/// Everything the payment provider needs to start a hosted session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionParams {
    pub customer_id: String,
    pub cart: Cart,
    pub success_url: String,
    pub cancel_url: String,
    pub automatic_tax: bool,
}
