use serde::Deserialize;

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================
//
// Fields are optional so an absent field is reported as a validation failure
// by the service rather than as a deserialization error.
//
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceOrder {
    pub user_id: Option<String>,
    pub items: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyCode {
    pub order_id: Option<i64>,
    pub code: Option<String>,
}
