//! Cart Records

use serde::{Deserialize, Serialize};

/// A physical cart, provisioned externally and identified by the code
/// printed on its QR label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecord {
    pub cart_id: String,
    pub status: CartStatus,
    #[serde(default)]
    pub qr_code_data: Option<String>,
    #[serde(default)]
    pub store_location: Option<String>,
}

/// Claim state of a cart. A cart is `Available` exactly when no active
/// session owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Available,
    InUse,
}
