//! Cart Data

use serde::Serialize;

use crate::domain::carts::records::CartStatus;

/// Partial update toggling a cart between available and in-use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartStatusPatch {
    pub status: CartStatus,
}
