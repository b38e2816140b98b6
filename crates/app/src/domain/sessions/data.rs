//! Session Data

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::sessions::records::SessionStatus;

/// Partial update applied to a session row at checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCompletion {
    pub status: SessionStatus,
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub completed_at: Timestamp,
    pub total_amount: Decimal,
}

/// Partial update applied to an item row when its quantity changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuantityPatch {
    pub quantity: u32,
    pub total_price: Decimal,
}
