//! Session Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Session UUID
pub type SessionUuid = TypedUuid<SessionRecord>;

/// Session Item UUID
pub type SessionItemUuid = TypedUuid<SessionItemRecord>;

/// One customer's interaction with one cart, from claim to checkout.
///
/// Exactly one session may be `Active` per cart; a session moves
/// active → completed once and never back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: SessionUuid,
    pub cart_id: String,
    pub user_id: String,
    pub status: SessionStatus,
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub started_at: Timestamp,
    #[serde(default, with = "jiff::fmt::serde::timestamp::millisecond::optional")]
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// A line item within a session: at most one row per barcode, repeat scans
/// bump the quantity instead of inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionItemRecord {
    pub item_id: SessionItemUuid,
    pub session_id: SessionUuid,
    pub product_id: String,
    pub barcode: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub scanned_by: String,
}
