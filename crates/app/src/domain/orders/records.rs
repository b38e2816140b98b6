//! Order Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::sessions::records::SessionUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// The permanent record created once per completed checkout. Totals are
/// frozen at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: OrderUuid,
    pub session_id: SessionUuid,
    pub user_id: String,
    pub total_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    pub order_status: String,
}

/// A denormalized line of an order. Product name and category are copied at
/// checkout time so later catalog edits do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub order_item_id: OrderItemUuid,
    pub order_id: OrderUuid,
    pub product_id: String,
    pub product_name: String,
    pub barcode: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
}
