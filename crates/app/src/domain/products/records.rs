//! Product Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry. Read-only reference data from the orchestrator's point of
/// view; the barcode is the scan-time lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: String,
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock_quantity: i64,
}
