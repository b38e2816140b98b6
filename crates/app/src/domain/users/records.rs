//! User Records

use serde::{Deserialize, Serialize};

/// Shopper identity row. The id is caller-supplied; authentication is
/// outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}
