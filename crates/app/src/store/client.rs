//! Row-store client contract.

use async_trait::async_trait;
use mockall::automock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::store::{Filter, errors::RowStoreError};

/// Filtered CRUD over named remote resources.
///
/// Each call is an independent remote operation; there are no client-side
/// transactions. Callers sequencing several writes must tolerate partial
/// completion.
#[automock]
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Return all rows matching every filter. An empty match is an empty
    /// list, not an error.
    async fn select(&self, resource: &str, filters: &[Filter]) -> Result<Vec<Value>, RowStoreError>;

    /// Create one row.
    async fn insert(&self, resource: &str, row: Value) -> Result<(), RowStoreError>;

    /// Set fields on every row matching the filters.
    async fn update(
        &self,
        resource: &str,
        filters: &[Filter],
        changes: Value,
    ) -> Result<(), RowStoreError>;

    /// Delete every row matching the filters.
    async fn delete(&self, resource: &str, filters: &[Filter]) -> Result<(), RowStoreError>;
}

pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, RowStoreError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(RowStoreError::Decode))
        .collect()
}

pub(crate) fn encode_row<T: Serialize>(row: &T) -> Result<Value, RowStoreError> {
    serde_json::to_value(row).map_err(RowStoreError::Decode)
}
