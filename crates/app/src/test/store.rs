//! In-memory row store double.
//!
//! Holds rows as raw JSON per resource and applies the same equality-filter
//! semantics as the REST client, so service tests exercise the full
//! read-after-write paths without a network.

use std::sync::Mutex;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::store::{Filter, RowStore, RowStoreError};

#[derive(Debug, Default)]
pub(crate) struct MemoryRowStore {
    tables: Mutex<FxHashMap<String, Vec<Value>>>,
}

impl MemoryRowStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, bypassing the client surface.
    pub(crate) fn seed(&self, resource: &str, row: Value) {
        self.lock_tables()
            .entry(resource.to_string())
            .or_default()
            .push(row);
    }

    /// All rows currently held for `resource`.
    pub(crate) fn rows(&self, resource: &str) -> Vec<Value> {
        self.lock_tables().get(resource).cloned().unwrap_or_default()
    }

    fn lock_tables(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, Vec<Value>>> {
        self.tables.lock().expect("row store mutex poisoned")
    }

    fn matches(row: &Value, filters: &[Filter]) -> bool {
        filters.iter().all(|filter| {
            row.get(filter.field()).is_some_and(|value| match value {
                Value::String(text) => text == filter.value(),
                other => other.to_string() == filter.value(),
            })
        })
    }
}

#[async_trait]
impl RowStore for MemoryRowStore {
    async fn select(&self, resource: &str, filters: &[Filter]) -> Result<Vec<Value>, RowStoreError> {
        let tables = self.lock_tables();

        Ok(tables
            .get(resource)
            .map(|rows| {
                rows.iter()
                    .filter(|row| Self::matches(row, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(&self, resource: &str, row: Value) -> Result<(), RowStoreError> {
        self.seed(resource, row);

        Ok(())
    }

    async fn update(
        &self,
        resource: &str,
        filters: &[Filter],
        changes: Value,
    ) -> Result<(), RowStoreError> {
        let mut tables = self.lock_tables();

        if let (Some(rows), Value::Object(changes)) = (tables.get_mut(resource), changes) {
            for row in rows.iter_mut().filter(|row| Self::matches(row, filters)) {
                if let Value::Object(fields) = row {
                    for (key, value) in &changes {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        Ok(())
    }

    async fn delete(&self, resource: &str, filters: &[Filter]) -> Result<(), RowStoreError> {
        let mut tables = self.lock_tables();

        if let Some(rows) = tables.get_mut(resource) {
            rows.retain(|row| !Self::matches(row, filters));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn select_applies_every_filter() {
        let store = MemoryRowStore::new();
        store.seed("items", json!({"sessionId": "s1", "barcode": "0001"}));
        store.seed("items", json!({"sessionId": "s1", "barcode": "0002"}));
        store.seed("items", json!({"sessionId": "s2", "barcode": "0001"}));

        let rows = store
            .select(
                "items",
                &[Filter::eq("sessionId", "s1"), Filter::eq("barcode", "0001")],
            )
            .await
            .expect("select should succeed");

        assert_eq!(rows.len(), 1, "both filters should apply");
    }

    #[tokio::test]
    async fn select_unknown_resource_returns_empty_list() {
        let store = MemoryRowStore::new();

        let rows = store
            .select("missing", &[])
            .await
            .expect("select should succeed");

        assert!(rows.is_empty(), "unknown resource is an empty list");
    }

    #[tokio::test]
    async fn update_merges_fields_into_matching_rows() {
        let store = MemoryRowStore::new();
        store.seed("carts", json!({"cartId": "C1", "status": "available"}));

        store
            .update(
                "carts",
                &[Filter::eq("cartId", "C1")],
                json!({"status": "in_use"}),
            )
            .await
            .expect("update should succeed");

        let rows = store.rows("carts");
        let row = rows.first().expect("row should exist");
        assert_eq!(row.get("status").and_then(Value::as_str), Some("in_use"));
        assert_eq!(
            row.get("cartId").and_then(Value::as_str),
            Some("C1"),
            "untouched fields must survive the merge"
        );
    }
}
