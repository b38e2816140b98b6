//! Orders Repository

use crate::{
    domain::orders::records::{OrderItemRecord, OrderRecord},
    store::{RowStore, RowStoreError, encode_row, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestOrdersRepository;

impl RestOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        store: &dyn RowStore,
        order: &OrderRecord,
    ) -> Result<(), RowStoreError> {
        store.insert(resources::ORDERS, encode_row(order)?).await
    }

    pub(crate) async fn create_order_item(
        &self,
        store: &dyn RowStore,
        item: &OrderItemRecord,
    ) -> Result<(), RowStoreError> {
        store.insert(resources::ORDER_ITEMS, encode_row(item)?).await
    }
}
