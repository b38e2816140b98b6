//! Products Repository

use crate::{
    domain::products::records::ProductRecord,
    store::{Filter, RowStore, RowStoreError, decode_rows, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestProductsRepository;

impl RestProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list(
        &self,
        store: &dyn RowStore,
    ) -> Result<Vec<ProductRecord>, RowStoreError> {
        let rows = store.select(resources::PRODUCTS, &[]).await?;

        decode_rows(rows)
    }

    pub(crate) async fn find_by_barcode(
        &self,
        store: &dyn RowStore,
        barcode: &str,
    ) -> Result<Option<ProductRecord>, RowStoreError> {
        let rows = store
            .select(resources::PRODUCTS, &[Filter::eq("barcode", barcode)])
            .await?;

        Ok(decode_rows::<ProductRecord>(rows)?.into_iter().next())
    }

    pub(crate) async fn find_by_id(
        &self,
        store: &dyn RowStore,
        product_id: &str,
    ) -> Result<Option<ProductRecord>, RowStoreError> {
        let rows = store
            .select(resources::PRODUCTS, &[Filter::eq("productId", product_id)])
            .await?;

        Ok(decode_rows::<ProductRecord>(rows)?.into_iter().next())
    }
}
