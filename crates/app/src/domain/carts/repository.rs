//! Carts Repository

use crate::{
    domain::carts::{
        data::CartStatusPatch,
        records::{CartRecord, CartStatus},
    },
    store::{Filter, RowStore, RowStoreError, decode_rows, encode_row, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestCartsRepository;

impl RestCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_code(
        &self,
        store: &dyn RowStore,
        cart_id: &str,
    ) -> Result<Option<CartRecord>, RowStoreError> {
        let rows = store
            .select(resources::CARTS, &[Filter::eq("cartId", cart_id)])
            .await?;

        Ok(decode_rows::<CartRecord>(rows)?.into_iter().next())
    }

    pub(crate) async fn set_status(
        &self,
        store: &dyn RowStore,
        cart_id: &str,
        status: CartStatus,
    ) -> Result<(), RowStoreError> {
        store
            .update(
                resources::CARTS,
                &[Filter::eq("cartId", cart_id)],
                encode_row(&CartStatusPatch { status })?,
            )
            .await
    }
}
