//! Session Items Repository

use crate::{
    domain::sessions::{
        data::ItemQuantityPatch,
        records::{SessionItemRecord, SessionItemUuid, SessionUuid},
    },
    store::{Filter, RowStore, RowStoreError, decode_rows, encode_row, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestSessionItemsRepository;

impl RestSessionItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_for_session(
        &self,
        store: &dyn RowStore,
        session: SessionUuid,
    ) -> Result<Vec<SessionItemRecord>, RowStoreError> {
        let rows = store
            .select(
                resources::SESSION_ITEMS,
                &[Filter::eq("sessionId", session.to_string())],
            )
            .await?;

        decode_rows(rows)
    }

    pub(crate) async fn find_for_barcode(
        &self,
        store: &dyn RowStore,
        session: SessionUuid,
        barcode: &str,
    ) -> Result<Option<SessionItemRecord>, RowStoreError> {
        let rows = store
            .select(
                resources::SESSION_ITEMS,
                &[
                    Filter::eq("sessionId", session.to_string()),
                    Filter::eq("barcode", barcode),
                ],
            )
            .await?;

        Ok(decode_rows::<SessionItemRecord>(rows)?.into_iter().next())
    }

    pub(crate) async fn find_by_id(
        &self,
        store: &dyn RowStore,
        item: SessionItemUuid,
    ) -> Result<Option<SessionItemRecord>, RowStoreError> {
        let rows = store
            .select(
                resources::SESSION_ITEMS,
                &[Filter::eq("itemId", item.to_string())],
            )
            .await?;

        Ok(decode_rows::<SessionItemRecord>(rows)?.into_iter().next())
    }

    pub(crate) async fn create(
        &self,
        store: &dyn RowStore,
        item: &SessionItemRecord,
    ) -> Result<(), RowStoreError> {
        store
            .insert(resources::SESSION_ITEMS, encode_row(item)?)
            .await
    }

    pub(crate) async fn set_quantity(
        &self,
        store: &dyn RowStore,
        item: SessionItemUuid,
        patch: &ItemQuantityPatch,
    ) -> Result<(), RowStoreError> {
        store
            .update(
                resources::SESSION_ITEMS,
                &[Filter::eq("itemId", item.to_string())],
                encode_row(patch)?,
            )
            .await
    }

    pub(crate) async fn delete(
        &self,
        store: &dyn RowStore,
        item: SessionItemUuid,
    ) -> Result<(), RowStoreError> {
        store
            .delete(
                resources::SESSION_ITEMS,
                &[Filter::eq("itemId", item.to_string())],
            )
            .await
    }
}
