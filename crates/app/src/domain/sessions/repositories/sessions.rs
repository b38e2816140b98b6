//! Sessions Repository

use crate::{
    domain::sessions::{
        data::SessionCompletion,
        records::{SessionRecord, SessionUuid},
    },
    store::{Filter, RowStore, RowStoreError, encode_row, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestSessionsRepository;

impl RestSessionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create(
        &self,
        store: &dyn RowStore,
        session: &SessionRecord,
    ) -> Result<(), RowStoreError> {
        store.insert(resources::SESSIONS, encode_row(session)?).await
    }

    pub(crate) async fn complete(
        &self,
        store: &dyn RowStore,
        session: SessionUuid,
        completion: &SessionCompletion,
    ) -> Result<(), RowStoreError> {
        store
            .update(
                resources::SESSIONS,
                &[Filter::eq("sessionId", session.to_string())],
                encode_row(completion)?,
            )
            .await
    }
}
