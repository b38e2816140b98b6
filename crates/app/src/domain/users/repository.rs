//! Users Repository

use crate::{
    domain::users::records::UserRecord,
    store::{Filter, RowStore, RowStoreError, decode_rows, encode_row, resources},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct RestUsersRepository;

impl RestUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find(
        &self,
        store: &dyn RowStore,
        user_id: &str,
    ) -> Result<Option<UserRecord>, RowStoreError> {
        let rows = store
            .select(resources::USERS, &[Filter::eq("userId", user_id)])
            .await?;

        Ok(decode_rows::<UserRecord>(rows)?.into_iter().next())
    }

    pub(crate) async fn create(
        &self,
        store: &dyn RowStore,
        user: &UserRecord,
    ) -> Result<(), RowStoreError> {
        store.insert(resources::USERS, encode_row(user)?).await
    }
}
