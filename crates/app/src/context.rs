//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::StoreConfig,
    domain::{
        products::{ProductsService, RestProductsService},
        sessions::{RestSessionsService, SessionsService, state::SessionState},
    },
    store::{RestRowStore, RowStore, RowStoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to configure row store client")]
    Store(#[source] RowStoreError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub sessions: Arc<dyn SessionsService>,
}

impl AppContext {
    /// Build the application context from row-store credentials.
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are missing.
    pub fn from_config(config: StoreConfig) -> Result<Self, AppInitError> {
        let store: Arc<dyn RowStore> =
            Arc::new(RestRowStore::new(config).map_err(AppInitError::Store)?);
        let state = Arc::new(SessionState::new());

        Ok(Self {
            products: Arc::new(RestProductsService::new(Arc::clone(&store))),
            sessions: Arc::new(RestSessionsService::new(store, state)),
        })
    }
}
