//! Row-store endpoint configuration.

use crate::store::RowStoreError;

/// Service credentials for the hosted row store, supplied at process start.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the service, e.g. `"https://project.example.co"`.
    pub url: String,

    /// Service API key, sent as both the key header and the bearer token.
    pub api_key: String,
}

impl StoreConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fail fast when either credential is missing.
    ///
    /// # Errors
    ///
    /// Returns [`RowStoreError::NotConfigured`] when the URL or key is
    /// empty.
    pub fn validate(&self) -> Result<(), RowStoreError> {
        if self.url.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(RowStoreError::NotConfigured);
        }

        Ok(())
    }
}
