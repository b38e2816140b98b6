//! REST row-store client.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde_json::Value;

use crate::{
    config::StoreConfig,
    store::{Filter, RowStore, errors::RowStoreError},
};

/// HTTP client for a hosted tabular backend exposing filtered CRUD under
/// `/rest/v1/<resource>`.
#[derive(Debug, Clone)]
pub struct RestRowStore {
    config: StoreConfig,
    http: Client,
}

impl RestRowStore {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RowStoreError::NotConfigured`] when the endpoint URL or
    /// API key is empty.
    pub fn new(config: StoreConfig) -> Result<Self, RowStoreError> {
        config.validate()?;

        Ok(Self {
            config,
            http: Client::new(),
        })
    }

    fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/rest/v1/{resource}",
            self.config.url.trim_end_matches('/')
        )
    }

    // The service key doubles as the bearer token; there is no separate
    // per-user token on this surface.
    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        self.http
            .request(method, self.resource_url(resource))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header(header::ACCEPT, "application/json")
    }

    fn filter_pairs(filters: &[Filter]) -> Vec<(String, String)> {
        filters.iter().map(Filter::to_query_pair).collect()
    }

    async fn check(response: Response) -> Result<Response, RowStoreError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();

        Err(RowStoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RowStore for RestRowStore {
    async fn select(&self, resource: &str, filters: &[Filter]) -> Result<Vec<Value>, RowStoreError> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        pairs.extend(Self::filter_pairs(filters));

        tracing::debug!(resource, filters = filters.len(), "select");

        let response = self
            .request(Method::GET, resource)
            .query(&pairs)
            .send()
            .await
            .map_err(RowStoreError::Unavailable)?;

        let body = Self::check(response)
            .await?
            .text()
            .await
            .map_err(RowStoreError::Unavailable)?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn insert(&self, resource: &str, row: Value) -> Result<(), RowStoreError> {
        tracing::debug!(resource, "insert");

        let response = self
            .request(Method::POST, resource)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(RowStoreError::Unavailable)?;

        Self::check(response).await?;

        Ok(())
    }

    async fn update(
        &self,
        resource: &str,
        filters: &[Filter],
        changes: Value,
    ) -> Result<(), RowStoreError> {
        tracing::debug!(resource, filters = filters.len(), "update");

        let response = self
            .request(Method::PATCH, resource)
            .query(&Self::filter_pairs(filters))
            .json(&changes)
            .send()
            .await
            .map_err(RowStoreError::Unavailable)?;

        Self::check(response).await?;

        Ok(())
    }

    async fn delete(&self, resource: &str, filters: &[Filter]) -> Result<(), RowStoreError> {
        tracing::debug!(resource, filters = filters.len(), "delete");

        let response = self
            .request(Method::DELETE, resource)
            .query(&Self::filter_pairs(filters))
            .send()
            .await
            .map_err(RowStoreError::Unavailable)?;

        Self::check(response).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> RestRowStore {
        RestRowStore::new(StoreConfig::new(url, "key")).expect("config should validate")
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let result = RestRowStore::new(StoreConfig::new("", ""));

        assert!(
            matches!(result, Err(RowStoreError::NotConfigured)),
            "expected NotConfigured, got {result:?}"
        );
    }

    #[test]
    fn resource_url_joins_under_rest_prefix() {
        let store = client("https://example.test");

        assert_eq!(
            store.resource_url("carts"),
            "https://example.test/rest/v1/carts"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let store = client("https://example.test/");

        assert_eq!(
            store.resource_url("products"),
            "https://example.test/rest/v1/products"
        );
    }
}
