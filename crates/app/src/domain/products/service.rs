//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::{
        errors::ProductsServiceError, records::ProductRecord, repository::RestProductsRepository,
    },
    store::RowStore,
};

#[derive(Clone)]
pub struct RestProductsService {
    store: Arc<dyn RowStore>,
    repository: RestProductsRepository,
}

impl RestProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            store,
            repository: RestProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for RestProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.list(self.store.as_ref()).await?;

        Ok(products)
    }

    async fn get_by_barcode(&self, barcode: &str) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_by_barcode(self.store.as_ref(), barcode)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the whole catalog.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Look up one product by its scannable code.
    async fn get_by_barcode(&self, barcode: &str) -> Result<ProductRecord, ProductsServiceError>;
}
