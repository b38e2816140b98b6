//! Products service errors.

use thiserror::Error;

use crate::store::RowStoreError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("row store error")]
    Store(#[from] RowStoreError),
}
