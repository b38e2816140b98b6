//! Sessions service errors.

use thiserror::Error;

use crate::store::RowStoreError;

#[derive(Debug, Error)]
pub enum SessionsServiceError {
    /// A session is already active in this process; finish or abandon it
    /// before claiming another cart.
    #[error("a shopping session is already active")]
    SessionAlreadyActive,

    #[error("no active shopping session")]
    NoActiveSession,

    #[error("cart not found")]
    CartNotFound,

    #[error("cart is currently in use")]
    CartUnavailable,

    #[error("product not found")]
    ProductNotFound,

    #[error("row store error")]
    Store(#[from] RowStoreError),
}
