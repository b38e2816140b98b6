//! Row-store access.
//!
//! The external store is the system of record for every entity. This module
//! owns the request surface: the [`RowStore`] contract, its REST
//! implementation, and the error taxonomy remote failures are classified
//! into.

pub mod errors;
pub mod filter;
pub mod resources;

mod client;
mod rest;

pub use client::{MockRowStore, RowStore};
pub(crate) use client::{decode_rows, encode_row};
pub use errors::RowStoreError;
pub use filter::Filter;
pub use rest::RestRowStore;
