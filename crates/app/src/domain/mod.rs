//! Trolley Domain Concerns

pub mod carts;
pub mod orders;
pub mod products;
pub mod sessions;
pub mod users;
