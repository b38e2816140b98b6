//! Named remote resources.

pub const CARTS: &str = "carts";
pub const SESSIONS: &str = "shopping_sessions";
pub const PRODUCTS: &str = "products";
pub const SESSION_ITEMS: &str = "session_items";
pub const ORDERS: &str = "orders";
pub const ORDER_ITEMS: &str = "order_items";
pub const USERS: &str = "users";
