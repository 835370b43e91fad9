//! Shared identifier types for the commerce backend.
//!
//! Every entity gets its own UUID-backed newtype so an order id can never
//! be passed where a product id is expected.

mod types;

pub use types::{OrderId, ProductId, UserId};
