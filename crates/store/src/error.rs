use common::{OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An order with this id is already stored.
    #[error("order {0} already exists")]
    OrderAlreadyExists(OrderId),

    /// Another order already carries this order number.
    #[error("order number {0} already exists")]
    DuplicateOrderNumber(String),

    /// The order to update is not in the store.
    #[error("order {0} does not exist")]
    OrderMissing(OrderId),

    /// The order was modified concurrently.
    #[error("version conflict for order {order_id}: expected {expected}, actual {actual}")]
    VersionConflict {
        order_id: OrderId,
        expected: u64,
        actual: u64,
    },

    /// A stock adjustment referenced an unknown product.
    #[error("product {0} does not exist")]
    ProductMissing(ProductId),

    /// A deduction exceeded the available stock at commit time.
    #[error("insufficient stock for {product_name}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        product_name: String,
        requested: u32,
        available: u32,
    },
}
