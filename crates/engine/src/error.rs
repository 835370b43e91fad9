use common::{ProductId, UserId};
use domain::OrderError;
use store::StoreError;
use thiserror::Error;

/// Errors surfaced by the order lifecycle engine.
///
/// Every variant is terminal for the triggering request; the engine never
/// retries. Ownership violations get their own [`Forbidden`] kind instead
/// of being folded into the status errors, so callers can map them to a
/// distinct response.
///
/// [`Forbidden`]: EngineError::Forbidden
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Customer lookup failed.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// A line item referenced an unknown product.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Order lookup failed (by id or by order number).
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// The creation request was invalid (empty cart, unavailable product).
    #[error("cannot create order: {reason}")]
    OrderCreation { reason: String },

    /// A requested quantity exceeded the available stock.
    #[error(
        "insufficient stock for {product_name}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        product_name: String,
        requested: u32,
        available: u32,
    },

    /// The order state machine rejected the operation.
    #[error(transparent)]
    Status(#[from] OrderError),

    /// The caller is not allowed to perform this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The order was modified concurrently; the caller may re-read and
    /// re-issue the request.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Another storage failure.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InsufficientStock {
                product_id,
                product_name,
                requested,
                available,
            } => EngineError::InsufficientStock {
                product_id,
                product_name,
                requested,
                available,
            },
            e @ StoreError::VersionConflict { .. } => EngineError::Conflict(e.to_string()),
            other => EngineError::Store(other),
        }
    }
}
