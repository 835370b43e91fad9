//! Order lifecycle engine.
//!
//! Orchestrates validation → inventory mutation → pricing → persistence for
//! order creation, and enforces the legal status and payment-status
//! transitions for update, cancellation, and deletion. Storage is consumed
//! through the [`store::CommerceStore`] trait; every operation is a single
//! atomic commit, and every failure path leaves storage unchanged.

mod engine;
mod error;
mod requests;

pub use engine::OrderEngine;
pub use error::EngineError;
pub use requests::{
    CancelOrderRequest, CreateOrderRequest, OrderItemRequest, UpdateOrderStatusRequest,
    UpdatePaymentStatusRequest,
};
