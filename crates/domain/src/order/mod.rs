//! Order aggregate and related types.

mod aggregate;
mod number;
pub mod pricing;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use number::generate_order_number;
pub use state::{OrderItemStatus, OrderStatus, PaymentMethod, PaymentStatus};
pub use value_objects::{Money, OrderItem, ShippingAddress};

use thiserror::Error;

/// Errors raised by the order state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A cancelled order accepts no further status updates.
    #[error("order is cancelled and its status can no longer change")]
    StatusLocked,

    /// Cancellation is not allowed once fulfilment has started.
    #[error("order cannot be cancelled in the {status} state")]
    CannotCancel { status: OrderStatus },

    /// The order was already cancelled; the restock ran exactly once.
    #[error("order is already cancelled")]
    AlreadyCancelled,

    /// A cancellation must carry a reason.
    #[error("cancellation reason must not be blank")]
    ReasonRequired,
}
