//! Order and payment state machines.

use serde::{Deserialize, Serialize};

/// The lifecycle state of an order.
///
/// The happy path is:
/// ```text
/// PendingPayment ──► Processing ──► Shipped ──► Delivered ──► Completed
/// ```
/// with `Cancelled`, `Returned` and `Refunded` reachable as side branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created, awaiting payment.
    #[default]
    PendingPayment,

    /// Payment confirmed, order is being fulfilled.
    Processing,

    /// Handed to the carrier.
    Shipped,

    /// Received by the customer.
    Delivered,

    /// Transaction closed.
    Completed,

    /// Order was cancelled.
    Cancelled,

    /// Goods were returned.
    Returned,

    /// Payment was refunded.
    Refunded,
}

impl OrderStatus {
    /// Returns true if a status update may still be applied.
    ///
    /// Cancellation is final: a cancelled order accepts no further updates.
    pub fn accepts_status_updates(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// Returns true if the order can still be cancelled from this state.
    ///
    /// Once goods have shipped (or later) the order is past the point of
    /// no return; a cancelled order cannot be cancelled a second time.
    pub fn can_cancel(&self) -> bool {
        !matches!(
            self,
            OrderStatus::Shipped
                | OrderStatus::Delivered
                | OrderStatus::Completed
                | OrderStatus::Cancelled
        )
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Returned => "RETURNED",
            OrderStatus::Refunded => "REFUNDED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The payment state of an order, tracked independently of fulfilment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Awaiting payment.
    #[default]
    Pending,

    /// Payment received in full.
    Paid,

    /// Payment returned to the customer.
    Refunded,

    /// Payment failed or was voided.
    Failed,

    /// Partial payment received.
    PartiallyPaid,
}

impl PaymentStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::PartiallyPaid => "PARTIALLY_PAID",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    WechatPay,
    Alipay,
    BankTransfer,
    CashOnDelivery,
}

/// Per-line-item fulfilment state, independent of the order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderItemStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_pending_payment() {
        assert_eq!(OrderStatus::default(), OrderStatus::PendingPayment);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert_eq!(OrderItemStatus::default(), OrderItemStatus::Pending);
    }

    #[test]
    fn cancelled_accepts_no_status_updates() {
        assert!(!OrderStatus::Cancelled.accepts_status_updates());
        assert!(OrderStatus::PendingPayment.accepts_status_updates());
        assert!(OrderStatus::Refunded.accepts_status_updates());
        assert!(OrderStatus::Completed.accepts_status_updates());
    }

    #[test]
    fn can_cancel_only_before_shipment() {
        assert!(OrderStatus::PendingPayment.can_cancel());
        assert!(OrderStatus::Processing.can_cancel());
        assert!(OrderStatus::Returned.can_cancel());
        assert!(OrderStatus::Refunded.can_cancel());
        assert!(!OrderStatus::Shipped.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
        assert!(!OrderStatus::Completed.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }

    #[test]
    fn statuses_serialize_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PendingPayment).unwrap(),
            "\"PENDING_PAYMENT\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::PartiallyPaid).unwrap(),
            "\"PARTIALLY_PAID\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"CASH_ON_DELIVERY\""
        );
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(OrderStatus::PendingPayment.to_string(), "PENDING_PAYMENT");
        assert_eq!(PaymentStatus::Paid.to_string(), "PAID");
    }
}
