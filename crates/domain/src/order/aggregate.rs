//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::{OrderId, UserId};
use serde::{Deserialize, Serialize};

use super::pricing::OrderTotals;
use super::{
    Money, OrderError, OrderItem, OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress,
    generate_order_number,
};

/// Order aggregate root.
///
/// Owns its line items (they are destroyed with the order and never
/// referenced elsewhere) and holds non-owning id references to the customer
/// and, through the items, to products and merchants. All mutation goes
/// through the transition methods; the status machine is enforced there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Surrogate identifier.
    pub id: OrderId,

    /// Human-facing unique order number, generated at creation.
    pub order_number: String,

    /// Customer who placed the order.
    pub customer_id: UserId,

    /// Lifecycle state.
    pub status: OrderStatus,

    /// Payment state, tracked independently.
    pub payment_status: PaymentStatus,

    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,

    /// Sum of line item totals.
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub tax_amount: Money,
    /// Discount applied, never exceeding the subtotal.
    pub discount_amount: Money,
    /// Grand total, never negative.
    pub total_amount: Money,

    /// Shipping address snapshot taken at creation.
    pub shipping: ShippingAddress,

    /// Carrier handling the shipment.
    pub shipping_provider: Option<String>,
    pub tracking_number: Option<String>,

    /// External payment reference (gateway transaction id, etc.).
    pub payment_reference: Option<String>,

    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,

    /// Line items; non-empty for every persisted order.
    pub items: Vec<OrderItem>,

    /// Fixed at creation.
    pub order_date: DateTime<Utc>,
    pub payment_date: Option<DateTime<Utc>>,
    pub shipped_date: Option<DateTime<Utc>>,
    pub delivered_date: Option<DateTime<Utc>>,
    pub cancelled_date: Option<DateTime<Utc>>,

    /// Version for optimistic concurrency at the store boundary.
    #[serde(default)]
    pub version: u64,
}

impl Order {
    /// Assembles a new order in its initial state.
    ///
    /// The caller is responsible for having validated the items and priced
    /// them; this constructor only fixes the initial lifecycle state
    /// (`PENDING_PAYMENT` / `PENDING`) and stamps the order date.
    pub fn create(
        customer_id: UserId,
        items: Vec<OrderItem>,
        totals: OrderTotals,
        payment_method: Option<PaymentMethod>,
        shipping: ShippingAddress,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            order_number: generate_order_number(),
            customer_id,
            status: OrderStatus::PendingPayment,
            payment_status: PaymentStatus::Pending,
            payment_method,
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping_fee,
            tax_amount: totals.tax_amount,
            discount_amount: totals.discount_amount,
            total_amount: totals.total_amount,
            shipping,
            shipping_provider: None,
            tracking_number: None,
            payment_reference: None,
            notes,
            cancellation_reason: None,
            items,
            order_date: now,
            payment_date: None,
            shipped_date: None,
            delivered_date: None,
            cancelled_date: None,
            version: 0,
        }
    }

    /// Applies a caller-supplied target status.
    ///
    /// Fails once the order is cancelled. Entering `Shipped` stamps the
    /// shipped date; entering `Delivered` or `Completed` stamps the
    /// delivered date (re-entering re-stamps, which is idempotent on the
    /// field itself). Inventory is never touched here.
    pub fn update_status(
        &mut self,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        if !self.status.accepts_status_updates() {
            return Err(OrderError::StatusLocked);
        }

        self.status = status;
        match status {
            OrderStatus::Shipped => self.shipped_date = Some(now),
            OrderStatus::Delivered | OrderStatus::Completed => self.delivered_date = Some(now),
            _ => {}
        }

        Ok(())
    }

    /// Applies a caller-supplied payment status with its coupled effects.
    ///
    /// `Paid` moves the order to `Processing` and stamps the payment date
    /// (caller-supplied timestamp, or now). `Refunded` and `Failed` move
    /// the order to `Refunded` and `PendingPayment` respectively. Other
    /// payment statuses change nothing beyond the payment status itself.
    pub fn update_payment_status(
        &mut self,
        payment_status: PaymentStatus,
        paid_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) {
        self.payment_status = payment_status;
        match payment_status {
            PaymentStatus::Paid => {
                self.status = OrderStatus::Processing;
                self.payment_date = Some(paid_at.unwrap_or(now));
            }
            PaymentStatus::Refunded => self.status = OrderStatus::Refunded,
            PaymentStatus::Failed => self.status = OrderStatus::PendingPayment,
            _ => {}
        }
    }

    /// Cancels the order.
    ///
    /// Rejected once fulfilment has started (`Shipped` and later) and on a
    /// second cancellation attempt, so the restock that accompanies a
    /// cancellation can only ever run once per order.
    pub fn cancel(&mut self, reason: &str, now: DateTime<Utc>) -> Result<(), OrderError> {
        if reason.trim().is_empty() {
            return Err(OrderError::ReasonRequired);
        }
        if self.status == OrderStatus::Cancelled {
            return Err(OrderError::AlreadyCancelled);
        }
        if !self.status.can_cancel() {
            return Err(OrderError::CannotCancel {
                status: self.status,
            });
        }

        self.status = OrderStatus::Cancelled;
        self.payment_status = PaymentStatus::Failed;
        self.cancellation_reason = Some(reason.to_string());
        self.cancelled_date = Some(now);

        Ok(())
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
