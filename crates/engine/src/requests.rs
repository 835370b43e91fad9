//! Request types accepted by the engine.
//!
//! These mirror the contract the request layer must honor. Optional fields
//! on the update requests carry update-if-present semantics: an absent
//! field leaves the stored value untouched.

use chrono::{DateTime, Utc};
use common::{ProductId, UserId};
use domain::{Money, OrderStatus, PaymentMethod, PaymentStatus};
use serde::{Deserialize, Serialize};

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub notes: Option<String>,
}

/// Request to create an order from a cart of product references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: UserId,
    pub items: Vec<OrderItemRequest>,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_fee: Option<Money>,
    pub tax_amount: Option<Money>,
    pub discount_amount: Option<Money>,
    pub shipping_name: Option<String>,
    pub shipping_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_postcode: Option<String>,
    pub shipping_country: Option<String>,
    pub notes: Option<String>,
}

impl CreateOrderRequest {
    /// Creates a bare request with only the required fields set.
    pub fn new(customer_id: UserId, items: Vec<OrderItemRequest>) -> Self {
        Self {
            customer_id,
            items,
            payment_method: None,
            shipping_fee: None,
            tax_amount: None,
            discount_amount: None,
            shipping_name: None,
            shipping_phone: None,
            shipping_address: None,
            shipping_city: None,
            shipping_postcode: None,
            shipping_country: None,
            notes: None,
        }
    }
}

/// Request to move an order to a caller-supplied target status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    pub shipping_provider: Option<String>,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
}

impl UpdateOrderStatusRequest {
    /// Creates a status-only update.
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status,
            shipping_provider: None,
            tracking_number: None,
            notes: None,
        }
    }
}

/// Request to record a payment-status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
    pub payment_reference: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl UpdatePaymentStatusRequest {
    /// Creates a payment-status-only update.
    pub fn new(payment_status: PaymentStatus) -> Self {
        Self {
            payment_status,
            payment_reference: None,
            paid_at: None,
        }
    }
}

/// Request by a customer to cancel their own order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub customer_id: UserId,
    pub reason: String,
}
