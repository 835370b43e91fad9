//! Domain layer for the commerce backend.
//!
//! This crate provides the core domain types:
//! - Order aggregate with its status and payment state machines
//! - Pricing calculator for order totals
//! - Product aggregate with the inventory ledger rules
//! - User model

pub mod order;
pub mod product;
pub mod user;

pub use order::{
    Money, Order, OrderError, OrderItem, OrderItemStatus, OrderStatus, PaymentMethod,
    PaymentStatus, ShippingAddress, generate_order_number, pricing,
};
pub use product::{Product, ProductError, ProductStatus};
pub use user::{User, UserRole};
