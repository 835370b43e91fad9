//! Pricing calculator for order totals.
//!
//! A pure function from line items and the optional shipping/tax/discount
//! inputs to the monetary fields stored on the order.

use super::{Money, OrderItem};

/// The monetary fields of a priced order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of all line item totals.
    pub subtotal: Money,
    /// Shipping fee, zero when absent from the request.
    pub shipping_fee: Money,
    /// Tax amount, zero when absent from the request.
    pub tax_amount: Money,
    /// Discount, clamped to `[0, subtotal]`.
    pub discount_amount: Money,
    /// `max(0, subtotal + shipping_fee + tax_amount - discount_amount)`.
    pub total_amount: Money,
}

/// Computes order totals from line items and optional adjustments.
///
/// The discount is clamped so it can never exceed the subtotal or go
/// negative, and the grand total is floored at zero.
pub fn compute_totals(
    items: &[OrderItem],
    shipping_fee: Option<Money>,
    tax_amount: Option<Money>,
    discount_amount: Option<Money>,
) -> OrderTotals {
    let subtotal = items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.total_price);

    let shipping_fee = shipping_fee.unwrap_or_else(Money::zero);
    let tax_amount = tax_amount.unwrap_or_else(Money::zero);
    let discount_amount = discount_amount
        .unwrap_or_else(Money::zero)
        .max(Money::zero())
        .min(subtotal);

    let total_amount = (subtotal + shipping_fee + tax_amount - discount_amount).max(Money::zero());

    OrderTotals {
        subtotal,
        shipping_fee,
        tax_amount,
        discount_amount,
        total_amount,
    }
}
