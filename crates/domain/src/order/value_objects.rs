//! Value objects for the order domain.

use common::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OrderItemStatus;

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * quantity as i64,
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.cents -= rhs.cents;
    }
}

/// A line item within an order.
///
/// Product name, SKU, merchant and unit price are snapshots taken at order
/// time; later catalog edits never change an existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Surrogate identifier of the line item.
    pub id: Uuid,

    /// The catalog product this line was priced from.
    pub product_id: ProductId,

    /// The merchant who owned the product at order time.
    pub merchant_id: UserId,

    /// Product name snapshot.
    pub product_name: String,

    /// Product SKU snapshot.
    pub product_sku: Option<String>,

    /// Price per unit, frozen at order time.
    pub unit_price: Money,

    /// Quantity ordered, always at least 1.
    pub quantity: u32,

    /// `unit_price × quantity`.
    pub total_price: Money,

    /// Per-item fulfilment state.
    pub status: OrderItemStatus,

    /// Free-text note attached to this line.
    pub notes: Option<String>,
}

impl OrderItem {
    /// Creates a new line item, computing `total_price` from the inputs.
    pub fn new(
        product_id: ProductId,
        merchant_id: UserId,
        product_name: impl Into<String>,
        product_sku: Option<String>,
        unit_price: Money,
        quantity: u32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            merchant_id,
            product_name: product_name.into(),
            product_sku,
            unit_price,
            quantity,
            total_price: unit_price.multiply(quantity),
            status: OrderItemStatus::Pending,
            notes,
        }
    }
}

/// Shipping address snapshot, copied onto the order at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}
