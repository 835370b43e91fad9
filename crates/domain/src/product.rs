//! Product aggregate and the inventory ledger rules.

use chrono::{DateTime, Utc};
use common::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::Money;

/// Catalog state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Listed and sellable.
    #[default]
    Active,

    /// Taken off the shelf by the merchant.
    Inactive,

    /// Stock has run out; flipped back to `Active` on restock.
    OutOfStock,

    /// No longer produced or sold.
    Discontinued,
}

/// Errors raised by inventory mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The requested quantity exceeds the available stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
}

/// A catalog product.
///
/// The engine treats products as a collaborator: it reads them to price and
/// validate line items, and mutates stock and sales counters through the
/// ledger methods below. Stock never goes negative; `sales_count` only ever
/// grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Owning merchant; never changes after creation.
    pub merchant_id: UserId,

    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,

    pub price: Money,

    /// Units available for sale.
    pub stock: u32,

    /// Units sold through orders. Monotonic.
    pub sales_count: u64,

    /// Catalog page views. Incremented explicitly, never as a read side
    /// effect.
    pub view_count: u64,

    pub status: ProductStatus,

    /// Merchant kill switch, independent of `status`.
    pub enabled: bool,

    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates an active, enabled product with the given stock.
    pub fn new(
        merchant_id: UserId,
        name: impl Into<String>,
        sku: Option<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id: ProductId::new(),
            merchant_id,
            name: name.into(),
            sku,
            description: None,
            category: None,
            price,
            stock,
            sales_count: 0,
            view_count: 0,
            status: ProductStatus::Active,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    /// Returns true if new orders may reference this product.
    ///
    /// Matches the availability rule of the order pipeline: a product is
    /// blocked only when disabled or explicitly inactive; stock is checked
    /// separately so the caller can report it as a distinct error.
    pub fn is_orderable(&self) -> bool {
        self.enabled && self.status != ProductStatus::Inactive
    }

    /// Deducts stock for a sale and records the sold units.
    ///
    /// Fails without mutating anything when the quantity exceeds the
    /// available stock. When stock reaches exactly zero the status flips to
    /// `OutOfStock`.
    pub fn deduct_stock(&mut self, quantity: u32) -> Result<(), ProductError> {
        if quantity > self.stock {
            return Err(ProductError::InsufficientStock {
                requested: quantity,
                available: self.stock,
            });
        }

        self.stock -= quantity;
        self.sales_count += quantity as u64;
        if self.stock == 0 {
            self.status = ProductStatus::OutOfStock;
        }

        Ok(())
    }

    /// Returns previously deducted stock, e.g. when an order is cancelled.
    ///
    /// Flips `OutOfStock` back to `Active` once stock is positive again;
    /// other statuses are left alone.
    pub fn restock(&mut self, quantity: u32) {
        self.stock += quantity;
        if self.stock > 0 && self.status == ProductStatus::OutOfStock {
            self.status = ProductStatus::Active;
        }
    }

    /// Records a catalog page view.
    pub fn record_view(&mut self) {
        self.view_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product::new(
            UserId::new(),
            "Widget",
            Some("SKU-001".to_string()),
            Money::from_cents(1000),
            stock,
        )
    }

    #[test]
    fn new_product_is_orderable() {
        let p = product(5);
        assert!(p.is_orderable());
        assert_eq!(p.status, ProductStatus::Active);
        assert_eq!(p.sales_count, 0);
    }

    #[test]
    fn disabled_or_inactive_is_not_orderable() {
        let mut p = product(5);
        p.enabled = false;
        assert!(!p.is_orderable());

        let mut p = product(5);
        p.status = ProductStatus::Inactive;
        assert!(!p.is_orderable());
    }

    #[test]
    fn out_of_stock_remains_orderable_for_validation() {
        // Stock availability is reported separately from the catalog state.
        let mut p = product(5);
        p.status = ProductStatus::OutOfStock;
        assert!(p.is_orderable());
    }

    #[test]
    fn deduct_stock_updates_counters() {
        let mut p = product(5);
        p.deduct_stock(3).unwrap();

        assert_eq!(p.stock, 2);
        assert_eq!(p.sales_count, 3);
        assert_eq!(p.status, ProductStatus::Active);
    }

    #[test]
    fn deduct_to_zero_flips_out_of_stock() {
        let mut p = product(5);
        p.deduct_stock(5).unwrap();

        assert_eq!(p.stock, 0);
        assert_eq!(p.status, ProductStatus::OutOfStock);
    }

    #[test]
    fn deduct_beyond_stock_fails_without_mutation() {
        let mut p = product(2);
        let result = p.deduct_stock(3);

        assert_eq!(
            result,
            Err(ProductError::InsufficientStock {
                requested: 3,
                available: 2,
            })
        );
        assert_eq!(p.stock, 2);
        assert_eq!(p.sales_count, 0);
        assert_eq!(p.status, ProductStatus::Active);
    }

    #[test]
    fn restock_flips_out_of_stock_back_to_active() {
        let mut p = product(5);
        p.deduct_stock(5).unwrap();
        assert_eq!(p.status, ProductStatus::OutOfStock);

        p.restock(5);
        assert_eq!(p.stock, 5);
        assert_eq!(p.status, ProductStatus::Active);
        // Sales already made are not rolled back.
        assert_eq!(p.sales_count, 5);
    }

    #[test]
    fn restock_leaves_other_statuses_alone() {
        let mut p = product(0);
        p.status = ProductStatus::Discontinued;
        p.restock(3);
        assert_eq!(p.status, ProductStatus::Discontinued);
    }

    #[test]
    fn record_view_increments_counter() {
        let mut p = product(1);
        p.record_view();
        p.record_view();
        assert_eq!(p.view_count, 2);
    }
}
