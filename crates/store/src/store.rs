//! The storage contract consumed by the order lifecycle engine.

use async_trait::async_trait;
use common::{OrderId, ProductId, UserId};
use domain::{Order, Product, User};

use crate::Result;

/// A single inventory mutation, applied as part of an order commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    /// Remove stock for a sale; also bumps the product's sales counter and
    /// flips its status to out-of-stock when stock reaches zero.
    Deduct { product_id: ProductId, quantity: u32 },

    /// Return stock after a cancellation; flips out-of-stock back to active
    /// once stock is positive again.
    Restock { product_id: ProductId, quantity: u32 },
}

impl StockAdjustment {
    /// Returns the product this adjustment touches.
    pub fn product_id(&self) -> ProductId {
        match self {
            StockAdjustment::Deduct { product_id, .. }
            | StockAdjustment::Restock { product_id, .. } => *product_id,
        }
    }
}

/// Options controlling how an order commit is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
    /// Expected current version of the order. `None` means the order must
    /// not exist yet (a creation); `Some(v)` means the stored order must be
    /// at exactly version `v`, otherwise the commit fails with a version
    /// conflict.
    pub expected_version: Option<u64>,
}

impl CommitOptions {
    /// Commit a brand-new order.
    pub fn create() -> Self {
        Self {
            expected_version: None,
        }
    }

    /// Commit an update to an order expected to be at `version`.
    pub fn expect_version(version: u64) -> Self {
        Self {
            expected_version: Some(version),
        }
    }
}

/// Transactionally consistent storage for users, products, and orders.
///
/// Implementations must make [`commit_order`](CommerceStore::commit_order)
/// atomic: the stock adjustments are re-validated against current stock
/// inside the commit, and either all adjustments plus the order write take
/// effect, or none of them do. Concurrent commits touching the same product
/// serialize their stock mutations; stock never goes negative and never
/// reflects a lost update.
#[async_trait]
pub trait CommerceStore: Send + Sync {
    /// Looks up a user by id.
    async fn find_user(&self, id: UserId) -> Result<Option<User>>;

    /// Looks up a product by id.
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Looks up an order by id.
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>>;

    /// Looks up an order by its human-facing order number.
    async fn find_order_by_number(&self, order_number: &str) -> Result<Option<Order>>;

    /// Returns true if an order with this id is stored.
    async fn order_exists(&self, id: OrderId) -> Result<bool>;

    /// Atomically applies the stock adjustments and persists the order.
    ///
    /// Returns the stored order, with its version bumped. Fails without any
    /// observable effect when the version check fails, a product is
    /// missing, or a deduction exceeds the available stock.
    async fn commit_order(
        &self,
        order: Order,
        options: CommitOptions,
        adjustments: Vec<StockAdjustment>,
    ) -> Result<Order>;

    /// Hard-deletes an order. Returns true if it existed.
    ///
    /// Deletion performs no inventory reconciliation; that asymmetry with
    /// cancellation is deliberate.
    async fn delete_order(&self, id: OrderId) -> Result<bool>;

    /// Stores a user account.
    async fn insert_user(&self, user: User) -> Result<()>;

    /// Stores a catalog product.
    async fn insert_product(&self, product: Product) -> Result<()>;
}
