use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{OrderId, ProductId, UserId};
use domain::{Order, Product, ProductError, User};
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    store::{CommerceStore, CommitOptions, StockAdjustment},
};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    products: HashMap<ProductId, Product>,
    orders: HashMap<OrderId, Order>,
}

/// In-memory store implementation.
///
/// Used by the test suites and as the reference for the transactional
/// semantics a production store must honor. A single write lock serializes
/// commits, so stock mutations of concurrent order commits can never
/// interleave.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Clears all stored data.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.users.clear();
        state.products.clear();
        state.orders.clear();
    }
}

#[async_trait]
impl CommerceStore for MemoryStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>> {
        let state = self.state.read().await;
        Ok(state.orders.get(&id).cloned())
    }

    async fn find_order_by_number(&self, order_number: &str) -> Result<Option<Order>> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .values()
            .find(|o| o.order_number == order_number)
            .cloned())
    }

    async fn order_exists(&self, id: OrderId) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.orders.contains_key(&id))
    }

    async fn commit_order(
        &self,
        mut order: Order,
        options: CommitOptions,
        adjustments: Vec<StockAdjustment>,
    ) -> Result<Order> {
        let mut state = self.state.write().await;

        // Version check first: a conflicting commit must not touch stock.
        match options.expected_version {
            None => {
                if state.orders.contains_key(&order.id) {
                    return Err(StoreError::OrderAlreadyExists(order.id));
                }
                if state
                    .orders
                    .values()
                    .any(|o| o.order_number == order.order_number)
                {
                    return Err(StoreError::DuplicateOrderNumber(order.order_number));
                }
                order.version = 1;
            }
            Some(expected) => {
                let current = state
                    .orders
                    .get(&order.id)
                    .ok_or(StoreError::OrderMissing(order.id))?;
                if current.version != expected {
                    return Err(StoreError::VersionConflict {
                        order_id: order.id,
                        expected,
                        actual: current.version,
                    });
                }
                order.version = expected + 1;
            }
        }

        // Apply all adjustments to clones of the touched products; the
        // live map is only replaced once the whole batch has succeeded.
        // Duplicate product ids in one batch accumulate correctly.
        let mut touched: HashMap<ProductId, Product> = HashMap::new();
        for adjustment in &adjustments {
            let product_id = adjustment.product_id();
            if !touched.contains_key(&product_id) {
                let product = state
                    .products
                    .get(&product_id)
                    .ok_or(StoreError::ProductMissing(product_id))?;
                touched.insert(product_id, product.clone());
            }
            let product = touched
                .get_mut(&product_id)
                .ok_or(StoreError::ProductMissing(product_id))?;

            match adjustment {
                StockAdjustment::Deduct { quantity, .. } => {
                    product.deduct_stock(*quantity).map_err(|e| match e {
                        ProductError::InsufficientStock {
                            requested,
                            available,
                        } => StoreError::InsufficientStock {
                            product_id,
                            product_name: product.name.clone(),
                            requested,
                            available,
                        },
                    })?;
                }
                StockAdjustment::Restock { quantity, .. } => {
                    product.restock(*quantity);
                }
            }
        }

        for (product_id, product) in touched {
            state.products.insert(product_id, product);
        }
        state.orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn delete_order(&self, id: OrderId) -> Result<bool> {
        let mut state = self.state.write().await;
        Ok(state.orders.remove(&id).is_some())
    }

    async fn insert_user(&self, user: User) -> Result<()> {
        let mut state = self.state.write().await;
        state.users.insert(user.id, user);
        Ok(())
    }

    async fn insert_product(&self, product: Product) -> Result<()> {
        let mut state = self.state.write().await;
        state.products.insert(product.id, product);
        Ok(())
    }
}
