//! The order lifecycle engine.

use chrono::Utc;
use common::OrderId;
use domain::{Order, OrderItem, ShippingAddress, pricing};
use store::{CommerceStore, CommitOptions, StockAdjustment};

use crate::error::EngineError;
use crate::requests::{
    CancelOrderRequest, CreateOrderRequest, UpdateOrderStatusRequest, UpdatePaymentStatusRequest,
};

/// Drives orders through their lifecycle against a [`CommerceStore`].
///
/// Each operation validates, builds the mutation, and hands the result to
/// the store as one atomic commit. Stock is re-checked inside the commit,
/// so concurrent creations against the same product serialize correctly;
/// order updates carry the version read at load time, so a concurrent
/// mutation of the same order surfaces as a conflict instead of a lost
/// update.
pub struct OrderEngine<S: CommerceStore> {
    store: S,
}

impl<S: CommerceStore> OrderEngine<S> {
    /// Creates an engine on top of the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an order from a cart of product references.
    ///
    /// Validates every line in input order, freezes unit prices and product
    /// identity into the line items, prices the order, and commits the
    /// order together with the stock deductions. All-or-nothing: any
    /// failure leaves the catalog untouched.
    #[tracing::instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, EngineError> {
        if request.items.is_empty() {
            return Err(EngineError::OrderCreation {
                reason: "order must contain at least one item".to_string(),
            });
        }

        let customer = self
            .store
            .find_user(request.customer_id)
            .await?
            .ok_or(EngineError::UserNotFound(request.customer_id))?;

        let mut items = Vec::with_capacity(request.items.len());
        let mut adjustments = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let product = self
                .store
                .find_product(line.product_id)
                .await?
                .ok_or(EngineError::ProductNotFound(line.product_id))?;

            if line.quantity == 0 {
                return Err(EngineError::OrderCreation {
                    reason: format!("quantity must be at least 1 for product {}", product.name),
                });
            }
            if !product.is_orderable() {
                return Err(EngineError::OrderCreation {
                    reason: format!("product is unavailable: {}", product.name),
                });
            }
            if line.quantity > product.stock {
                return Err(EngineError::InsufficientStock {
                    product_id: product.id,
                    product_name: product.name,
                    requested: line.quantity,
                    available: product.stock,
                });
            }

            items.push(OrderItem::new(
                product.id,
                product.merchant_id,
                product.name.clone(),
                product.sku.clone(),
                product.price,
                line.quantity,
                line.notes.clone(),
            ));
            adjustments.push(StockAdjustment::Deduct {
                product_id: product.id,
                quantity: line.quantity,
            });
        }

        let totals = pricing::compute_totals(
            &items,
            request.shipping_fee,
            request.tax_amount,
            request.discount_amount,
        );
        let shipping = ShippingAddress {
            name: request.shipping_name,
            phone: request.shipping_phone,
            address: request.shipping_address,
            city: request.shipping_city,
            postcode: request.shipping_postcode,
            country: request.shipping_country,
        };
        let order = Order::create(
            customer.id,
            items,
            totals,
            request.payment_method,
            shipping,
            request.notes,
            Utc::now(),
        );

        // The commit re-validates stock under the store's lock, so a race
        // with another creation fails here rather than oversell.
        let stored = self
            .store
            .commit_order(order, CommitOptions::create(), adjustments)
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_id = %stored.id,
            order_number = %stored.order_number,
            total = %stored.total_amount,
            "order created"
        );
        Ok(stored)
    }

    /// Looks up an order by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, EngineError> {
        self.load_order(order_id).await
    }

    /// Looks up an order by its human-facing order number.
    #[tracing::instrument(skip(self))]
    pub async fn get_order_by_number(&self, order_number: &str) -> Result<Order, EngineError> {
        self.store
            .find_order_by_number(order_number)
            .await?
            .ok_or_else(|| EngineError::OrderNotFound(order_number.to_string()))
    }

    /// Applies a caller-supplied target status plus optional carrier fields.
    ///
    /// Rejected once the order is cancelled. Optional fields merge
    /// update-if-present. No inventory is touched; stock only moves at
    /// creation and cancellation.
    #[tracing::instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        request: UpdateOrderStatusRequest,
    ) -> Result<Order, EngineError> {
        let mut order = self.load_order(order_id).await?;

        order.update_status(request.status, Utc::now())?;
        if let Some(provider) = request.shipping_provider {
            order.shipping_provider = Some(provider);
        }
        if let Some(tracking) = request.tracking_number {
            order.tracking_number = Some(tracking);
        }
        if let Some(notes) = request.notes {
            order.notes = Some(notes);
        }

        let expected = order.version;
        let stored = self
            .store
            .commit_order(order, CommitOptions::expect_version(expected), vec![])
            .await?;

        tracing::info!(order_id = %stored.id, status = %stored.status, "order status updated");
        Ok(stored)
    }

    /// Records a payment-status change and its coupled order-status effects.
    #[tracing::instrument(skip(self, request), fields(payment_status = %request.payment_status))]
    pub async fn update_payment_status(
        &self,
        order_id: OrderId,
        request: UpdatePaymentStatusRequest,
    ) -> Result<Order, EngineError> {
        let mut order = self.load_order(order_id).await?;

        order.update_payment_status(request.payment_status, request.paid_at, Utc::now());
        if let Some(reference) = request.payment_reference {
            order.payment_reference = Some(reference);
        }

        let expected = order.version;
        let stored = self
            .store
            .commit_order(order, CommitOptions::expect_version(expected), vec![])
            .await?;

        tracing::info!(
            order_id = %stored.id,
            payment_status = %stored.payment_status,
            status = %stored.status,
            "payment status updated"
        );
        Ok(stored)
    }

    /// Cancels an order on behalf of its customer and restores stock.
    ///
    /// The requesting customer must own the order. The restock and the
    /// order write commit together; the state-machine guard plus the
    /// version check make a second restock for the same order impossible.
    #[tracing::instrument(skip(self, request))]
    pub async fn cancel_order(
        &self,
        order_id: OrderId,
        request: CancelOrderRequest,
    ) -> Result<Order, EngineError> {
        let mut order = self.load_order(order_id).await?;

        if order.customer_id != request.customer_id {
            return Err(EngineError::Forbidden(
                "customers can only cancel their own orders".to_string(),
            ));
        }

        order.cancel(&request.reason, Utc::now())?;

        let adjustments: Vec<StockAdjustment> = order
            .items
            .iter()
            .map(|item| StockAdjustment::Restock {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        let expected = order.version;
        let stored = self
            .store
            .commit_order(order, CommitOptions::expect_version(expected), adjustments)
            .await?;

        metrics::counter!("orders_cancelled_total").increment(1);
        tracing::info!(order_id = %stored.id, "order cancelled");
        Ok(stored)
    }

    /// Hard-deletes an order.
    ///
    /// No inventory reconciliation happens here; deletion is deliberately
    /// asymmetric with cancellation. Admin gating belongs to the request
    /// layer.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, order_id: OrderId) -> Result<(), EngineError> {
        if !self.store.delete_order(order_id).await? {
            return Err(EngineError::OrderNotFound(order_id.to_string()));
        }

        tracing::info!(%order_id, "order deleted");
        Ok(())
    }

    async fn load_order(&self, order_id: OrderId) -> Result<Order, EngineError> {
        self.store
            .find_order(order_id)
            .await?
            .ok_or_else(|| EngineError::OrderNotFound(order_id.to_string()))
    }
}
