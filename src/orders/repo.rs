use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery: f64,
    pub total: f64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

/// Totals and customer info for an order about to be persisted.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery: f64,
    pub total: f64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

/// Write-side order capability. Sequential ids start at 1; new orders
/// default to status "pending" and are never updated afterwards.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create_order(&self, new_order: NewOrder) -> anyhow::Result<Order>;
    async fn create_order_item(
        &self,
        order_id: i32,
        product_id: i32,
        quantity: i32,
        price: f64,
    ) -> anyhow::Result<OrderItem>;
    async fn order(&self, id: i32) -> anyhow::Result<Option<Order>>;
    async fn items_for_order(&self, order_id: i32) -> anyhow::Result<Vec<OrderItem>>;
}

#[derive(Default)]
struct MemOrdersInner {
    orders: BTreeMap<i32, Order>,
    items: BTreeMap<i32, OrderItem>,
    order_seq: i32,
    item_seq: i32,
}

/// Process-local order store. State is volatile per process lifetime.
#[derive(Default)]
pub struct MemOrders {
    inner: Mutex<MemOrdersInner>,
}

impl MemOrders {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemOrdersInner> {
        // A poisoned lock means another writer panicked mid-insert; the
        // maps themselves are still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl OrderStore for MemOrders {
    async fn create_order(&self, new_order: NewOrder) -> anyhow::Result<Order> {
        let mut inner = self.lock();
        inner.order_seq += 1;
        let order = Order {
            id: inner.order_seq,
            subtotal: new_order.subtotal,
            tax: new_order.tax,
            delivery: new_order.delivery,
            total: new_order.total,
            customer_name: new_order.customer_name,
            customer_email: new_order.customer_email,
            status: "pending".into(),
        };
        inner.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn create_order_item(
        &self,
        order_id: i32,
        product_id: i32,
        quantity: i32,
        price: f64,
    ) -> anyhow::Result<OrderItem> {
        let mut inner = self.lock();
        inner.item_seq += 1;
        let item = OrderItem {
            id: inner.item_seq,
            order_id,
            product_id,
            quantity,
            price,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn order(&self, id: i32) -> anyhow::Result<Option<Order>> {
        Ok(self.lock().orders.get(&id).cloned())
    }

    async fn items_for_order(&self, order_id: i32) -> anyhow::Result<Vec<OrderItem>> {
        Ok(self
            .lock()
            .items
            .values()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}
