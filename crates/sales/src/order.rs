use rust_decimal::Decimal;

use orderflow_core::OrderNumber;
use orderflow_events::{ObserverList, SubscriptionId};
use orderflow_products::Product;

/// An order: a numbered, ordered collection of products.
///
/// The order keeps no status of its own. [`Order::change_status`] only
/// announces a status to the current subscribers.
#[derive(Debug)]
pub struct Order {
    order_number: OrderNumber,
    products: Vec<Product>,
    status_subscribers: ObserverList<str>,
}

impl Order {
    pub fn new(order_number: OrderNumber) -> Self {
        Self {
            order_number,
            products: Vec::new(),
            status_subscribers: ObserverList::new(),
        }
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Mutable access to a product already in the order (e.g. to reprice it).
    pub fn product_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a product. Duplicates are kept.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Sum of every product's discounted cost, recomputed on each call.
    pub fn total_cost(&self) -> Decimal {
        self.products
            .iter()
            .map(Product::calculate_total_cost)
            .sum()
    }

    /// Register a callback for status changes.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.status_subscribers.subscribe(callback)
    }

    /// Remove a status subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.status_subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.status_subscribers.len()
    }

    /// Announce `status` to every subscriber, synchronously and in
    /// registration order. Returns the number of deliveries.
    pub fn change_status(&self, status: &str) -> usize {
        let delivered = self.status_subscribers.notify(status);
        tracing::debug!(
            order_number = %self.order_number,
            status,
            delivered,
            "order status changed"
        );
        delivered
    }
}
