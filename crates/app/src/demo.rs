//! The sample order processed by the `orderflow` binary.

use rust_decimal::Decimal;

use orderflow_core::{DomainResult, OrderNumber};
use orderflow_products::Product;
use orderflow_sales::Order;

/// A book, a laptop and a T-shirt.
pub fn sample_products() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::book("C# for beginners", Decimal::new(25000, 2), 400)?,
        Product::electronics("Laptop", Decimal::new(1_500_000, 2), 256)?,
        Product::clothing("T-shirt", Decimal::new(30000, 2), "M")?,
    ])
}

pub fn sample_order(order_number: OrderNumber) -> DomainResult<Order> {
    let mut order = Order::new(order_number);
    for product in sample_products()? {
        order.add_product(product);
    }
    Ok(order)
}
