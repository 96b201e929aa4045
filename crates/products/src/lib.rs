//! Products domain module.
//!
//! This crate contains the product catalogue rules: the closed set of product
//! variants and their discount policy, implemented purely as deterministic
//! domain logic (no IO, no logging).

pub mod product;

pub use product::{DetailsMut, Product, ProductCategory, ProductDetails};
