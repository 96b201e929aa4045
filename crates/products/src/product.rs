use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderflow_core::{DomainError, DomainResult, Price};

/// Product category. Each category carries a fixed discount fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Book,
    Electronics,
    Clothing,
}

impl ProductCategory {
    /// Fraction of the price deducted as discount.
    pub fn discount_rate(self) -> Decimal {
        match self {
            ProductCategory::Book => Decimal::new(10, 2),
            ProductCategory::Electronics => Decimal::new(15, 2),
            ProductCategory::Clothing => Decimal::new(5, 2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Book => "book",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ProductDetails {
    Book { page_count: u32 },
    Electronics { memory_size_gb: u32 },
    /// `size` is a short code such as "M" or "XL".
    Clothing { size: String },
}

impl ProductDetails {
    pub fn category(&self) -> ProductCategory {
        match self {
            ProductDetails::Book { .. } => ProductCategory::Book,
            ProductDetails::Electronics { .. } => ProductCategory::Electronics,
            ProductDetails::Clothing { .. } => ProductCategory::Clothing,
        }
    }
}

/// A priced product.
///
/// The name is fixed at construction. Price and variant details can change,
/// but only through methods that keep the product valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Price,
    details: ProductDetails,
}

impl Product {
    /// Create a product, validating name and price.
    pub fn new(name: impl Into<String>, price: Decimal, details: ProductDetails) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let price = Price::new(price)?;

        Ok(Self {
            name,
            price,
            details,
        })
    }

    pub fn book(name: impl Into<String>, price: Decimal, page_count: u32) -> DomainResult<Self> {
        Self::new(name, price, ProductDetails::Book { page_count })
    }

    pub fn electronics(
        name: impl Into<String>,
        price: Decimal,
        memory_size_gb: u32,
    ) -> DomainResult<Self> {
        Self::new(name, price, ProductDetails::Electronics { memory_size_gb })
    }

    pub fn clothing(
        name: impl Into<String>,
        price: Decimal,
        size: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(name, price, ProductDetails::Clothing { size: size.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price.amount()
    }

    pub fn category(&self) -> ProductCategory {
        self.details.category()
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Editor for the variant attributes. The category cannot change through it.
    pub fn details_mut(&mut self) -> DetailsMut<'_> {
        DetailsMut(&mut self.details)
    }

    /// Replace the price. A negative amount is rejected and the current price kept.
    pub fn set_price(&mut self, price: Decimal) -> DomainResult<()> {
        self.price = Price::new(price)?;
        Ok(())
    }

    /// Replace the variant details. The new details must be of the same category.
    pub fn replace_details(&mut self, details: ProductDetails) -> DomainResult<()> {
        if details.category() != self.category() {
            return Err(DomainError::validation(format!(
                "cannot change product category from {} to {}",
                self.category(),
                details.category()
            )));
        }
        self.details = details;
        Ok(())
    }

    /// Discount amount: `price * discount_rate`.
    pub fn calculate_discount(&self) -> Decimal {
        self.price() * self.category().discount_rate()
    }

    /// Price after discount.
    pub fn calculate_total_cost(&self) -> Decimal {
        self.price() - self.calculate_discount()
    }
}

/// In-place editor for a product's variant fields.
#[derive(Debug)]
pub struct DetailsMut<'a>(&'a mut ProductDetails);

impl DetailsMut<'_> {
    /// Set the page count. Returns `false` if the product is not a book.
    pub fn set_page_count(&mut self, pages: u32) -> bool {
        match &mut *self.0 {
            ProductDetails::Book { page_count } => {
                *page_count = pages;
                true
            }
            _ => false,
        }
    }

    /// Set the memory size. Returns `false` if the product is not electronics.
    pub fn set_memory_size_gb(&mut self, gb: u32) -> bool {
        match &mut *self.0 {
            ProductDetails::Electronics { memory_size_gb } => {
                *memory_size_gb = gb;
                true
            }
            _ => false,
        }
    }

    /// Set the size code. Returns `false` if the product is not clothing.
    pub fn set_size(&mut self, code: impl Into<String>) -> bool {
        match &mut *self.0 {
            ProductDetails::Clothing { size } => {
                *size = code.into();
                true
            }
            _ => false,
        }
    }
}
