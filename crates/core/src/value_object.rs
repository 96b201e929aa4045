//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; constructors are where validation happens, so a value
/// object that exists is always valid.
///
/// ```ignore
/// let a = Price::new(dec!(10.00))?;
/// let b = Price::new(dec!(10))?;
/// assert_eq!(a, b); // numeric equality, scale is irrelevant
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
