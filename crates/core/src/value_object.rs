//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are equal. To "modify" one,
/// construct a new value. [`crate::ItemName`] and [`crate::Quantity`] are
/// the value objects of this domain; a record keyed by its name is an
/// entity, not a value object.
///
/// The trait bounds keep value objects cheap to copy, comparable, and
/// debuggable:
///
/// ```ignore
/// let a = Quantity::from_count(100);
/// let b = Quantity::from_count(100);
/// assert_eq!(a, b); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
