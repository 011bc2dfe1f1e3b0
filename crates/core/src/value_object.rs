//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. `Money` and a
/// category label are value objects; an order entry is not (see [`crate::Entity`]).
///
/// To "modify" a value object, build a new one from the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
