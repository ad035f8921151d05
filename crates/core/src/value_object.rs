//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two monetary
/// amounts or two street addresses with the same attributes are the same
/// value. To "modify" one, construct a new value with the new attributes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
