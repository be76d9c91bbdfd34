//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value instead.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Rating { NotRated, OneStar }
///
/// impl ValueObject for Rating {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
