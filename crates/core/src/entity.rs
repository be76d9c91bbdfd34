//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is recognised by its identifier, not by the full set of its
/// attribute values; implementors decide which attributes take part in
/// equality.
pub trait Entity {
    /// Entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
