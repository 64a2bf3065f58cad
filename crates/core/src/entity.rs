//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An account keeps its identifier for the lifetime of the process while its
/// balance changes underneath it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
