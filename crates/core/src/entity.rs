//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implementors compare and hash by `id()` alone, so two values carrying the
/// same identifier are the same entity even if the rest of their state differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when `other` refers to the same entity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
