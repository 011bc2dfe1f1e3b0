//! Identity-bearing domain objects.

/// Something with an identity that survives changes to its fields.
///
/// Two order entries with identical figures are still distinct cart lines
/// because their identifiers differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every other field.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
