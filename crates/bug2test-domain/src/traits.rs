//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the
//! infrastructure that feeds it.

use crate::RecordId;

/// Source of fresh record identifiers
///
/// Implemented by [`crate::UuidIdGenerator`] for production use and by
/// [`crate::SequentialIdGenerator`] where tests need predictable ids.
/// Every call must return an identifier not returned before by the same
/// generator.
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&self) -> RecordId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> RecordId {
        (**self).next_id()
    }
}
