//! Identity types for GoMate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a destination within one fetch batch.
///
/// Assigned by position (`dest-1`, `dest-2`, ...), so the same id may name
/// a different country in a later batch. Favorites keep their own snapshot
/// and never re-resolve ids against a new batch.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    /// Create an id from an arbitrary string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Create the id for the destination at `index` (zero-based) in a batch.
    pub fn for_position(index: usize) -> Self {
        Self(format!("dest-{}", index.saturating_add(1)))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Debug for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DestinationId({})", self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for DestinationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DestinationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
