//! Record identifiers and their generators

use crate::traits::IdGenerator;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for bug reports and generated cases
///
/// A `RecordId` is never empty. Identifiers supplied by callers are trimmed
/// and validated on construction; generated identifiers are valid by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from caller input
    ///
    /// # Errors
    /// Returns error if the value is empty or only whitespace
    ///
    /// # Examples
    ///
    /// ```
    /// use bug2test_domain::RecordId;
    ///
    /// let id = RecordId::new("BUG-001").unwrap();
    /// assert_eq!(id.as_str(), "BUG-001");
    /// assert!(RecordId::new("   ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Record id cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build an identifier by prepending a fixed prefix to an existing one
    ///
    /// ```
    /// use bug2test_domain::RecordId;
    ///
    /// let token = RecordId::new("42").unwrap();
    /// assert_eq!(RecordId::prefixed("gh-", &token).as_str(), "gh-42");
    /// ```
    pub fn prefixed(prefix: &str, token: &RecordId) -> Self {
        Self(format!("{}{}", prefix.trim(), token.0))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates short random identifiers from UUIDv4 values
///
/// The identifier is the first `length` hex digits of a random UUID, so
/// collisions within one process are practically impossible for the default
/// length of 12.
#[derive(Debug, Clone, Copy)]
pub struct UuidIdGenerator {
    length: usize,
}

impl UuidIdGenerator {
    /// Default number of hex digits in a generated identifier
    pub const DEFAULT_LENGTH: usize = 12;

    /// Create a generator producing identifiers of the given length
    ///
    /// The length is clamped to `8..=32`.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.clamp(8, 32),
        }
    }

    /// Length of the identifiers this generator produces
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::with_length(Self::DEFAULT_LENGTH)
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> RecordId {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        RecordId(hex[..self.length].to_string())
    }
}

/// Deterministic generator yielding `<prefix>1`, `<prefix>2`, ...
///
/// Intended for tests and reproducible batch runs.
///
/// ```
/// use bug2test_domain::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("case-");
/// assert_eq!(ids.next_id().as_str(), "case-1");
/// assert_eq!(ids.next_id().as_str(), "case-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator with the given prefix, starting at 1
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        RecordId(format!("{}{}", self.prefix.trim(), n))
    }
}
