//! Priority scale for board entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority on the three-level scale used by the board.
///
/// The raw integer is preserved as given: values outside the named levels
/// are accepted, stored, and serialised untouched, and only gain meaning
/// at display time. Ordering follows the numeric value, so higher numbers
/// sort as more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    /// Low priority, the default for new tasks.
    pub const LOW: Self = Self(1);

    /// Medium priority.
    pub const MEDIUM: Self = Self(2);

    /// High priority.
    pub const HIGH: Self = Self(3);

    /// Wraps a raw priority value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::LOW
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
