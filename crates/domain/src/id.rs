//! Typed identifier for employee records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for an [`Employee`](crate::employee::Employee).
///
/// Identifiers are assigned by the server. The value `0` stands for
/// "not assigned yet" and is what a creation form submits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Placeholder for a record the server has not numbered yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the server has assigned this identifier.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(value) if value >= 0 => Ok(Self(value)),
            _ => Err(ValidationError::InvalidId(s.to_string())),
        }
    }
}
