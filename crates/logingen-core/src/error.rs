// crates/logingen-core/src/error.rs

//! Errors raised before any line is generated or any file is touched.

use std::fmt;

/// Fixture parameter failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// Counts that can never describe a fixture (e.g. a negative line count).
    Configuration {
        /// Human-readable cause.
        reason: String,
    },

    /// Random logins were requested but there is no user id to draw.
    InvalidRange {
        /// Requested user count (≤ 0).
        num_users: i64,
        /// Requested random line count (> 0).
        num_lines: i64,
    },
}

impl FixtureError {
    /// Shorthand for [`FixtureError::Configuration`].
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "configuration error: {reason}"),
            Self::InvalidRange {
                num_users,
                num_lines,
            } => write!(
                f,
                "invalid range: cannot draw {num_lines} random user ids from 0..{num_users}"
            ),
        }
    }
}

impl std::error::Error for FixtureError {}
