// crates/logingen-core/src/params.rs

//! Fixture counts, validated at the boundary.

use crate::error::FixtureError;

/// Number of users `N` and number of random login lines `L`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixtureParams {
    /// Users in each sorted block; random ids are drawn from `0..num_users`.
    pub num_users: u64,
    /// Lines in the random login block.
    pub num_lines: u64,
}

impl FixtureParams {
    /// Build from counts that are already non-negative.
    ///
    /// `num_users == 0` with `num_lines > 0` is representable here; it is
    /// rejected by [`FixtureParams::validate`] when the random block is built.
    #[inline]
    #[must_use]
    pub const fn new(num_users: u64, num_lines: u64) -> Self {
        Self {
            num_users,
            num_lines,
        }
    }

    /// Build from raw signed counts as typed on the command line.
    ///
    /// - `num_lines < 0` is a [`FixtureError::Configuration`].
    /// - `num_users <= 0` with `num_lines > 0` is a [`FixtureError::InvalidRange`].
    /// - `num_users < 0` with `num_lines == 0` yields an empty fixture.
    pub fn from_signed(num_users: i64, num_lines: i64) -> Result<Self, FixtureError> {
        if num_lines < 0 {
            return Err(FixtureError::configuration(format!(
                "num_lines must be >= 0, got {num_lines}"
            )));
        }
        if num_users <= 0 && num_lines > 0 {
            return Err(FixtureError::InvalidRange {
                num_users,
                num_lines,
            });
        }
        // Both are non-negative past the checks above (negative users clamp to 0).
        Ok(Self::new(num_users.max(0).unsigned_abs(), num_lines.unsigned_abs()))
    }

    /// Check that the random block has ids to draw from.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.num_users == 0 && self.num_lines > 0 {
            return Err(FixtureError::InvalidRange {
                num_users: 0,
                num_lines: i64::try_from(self.num_lines).unwrap_or(i64::MAX),
            });
        }
        Ok(())
    }

    /// `2N + L`, saturating.
    #[inline]
    #[must_use]
    pub const fn total_lines(&self) -> u64 {
        self.num_users
            .saturating_mul(2)
            .saturating_add(self.num_lines)
    }
}
