// crates/logingen-core/src/generator.rs

//! Lazy line producers for the three fixture blocks.
//!
//! Sorted blocks are pure functions of `num_users` and can be cloned and
//! replayed. The random block borrows the caller's RNG, so tests can inject a
//! seeded source while the CLI uses the thread-local one.

use std::iter::{Chain, Map};
use std::ops::Range;

use rand::Rng;

use crate::error::FixtureError;
use crate::format::{format_login, format_logout, UserId};
use crate::params::FixtureParams;

/// Sorted block: one line per id in `0..num_users`, increasing.
pub type SortedLines = Map<Range<UserId>, fn(UserId) -> String>;

/// Full fixture stream: sorted logins, random logins, sorted logouts.
pub type FixtureLines<'a, R> = Chain<Chain<SortedLines, RandomLogins<'a, R>>, SortedLines>;

/// Login lines for ids `0, 1, …, num_users - 1`.
pub fn sorted_logins(num_users: u64) -> SortedLines {
    (0..num_users).map(format_login as fn(UserId) -> String)
}

/// Logout lines for ids `0, 1, …, num_users - 1`.
pub fn sorted_logouts(num_users: u64) -> SortedLines {
    (0..num_users).map(format_logout as fn(UserId) -> String)
}

/// Random login block.
///
/// Each item draws a fresh id uniformly from `0..num_users`. The iterator
/// always yields exactly `num_lines` items.
#[derive(Debug)]
pub struct RandomLogins<'a, R: Rng> {
    rng: &'a mut R,
    num_users: u64,
    remaining: u64,
}

impl<R: Rng> Iterator for RandomLogins<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Non-empty range: `random_logins` rejects `num_users == 0` with lines left.
        let uid = self.rng.random_range(0..self.num_users);
        Some(format_login(uid))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// `num_lines` login lines with ids drawn uniformly from `0..num_users`.
///
/// Fails with [`FixtureError::InvalidRange`] when there are lines to draw but
/// no users to draw them from. `num_lines == 0` is always accepted.
pub fn random_logins<R: Rng>(
    rng: &mut R,
    num_users: u64,
    num_lines: u64,
) -> Result<RandomLogins<'_, R>, FixtureError> {
    FixtureParams::new(num_users, num_lines).validate()?;
    Ok(RandomLogins {
        rng,
        num_users,
        remaining: num_lines,
    })
}

/// The whole fixture as one lazy stream of `2N + L` lines.
pub fn fixture_lines<R: Rng>(
    params: FixtureParams,
    rng: &mut R,
) -> Result<FixtureLines<'_, R>, FixtureError> {
    let random = random_logins(rng, params.num_users, params.num_lines)?;
    Ok(sorted_logins(params.num_users)
        .chain(random)
        .chain(sorted_logouts(params.num_users)))
}
