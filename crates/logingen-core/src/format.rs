// crates/logingen-core/src/format.rs

//! Event line shapes shared by every block of a fixture.
//!
//! The exact text is a compatibility contract with downstream consumers:
//! `User %05d logged in` / `User %05d logged out`. Ids wider than five
//! digits print at their natural width.

use std::fmt;

/// User identifier. Ids are drawn from `0..num_users`.
pub type UserId = u64;

/// A single login or logout event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// `User NNNNN logged in`
    Login(UserId),
    /// `User NNNNN logged out`
    Logout(UserId),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login(uid) => write!(f, "User {uid:05} logged in"),
            Self::Logout(uid) => write!(f, "User {uid:05} logged out"),
        }
    }
}

/// Login line for `uid`.
#[inline]
#[must_use]
pub fn format_login(uid: UserId) -> String {
    Event::Login(uid).to_string()
}

/// Logout line for `uid`.
#[inline]
#[must_use]
pub fn format_logout(uid: UserId) -> String {
    Event::Logout(uid).to_string()
}
