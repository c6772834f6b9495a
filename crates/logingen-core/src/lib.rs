//! Login/logout event fixtures for exercising log-processing tools.
//!
//! A fixture is three blocks of lines written top to bottom:
//!
//! - `sorted logins`: `User 00000 logged in` … for every id in `0..N`,
//! - `random logins`: `L` login lines with ids drawn uniformly from `0..N`,
//! - `sorted logouts`: `User 00000 logged out` … for every id in `0..N`.
//!
//! Modules:
//!
//! - `format`: the event line shapes (`Event`, `format_login`, `format_logout`).
//! - `params`: validated `(N, L)` counts built from raw CLI integers.
//! - `generator`: lazy producers for each block and the concatenated stream.
//! - `io`: writers for any `Write` sink and for the fixture file on disk.
//! - `error`: the `FixtureError` taxonomy.
//!
//! ```
//! use logingen_core::{generator::fixture_lines, params::FixtureParams};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let params = FixtureParams::new(2, 1);
//! let lines: Vec<String> = fixture_lines(params, &mut rng)?.collect();
//! assert_eq!(lines.len(), 5);
//! assert_eq!(lines[0], "User 00000 logged in");
//! assert_eq!(lines[4], "User 00001 logged out");
//! # Ok::<(), logingen_core::error::FixtureError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Fixture error taxonomy.
pub mod error;
/// Event line shapes.
pub mod format;
/// Lazy line producers (sorted/random blocks and the full stream).
pub mod generator;
/// Line and fixture-file writers.
pub mod io;
/// Validated fixture counts.
pub mod params;

/// File name the CLI writes into the current working directory.
pub const DEFAULT_OUTPUT: &str = "test.in.txt";

// Intentionally no glob re-exports; callers import `logingen_core::generator::…` etc.
