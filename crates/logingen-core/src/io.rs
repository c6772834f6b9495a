//! Writers for fixture lines.
//!
//! `write_lines` streams into any `Write` sink. `write_fixture` validates the
//! counts first, then creates (or truncates) the file, buffers the writes and
//! flushes explicitly; a failed final flush is returned as an error.

use crate::generator::fixture_lines;
use crate::params::FixtureParams;
use anyhow::{Context, Result};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write each line followed by `\n`. Returns the number of lines written.
pub fn write_lines<W, I>(w: &mut W, lines: I) -> Result<u64>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut n = 0u64;
    for line in lines {
        w.write_all(line.as_ref().as_bytes())
            .with_context(|| format!("write line {}", n + 1))?;
        w.write_all(b"\n").context("write newline")?;
        n += 1;
    }
    Ok(n)
}

/// Generate the fixture described by `params` into `path`.
///
/// Invalid counts are rejected before the file is created, so an existing
/// file at `path` is left untouched. Returns the number of lines written.
pub fn write_fixture<P: AsRef<Path>, R: Rng>(
    path: P,
    params: FixtureParams,
    rng: &mut R,
) -> Result<u64> {
    let path_ref = path.as_ref();
    let lines = fixture_lines(params, rng)?;

    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    let n = write_lines(&mut w, lines)
        .with_context(|| format!("write fixture to {}", display(path_ref)))?;
    w.flush()
        .with_context(|| format!("flush {}", display(path_ref)))?;
    Ok(n)
}

#[inline]
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
