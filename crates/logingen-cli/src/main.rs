// crates/logingen-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::Parser;
use logingen_core::{io::write_fixture, params::FixtureParams, DEFAULT_OUTPUT};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "logingen",
    about = "Login/logout fixture generator",
    long_about = "Login/logout fixture generator.\n\nWrites test.in.txt in the current directory: a sorted login block for users 0..NUM_USERS, NUM_LINES random logins, then a sorted logout block.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Number of users N; ids run over 0..N
    #[arg(allow_negative_numbers = true)]
    num_users: i64,

    /// Number of random login lines L between the sorted blocks
    #[arg(allow_negative_numbers = true)]
    num_lines: i64,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    generate(cli.num_users, cli.num_lines, Path::new(DEFAULT_OUTPUT))
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn generate(num_users: i64, num_lines: i64, out: &Path) -> Result<()> {
    let params = FixtureParams::from_signed(num_users, num_lines)?;

    info!(
        num_users = params.num_users,
        num_lines = params.num_lines,
        out = %out.display(),
        "generating login fixture"
    );
    let mut rng = rand::rng();
    let written = write_fixture(out, params, &mut rng)
        .with_context(|| format!("generating fixture {}", out.display()))?;
    debug_assert_eq!(written, params.total_lines());
    info!(lines = written, "fixture written");

    println!(
        "Generated {} users, {} random logins → {} lines → {}",
        params.num_users,
        params.num_lines,
        params.total_lines(),
        out.display()
    );
    Ok(())
}
