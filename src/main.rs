pub mod cli;
pub mod compute;
pub mod input;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    init_tracing();

    tracing::info!(input = %args.input.display(), "reading depths");
    let parsed = input::read_values(&args.input)?;
    tracing::info!(
        values = parsed.values.len(),
        skipped = parsed.skipped.len(),
        "parsed input"
    );
    for skip in parsed.skipped.iter().filter(|s| !s.text.is_empty()) {
        tracing::info!(line_no = skip.line_no, text = %skip.text, "ignored non-numeric line");
    }

    let depths = &parsed.values;
    let mut out = std::io::stdout().lock();

    let increases = compute::count_increases(depths);
    report::write_answer(&mut out, increases).context("failed to write part 1")?;

    let window_increases = compute::count_window_increases(depths);
    debug_assert_eq!(
        window_increases,
        compute::count_window_increases_direct(depths)
    );
    report::write_answer(&mut out, window_increases).context("failed to write part 2")?;
    Ok(())
}

// logs go to stderr so stdout only ever carries the two answers
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
