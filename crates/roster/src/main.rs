use std::io;

use anyhow::{Context, Result};
use roster::Console;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing()?;

    let console = Console::new(io::stdout());
    roster::demo::run(&console).context("demo run failed")?;
    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
