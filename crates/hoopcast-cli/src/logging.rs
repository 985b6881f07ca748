use std::io;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "hoopcast=info,warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout is left to reports so that it can be piped.
pub(crate) fn init() -> anyhow::Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
