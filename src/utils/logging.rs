//! Diagnostic logging.
//!
//! The chat UI owns the terminal, so diagnostics go to a file named with
//! `--debug-log`. Without one, tracing events are discarded.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_FILTER_ENV: &str = "HOTMESS_COACH_LOG";
const DEFAULT_FILTER: &str = "info";

/// Parse a filter directive, falling back to `info` when it is missing or invalid.
pub fn diagnostics_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn diagnostics_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false),
    )
}

/// Install the global subscriber writing to `path`. Appends to an existing file.
pub fn init_diagnostics(path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| format!("cannot open debug log {}: {err}", path.display()))?;
    let filter = diagnostics_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref());

    diagnostics_subscriber(file, filter).try_init()?;
    Ok(())
}
