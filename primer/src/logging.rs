//! Development-time tracing for the `oldest` and `binary-reps` binaries.
//!
//! Both programs promise an exact stdout (one `The oldest is: ...` line, or
//! one `letter = binary` line per table entry), so every diagnostic goes to
//! stderr. Config loading, roster size, the selected person and the table
//! range are traced at `debug`/`info` and stay silent under the default
//! `warn` filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=primer=debug,oldest=debug cargo run --bin oldest
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
