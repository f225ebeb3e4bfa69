//! minicss
//!
//! File-level wrapper around [`minicss_scan`]: argument parsing, opening the
//! input and output, and the fall back to standard output when the output
//! file cannot be created.

pub mod cli;
pub mod destination;
pub mod error;
pub mod minifier;

pub use cli::{parse_args, CliOptions, Command, USAGE};
pub use destination::{Destination, DestinationKind};
pub use error::{CliError, UsageError};
pub use minifier::{Minifier, Report};
pub use minicss_scan::{ScanConfig, ScanStats};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=minicss=debug` or
/// `RUST_LOG=minicss_scan=trace`. Events go to stderr; stdout may be the
/// minified output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
