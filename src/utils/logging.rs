//! Diagnostic logging setup (stderr, filtered by RUST_LOG).

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `verbose` forces `debug` for this crate;
/// otherwise `RUST_LOG` decides, defaulting to `warn`.
pub fn enable_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_")))
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
