// sitepatch - literal text patches for the static site front-end

pub mod cli;
pub mod diff;
pub mod error;
pub mod patch;
pub mod runner;

pub use error::{PatchError, PatchResult};
pub use patch::{FileReport, Patch};
pub use runner::run_patch;

use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr.
///
/// Stdout carries only the confirmation lines, so log output never goes
/// there. Verbosity comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A test harness or embedding binary may have installed one already
    let _ = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    debug!("sitepatch v{} logging initialized", version());
}
