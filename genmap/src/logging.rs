//! Tracing subscriber setup.

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber.
///
/// Logs go to stderr so that stdout stays clean for reports and JSON. The
/// level is WARN unless `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn initialize_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
