//! Process-wide logging setup for tools built on this crate.

use log::LevelFilter;

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    /// `log::SetLoggerError` only implements `std::error::Error` with `log/std`.
    #[error("failed to install logger: {0}")]
    Logger(log::SetLoggerError),
    #[cfg(feature = "tracing")]
    #[error(transparent)]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Route `log` records at `level` and above to stderr.
///
/// Without the `tracing` feature this installs the core stderr logger and is
/// safe to call more than once. With it, `log` records are bridged into a
/// `tracing` subscriber (honouring `RUST_LOG`), which can be installed once
/// per process.
#[cfg(not(feature = "tracing"))]
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    glyph_accounts_core::init_with_level(level).map_err(LoggingError::Logger)
}

#[cfg(feature = "tracing")]
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    tracing_log::LogTracer::builder()
        .with_max_level(level)
        .init()
        .map_err(LoggingError::Logger)?;
    glyph_accounts_core::init_tracing(level, false)?;
    Ok(())
}
