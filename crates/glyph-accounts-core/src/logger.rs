//! Stderr logging for the `log` facade.
//!
//! Lines look like `[  0.012s DEBUG] glyph_accounts_entry::batch: message`.
//! Records from other crates are dropped unless the target filter is cleared,
//! so a dependency turning on its own logging does not leak into tool output.
//! Stdout is never written, which keeps CLI results machine-readable.

use std::io::Write;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Target prefix shared by every crate in this workspace.
pub const WORKSPACE_TARGET: &str = "glyph_accounts";

/// Settings for [`init`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Print the record target between the level and the message.
    pub show_target: bool,
    /// Only targets starting with this prefix are written; `None` keeps all.
    pub target_prefix: Option<String>,
}

impl LoggerConfig {
    pub fn with_level(level: LevelFilter) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            show_target: true,
            target_prefix: Some(WORKSPACE_TARGET.to_string()),
        }
    }
}

struct StderrLogger {
    config: LoggerConfig,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
            && self
                .config
                .target_prefix
                .as_deref()
                .is_none_or(|prefix| metadata.target().starts_with(prefix))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record, self.started.elapsed(), self.config.show_target);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Render one record without the trailing newline.
pub fn format_record(record: &Record<'_>, elapsed: Duration, show_target: bool) -> String {
    let secs = elapsed.as_secs_f64();
    if show_target {
        format!(
            "[{secs:7.3}s {:>5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    } else {
        format!("[{secs:7.3}s {:>5}] {}", record.level(), record.args())
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger.
///
/// Only the first call installs anything; later calls return `Ok(())` and
/// leave the original settings in place.
pub fn init(config: LoggerConfig) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let level = config.level;
        let logger = LOGGER.get_or_init(|| StderrLogger {
            config,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// [`init`] with default settings at `level`.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    init(LoggerConfig::with_level(level))
}

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise everything at `level` and above is
/// shown. With `json` set, events are flattened JSON lines. This does not
/// bridge `log` records; install a `tracing_log::LogTracer` for that.
#[cfg(feature = "tracing")]
pub fn init_tracing(
    level: LevelFilter,
    json: bool,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let default = level.to_string().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    if json {
        tracing::subscriber::set_global_default(builder.json().flatten_event(true).finish())
    } else {
        tracing::subscriber::set_global_default(
            builder.with_timer(fmt::time::Uptime::default()).finish(),
        )
    }
}
