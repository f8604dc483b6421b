//! Logging setup.
//!
//! Logs always go to stderr (captured by journald when running as a
//! service). When `logging.directory` is configured they are also written to
//! `<directory>/musikbox.YYYY-MM-DD.log` with daily rotation.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

const LOG_FILE_PREFIX: &str = "musikbox";

/// Initialize the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `settings.filter`. The returned guard flushes the file writer and must be
/// kept alive for the lifetime of the process.
pub fn init_logging(settings: &LoggingSettings) -> std::io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("musikbox=info,warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(dir) = &settings.directory else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!(directory = %dir.display(), "file logging enabled");
    Ok(Some(guard))
}
