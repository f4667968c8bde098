//! Tracing setup for the relay binary: plain-text lines teed to stdout and a log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset. Teloxide's polling loop is noisy at `info`.
const DEFAULT_FILTER: &str = "info,teloxide=warn";

/// Local wall-clock timestamps, `YYYY-MM-DD HH:MM:SS`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. Lines look like
/// `2026-01-01 12:00:00  INFO telegram_relay_bot::router: Message received user_id=1`.
///
/// Level comes from `RUST_LOG`; load `.env` first so it is honoured.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = open_log_file(Path::new(log_file_path))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(std::sync::Arc::new(file)))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false);

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
