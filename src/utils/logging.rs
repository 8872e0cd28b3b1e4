//! Logging setup: stdout plus a debug log file

use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const LOG_FILTER: &str = "info,auto_fish=debug";

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging with file output under `<data_dir>/debug/log`.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging(data_dir: &Path) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let log_dir = data_dir.join("debug").join("log");
        let _ = std::fs::create_dir_all(&log_dir);

        let log_file_path = log_dir.join("debug.log");
        let file_result = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path);

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));

        match file_result {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE);

                let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

                let _ = tracing_subscriber::registry()
                    .with(env_filter)
                    .with(file_layer)
                    .with(stdout_layer)
                    .try_init();

                tracing::info!("[INIT] Logging initialized, file: {:?}", log_file_path);
            }
            Err(e) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .try_init();
                tracing::warn!(
                    "[INIT] Failed to create debug log file at {:?}: {}",
                    log_file_path,
                    e
                );
            }
        }
    });
}
