//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_PREFIX: &str = "drivebay.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/drivebay/logs/` because the TUI owns
/// stdout. Log level is controlled by the `DRIVEBAY_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DRIVEBAY_LOG=debug drivebay vm.toml
/// DRIVEBAY_LOG=drivebay_app=trace drivebay vm.toml
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_from_env("DRIVEBAY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("drivebay=info,drivebay_app=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("drivebay starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("drivebay").join("logs"))
}
