//! Logging setup
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gridpad::grid=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `<logs dir>/gridpad.log` with daily rotation, where the
//! logs dir is `~/.config/gridpad/logs/` unless `--config-dir` points elsewhere.
//! The file layer always records debug level.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_dir, LOG_FILE_NAME};

fn file_writer(
    logs_dir: Option<PathBuf>,
) -> Result<tracing_appender::rolling::RollingFileAppender, String> {
    let dir = logs_dir.ok_or_else(|| "no config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(tracing_appender::rolling::daily(dir, LOG_FILE_NAME))
}

/// Install the console (stderr) and rolling file subscribers
///
/// Without a `logs_dir` only the console layer is installed. Stderr keeps log lines
/// out of `--print` and `--json` output.
pub fn init(logs_dir: Option<PathBuf>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = match file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
