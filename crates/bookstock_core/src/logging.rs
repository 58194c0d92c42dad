//! Logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize process-wide logging exactly once.
//! - Route to rolling log files when a directory is configured, stderr
//!   otherwise.
//!
//! # Invariants
//! - Re-initialization with identical settings is idempotent.
//! - Re-initialization with different settings is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "bookstock";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Initializes logging with a level filter and optional log directory.
///
/// # Errors
/// - Returns an error when `level` is not a valid filter spec.
/// - Returns an error when `log_dir` cannot be created.
/// - Returns an error when called again with different settings.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<(), String> {
    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level && state.log_dir.as_deref() == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized with level `{}`; refusing to reconfigure",
            state.level
        ));
    }

    LOGGING_STATE
        .get_or_try_init(|| -> Result<LoggingState, String> {
            let builder = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?;

            let builder = match log_dir {
                Some(dir) => {
                    std::fs::create_dir_all(dir).map_err(|err| {
                        format!("failed to create log directory `{}`: {err}", dir.display())
                    })?;
                    builder
                        .log_to_file(
                            FileSpec::default()
                                .directory(dir)
                                .basename(LOG_FILE_BASENAME),
                        )
                        .rotate(
                            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                            Naming::Numbers,
                            Cleanup::KeepLogFiles(MAX_LOG_FILES),
                        )
                        .write_mode(WriteMode::BufferAndFlush)
                        .append()
                        .format_for_files(flexi_logger::detailed_format)
                }
                None => builder.log_to_stderr(),
            };

            let logger = builder
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;

            info!(
                "event=logging_init module=core status=ok level={level} sink={}",
                match log_dir {
                    Some(dir) => dir.display().to_string(),
                    None => "stderr".to_string(),
                }
            );

            Ok(LoggingState {
                level: level.to_string(),
                log_dir: log_dir.map(Path::to_path_buf),
                _logger: logger,
            })
        })
        .map(|_| ())
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(String, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level.clone(), state.log_dir.clone()))
}
