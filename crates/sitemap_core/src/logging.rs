//! Logging bootstrap.
//!
//! # Responsibility
//! - Start file-based rolling logs once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Init is idempotent for an identical `(level, log_dir)` pair.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.
//! - Core events carry ids and counts only, never page or section labels.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "sitemap";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Normalized logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: &'static str,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    /// Validates a raw `(level, log_dir)` pair.
    ///
    /// # Errors
    /// - `level` is not one of `trace|debug|info|warn|error`.
    /// - `log_dir` is empty or not absolute.
    pub fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }
}

struct LoggingState {
    config: LoggingConfig,
    _logger: LoggerHandle,
}

/// Initializes logging with `level` written under `log_dir`.
///
/// # Errors
/// - Returns a readable message for invalid input, directory creation
///   failure, logger backend failure, or a conflicting earlier init.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    init_with(LoggingConfig::parse(level, log_dir)?)
}

/// Initializes logging from an already normalized config.
pub fn init_with(config: LoggingConfig) -> Result<(), String> {
    if let Some(state) = LOGGING_STATE.get() {
        return ensure_same_config(&state.config, &config);
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(config.clone()))?;
    ensure_same_config(&state.config, &config)
}

/// Returns `(level, log_dir)` of the active logger, if started.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.config.level, state.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: LoggingConfig) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            config.log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(config.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
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
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();
    info!(
        "event=logging_init module=core status=ok level={} log_dir={} version={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config,
        _logger: logger,
    })
}

fn ensure_same_config(active: &LoggingConfig, requested: &LoggingConfig) -> Result<(), String> {
    if active.log_dir != requested.log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            requested.log_dir.display()
        ));
    }
    if active.level != requested.level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            active.level, requested.level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!("event=panic_captured module=core status=error location={location} payload={payload}");
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

// Payloads can carry user-typed labels; keep them on one line and short.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, sanitize_message, LoggingConfig};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    // The logger outlives the test, so its directory must not be cleaned up.
    fn temp_log_dir(name: &str) -> (PathBuf, String) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sitemap-logging-{name}-{}-{nanos}",
            std::process::id()
        ));
        let text = dir
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string();
        (dir, text)
    }

    #[test]
    fn parse_normalizes_level() {
        let config = LoggingConfig::parse(" WARNING ", "/tmp/sitemap-logs").unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/sitemap-logs"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        let level_err = LoggingConfig::parse("loud", "/tmp/x").unwrap_err();
        assert!(level_err.contains("unsupported log level"));

        let dir_err = LoggingConfig::parse("info", "logs/dev").unwrap_err();
        assert!(dir_err.contains("absolute"));

        let empty_err = LoggingConfig::parse("info", "   ").unwrap_err();
        assert!(empty_err.contains("empty"));
    }

    #[test]
    fn sanitize_message_removes_newlines_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let (log_dir, log_dir_str) = temp_log_dir("active");
        let (_, other_dir_str) = temp_log_dir("other");

        init_logging("info", &log_dir_str).expect("first init should succeed");
        init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

        let level_error = init_logging("debug", &log_dir_str).unwrap_err();
        assert!(level_error.contains("refusing to switch"));

        let dir_error = init_logging("info", &other_dir_str).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (active_level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(active_level, "info");
        assert_eq!(active_dir, log_dir);
    }
}
