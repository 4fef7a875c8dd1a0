//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_FILTER};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Where log output ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerInit {
    /// Daily rotated file under the configured directory
    File,
    /// Log directory unusable; writing to stderr
    Stderr,
    /// A global subscriber was already set; this call only added the panic hook
    AlreadyInitialized,
}

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation under `TERMINAL_LOG_DIR` (default `logs/`)
/// - Plain text or JSON lines (`TERMINAL_LOG_FORMAT=json`)
/// - Non-blocking writes so logging never stalls a frame
/// - Panic hook integration for crash logging
///
/// Falls back to stderr when the log directory cannot be created.
pub fn init() -> LoggerInit {
    init_with(DebugConfig::from_env())
}

/// Initialize logging from an explicit configuration.
///
/// The panic hook is installed on every path, at most once per process.
pub fn init_with(config: DebugConfig) -> LoggerInit {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let outcome = match tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
        {
            Ok(()) => LoggerInit::Stderr,
            Err(_) => LoggerInit::AlreadyInitialized,
        };
        setup_panic_hook();
        return outcome;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false) // No ANSI codes in log files
            .boxed()
    };

    let init_result = tracing_subscriber::registry().with(env_filter).with(file_layer).try_init();
    setup_panic_hook();

    // The writer is unused when another subscriber won; its guard can drop here
    if let Err(e) = init_result {
        eprintln!("Warning: Logger already initialized: {}", e);
        return LoggerInit::AlreadyInitialized;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        json = config.json,
        debug = config.is_debug_enabled(),
        "Debug logging initialized"
    );

    // Keep the writer guard alive for the lifetime of the program
    std::mem::forget(guard);
    LoggerInit::File
}

/// Whether the crash-logging panic hook is in place
pub fn panic_hook_installed() -> bool {
    PANIC_HOOK_INSTALLED.load(Ordering::SeqCst)
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "!!!!! APPLICATION PANIC !!!!!"
        );

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_still_has_panic_hook() {
        let log_dir = std::env::temp_dir().join(format!("swap-terminal-logs-{}", std::process::id()));
        let config = DebugConfig {
            log_dir,
            ..DebugConfig::default()
        };

        let first = init_with(config.clone());
        assert_ne!(first, LoggerInit::AlreadyInitialized);

        let second = init_with(config);
        assert_eq!(second, LoggerInit::AlreadyInitialized);
        assert!(panic_hook_installed());
    }
}
