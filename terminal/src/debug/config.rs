//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "swap_terminal=info,warn";

/// Default filter when built with the `debug-mode` feature
pub const DEBUG_LOG_FILTER: &str = "swap_terminal=debug,info";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Base name of the daily rotated file
    pub log_file_name: String,
    /// Log level filter (e.g., "swap_terminal=debug,info")
    pub log_level: String,
    /// Write JSON lines instead of plain text
    pub json: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "swap-terminal.log".to_string(),
            log_level: if super::is_debug_mode() {
                DEBUG_LOG_FILTER.to_string()
            } else {
                DEFAULT_LOG_FILTER.to_string()
            },
            json: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("TERMINAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            json: lookup("TERMINAL_LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }

    /// Path of today's file is `<log_dir>/<log_file_name>.<date>`
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_env() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs/swap-terminal.log"));
        assert_eq!(config.is_debug_enabled(), super::super::is_debug_mode());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TERMINAL_LOG_DIR", "/tmp/swap-logs"),
            ("RUST_LOG", "swap_terminal=debug"),
            ("TERMINAL_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();
        let config = DebugConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_dir, PathBuf::from("/tmp/swap-logs"));
        assert!(config.is_debug_enabled());
        assert!(config.json);
    }
}
