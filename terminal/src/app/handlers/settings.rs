//! # Settings Handlers
//!
//! Loading and persisting [`TerminalConfig`], plus the slippage selector.

use crate::app::state::{AppState, Notification};
use crate::core::config::{TerminalConfig, SLIPPAGE_OPTIONS};
use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Get default config file path
pub fn get_config_path() -> PathBuf {
    PathBuf::from("./swap-terminal-config.json")
}

/// Load settings from file, falling back to defaults on any error
pub fn load_settings(path: &Path) -> TerminalConfig {
    match TerminalConfig::load_from_file(path) {
        Ok(config) => {
            tracing::info!("Loaded terminal configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load terminal config from {:?}: {}. Using defaults.", path, e);
            TerminalConfig::default()
        }
    }
}

/// Save settings to file
pub fn save_settings(config: &TerminalConfig, path: &Path) -> Result<()> {
    config.save_to_file(path)?;
    tracing::info!("Saved terminal configuration to {:?}", path);
    Ok(())
}

/// Select a slippage preset and persist it.
///
/// Internal handler function - use [`crate::app::App::handle_slippage_change`] instead.
pub(crate) fn handle_slippage_change(state: Arc<RwLock<AppState>>, bps: u16) -> Result<()> {
    if !SLIPPAGE_OPTIONS.contains(&bps) {
        return Err(AppError::Validation(format!("Unsupported slippage: {bps} bps")));
    }

    let mut app_state = state.write();
    if app_state.config.slippage_bps == bps {
        return Ok(());
    }
    app_state.config.slippage_bps = bps;
    let config = app_state.config.clone();
    let path = PathBuf::from(&app_state.config_path);
    drop(app_state);

    if let Err(e) = save_settings(&config, &path) {
        tracing::error!("Failed to save settings: {}", e);
        state
            .write()
            .pending_notifications
            .push(Notification::Warning("Settings could not be saved".to_string()));
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("swap-terminal-settings-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_load_settings_falls_back_on_bad_file() {
        let path = temp_path("bad");
        std::fs::write(&path, "not json").unwrap();
        let config = load_settings(&path);
        assert_eq!(config.slippage_bps, TerminalConfig::default().slippage_bps);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_slippage_change_persists() {
        let path = temp_path("persist");
        let state = Arc::new(RwLock::new(AppState::new(
            TerminalConfig::default(),
            path.to_string_lossy().to_string(),
        )));

        handle_slippage_change(state.clone(), 100).unwrap();
        assert_eq!(state.read().config.slippage_bps, 100);

        let reloaded = TerminalConfig::load_from_file(&path).unwrap();
        assert_eq!(reloaded.slippage_bps, 100);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_slippage_change_rejects_unknown_preset() {
        let state = Arc::new(RwLock::new(AppState::new(TerminalConfig::default(), String::new())));
        let result = handle_slippage_change(state.clone(), 42);
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(state.read().config.slippage_bps, 50);
    }
}
