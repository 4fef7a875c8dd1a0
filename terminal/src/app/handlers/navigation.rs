//! # Navigation Handlers
//!
//! Handlers for screen navigation and tab changes.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::debug!(from = state.current_screen.title(), to = screen.title(), "Screen changed");
    }
    state.current_screen = screen;
}

/// Navigate to next screen in Tab order
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);
    state.current_screen = screens[(current_idx + 1) % screens.len()];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TerminalConfig;

    #[test]
    fn test_next_screen_wraps() {
        let state = Arc::new(RwLock::new(AppState::new(TerminalConfig::default(), String::new())));
        next_screen(state.clone());
        assert_eq!(state.read().current_screen, Screen::MarketView);
        next_screen(state.clone());
        assert_eq!(state.read().current_screen, Screen::SwapTerminal);
    }

    #[test]
    fn test_screen_change() {
        let state = Arc::new(RwLock::new(AppState::new(TerminalConfig::default(), String::new())));
        handle_screen_change(state.clone(), Screen::MarketView);
        assert_eq!(state.read().current_screen, Screen::MarketView);
    }
}
