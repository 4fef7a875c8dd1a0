//! # Swap Handlers
//!
//! Keystrokes and the Max button, both routed through the input guard.

use crate::app::state::{AppState, ViewKind};
use crate::guard::Sanitized;
use parking_lot::RwLock;
use std::sync::Arc;

/// Apply a raw keystroke to a view's amount field.
///
/// Internal handler function - use [`crate::app::App::handle_amount_input`] instead.
pub(crate) fn handle_amount_input(state: Arc<RwLock<AppState>>, view: ViewKind, raw: &str) -> Sanitized {
    let mut state = state.write();
    let form = state.form_mut(view);
    let outcome = form.apply_input(raw);

    match &outcome {
        Sanitized::Clamped(value) => {
            tracing::debug!(?view, raw, clamped_to = %value, "Amount clamped to balance");
        }
        Sanitized::Rejected => {
            tracing::debug!(?view, raw, kept = %form.amount, "Negative amount rejected");
        }
        Sanitized::Cleared | Sanitized::Accepted(_) => {}
    }

    outcome
}

/// Fill a view's amount with its balance.
///
/// Internal handler function - use [`crate::app::App::handle_max_click`] instead.
pub(crate) fn set_max_amount(state: Arc<RwLock<AppState>>, view: ViewKind) {
    let mut state = state.write();
    let form = state.form_mut(view);
    form.apply_max();
    tracing::debug!(?view, amount = %form.amount, "Max amount applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TerminalConfig;

    fn state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(TerminalConfig::default(), String::new());
        state.terminal.balance = Some(1.4502);
        state.market.form.balance = Some(1.4502);
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_input_targets_only_its_view() {
        let state = state();
        handle_amount_input(state.clone(), ViewKind::Market, "0.3");
        let s = state.read();
        assert_eq!(s.market.form.amount, "0.3");
        assert_eq!(s.terminal.amount, "");
    }

    #[test]
    fn test_rejected_input_keeps_previous() {
        let state = state();
        handle_amount_input(state.clone(), ViewKind::Terminal, "0.7");
        let outcome = handle_amount_input(state.clone(), ViewKind::Terminal, "-0.7");
        assert_eq!(outcome, Sanitized::Rejected);
        assert_eq!(state.read().terminal.amount, "0.7");
    }

    #[test]
    fn test_set_max_amount() {
        let state = state();
        set_max_amount(state.clone(), ViewKind::Terminal);
        assert_eq!(state.read().terminal.amount, "1.4502");
    }
}
