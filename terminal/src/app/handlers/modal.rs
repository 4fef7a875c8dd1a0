//! # Confirmation Modal Handlers
//!
//! Opening the safety guard from a view's swap button and closing it again.

use crate::app::state::{AppState, ModalState, ViewKind};
use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Open the confirmation modal for a view's current form.
///
/// Refused while the view's gate is disabled, so a stale click cannot open a
/// modal for an amount the button no longer allows.
///
/// Internal handler function - use [`crate::app::App::handle_swap_click`] instead.
pub(crate) fn open_modal(state: Arc<RwLock<AppState>>, view: ViewKind) -> Result<()> {
    let mut state = state.write();
    if state.modal.is_some() {
        return Err(AppError::State("confirmation already open".to_string()));
    }

    let form = state.form(view);
    let status = form.gate().status();
    if !status.is_enabled() {
        return Err(AppError::State(format!("swap gate is {status:?}")));
    }

    let summary = form.summary();
    tracing::info!(
        ?view,
        from = %summary.from_amount,
        to = %summary.to_amount,
        impact = summary.price_impact,
        "Opening swap confirmation"
    );
    state.modal = Some(ModalState { summary, origin: view });
    Ok(())
}

/// Close the modal if open; returns the view it was opened from.
///
/// Internal handler function - use [`crate::app::App::on_close`] instead.
pub(crate) fn close_modal(state: Arc<RwLock<AppState>>) -> Option<ViewKind> {
    let mut state = state.write();
    let modal = state.modal.take()?;
    tracing::debug!(origin = ?modal.origin, "Swap confirmation closed");
    Some(modal.origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::RpcStatus;
    use crate::core::config::TerminalConfig;

    fn ready_state(amount: &str) -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(TerminalConfig::default(), String::new());
        state.terminal.balance = Some(1.4502);
        state.terminal.price = 2450.50;
        state.terminal.rpc = RpcStatus::Live;
        state.terminal.apply_input(amount);
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_open_modal_snapshots_form() {
        let state = ready_state("0.5");
        open_modal(state.clone(), ViewKind::Terminal).unwrap();

        let s = state.read();
        let modal = s.modal.as_ref().unwrap();
        assert_eq!(modal.origin, ViewKind::Terminal);
        assert_eq!(modal.summary.from_amount, "0.5");
        assert!(modal.summary.rpc_active);
    }

    #[test]
    fn test_open_modal_refused_when_gate_disabled() {
        let state = ready_state("");
        assert!(open_modal(state.clone(), ViewKind::Terminal).is_err());
        assert!(state.read().modal.is_none());

        // Market view still syncing
        let state = ready_state("0.5");
        assert!(open_modal(state.clone(), ViewKind::Market).is_err());
    }

    #[test]
    fn test_close_modal_returns_origin() {
        let state = ready_state("0.5");
        open_modal(state.clone(), ViewKind::Terminal).unwrap();
        assert_eq!(close_modal(state.clone()), Some(ViewKind::Terminal));
        assert_eq!(close_modal(state), None);
    }
}
