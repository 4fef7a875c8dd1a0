//! # Event Handler
//!
//! Applies [`AppEvent`]s from background tasks and the hold ticker to the
//! application state. Runs on the UI thread inside [`App::on_tick`].

use crate::app::state::{Notification, RpcStatus, ViewKind};
use crate::app::{App, AppEvent, ConfirmHost};
use crate::guard::{Sanitized, TickOutcome};
use shared::dto::market::PricePoint;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle one event.
    ///
    /// Acquires the write lock per event and releases it before any callback
    /// that locks again.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ViewDataLoaded { view, balance, price } => {
                self.handle_view_data_loaded(view, balance, price);
            }
            AppEvent::ViewDataFailed { view, error } => {
                self.handle_view_data_failed(view, error);
            }
            AppEvent::HistoryLoaded(result) => {
                self.handle_history_loaded(result);
            }
            AppEvent::RpcStatusChanged { view, status } => {
                self.handle_rpc_status_changed(view, status);
            }
            AppEvent::HoldTick { generation } => {
                self.handle_hold_tick(generation);
            }
        }
    }
}

impl App {
    fn handle_view_data_loaded(&mut self, view: ViewKind, balance: f64, price: f64) {
        let mut state = self.state.write();
        let form = state.form_mut(view);
        form.price = price;
        if let Sanitized::Clamped(value) = form.set_balance(balance) {
            tracing::debug!(?view, clamped_to = %value, "Amount typed before sync clamped to balance");
        }
    }

    fn handle_view_data_failed(&mut self, view: ViewKind, error: String) {
        tracing::warn!(?view, %error, "View marked down after provider failure");
        let mut state = self.state.write();
        state.form_mut(view).rpc = RpcStatus::Down(error);
        state
            .pending_notifications
            .push(Notification::Warning("Market data unavailable".to_string()));
    }

    fn handle_history_loaded(&mut self, result: Result<Vec<PricePoint>, String>) {
        let mut state = self.state.write();
        match result {
            Ok(points) => {
                tracing::debug!(points = points.len(), "Price history loaded");
                state.market.history = points;
                state.market.history_error = None;
            }
            Err(e) => {
                state.market.history_error = Some(e);
            }
        }
    }

    fn handle_rpc_status_changed(&mut self, view: ViewKind, status: RpcStatus) {
        let mut state = self.state.write();

        // A failed data load keeps the view down whatever the node answers
        if matches!(state.form(view).rpc, RpcStatus::Down(_)) {
            tracing::debug!(?view, ?status, "Ignoring node status for view without data");
            return;
        }

        if let RpcStatus::Down(reason) = &status {
            tracing::warn!(?view, %reason, "Node connection unstable");
            state
                .pending_notifications
                .push(Notification::Warning("Node connection unstable".to_string()));
        }

        let live = status.is_live();
        state.form_mut(view).rpc = status;

        if let Some(modal) = state.modal.as_mut().filter(|modal| modal.origin == view) {
            modal.summary.rpc_active = live;
        }
        drop(state);

        self.sync_hold_blockers();
    }

    fn handle_hold_tick(&mut self, generation: u64) {
        self.sync_hold_blockers();
        match self.hold.tick(generation) {
            TickOutcome::Confirmed => self.on_confirm(),
            TickOutcome::Cancelled => {
                tracing::debug!(generation, "Hold tick found an active blocker");
            }
            TickOutcome::Advanced(_) | TickOutcome::Ignored => {}
        }
    }
}
