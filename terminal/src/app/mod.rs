//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the swap terminal, coordinating between
//! the UI rendering layer, async tasks, the hold-to-confirm gesture and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  │  - hold: HoldGesture<IntervalTicker>                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - swap forms, modal, config, notifications          │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::sync::sync_view() - balance, quote, node liveness │
//! │  - IntervalTicker - HoldTick every 20ms while holding       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! ```rust,ignore
//! // Main thread: read state for rendering
//! let state = app.state.read();
//! // Render UI based on state
//! drop(state); // Lock released immediately
//! ```
//!
//! Locks are held for minimal duration. Handlers never call back into the
//! [`ConfirmHost`] callbacks while holding a lock.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use swap_terminal::app::{App, AppLike, ViewKind};
//! use swap_terminal::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! let mut app = App::new();
//!
//! // In egui update loop:
//! app.on_tick();
//! app.handle_amount_input(ViewKind::Terminal, "0.5".to_string());
//! ```

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;
mod ticker;

pub use app_trait::{AppLike, ConfirmHost};
pub use events::AppEvent;
pub use state::*;
pub use ticker::IntervalTicker;

use crate::core::config::TerminalConfig;
use crate::core::service::MarketDataProvider;
use crate::guard::HoldGesture;
use crate::services::mock::MockMarketProvider;
use async_channel::{unbounded, Receiver, Sender};
use event_handler::AppEventHandler;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Main application orchestrator.
///
/// Owns the hold gesture directly rather than through [`AppState`]: the
/// gesture's ticker holds a task handle and must not be cloned with the state.
///
/// Must be created inside a Tokio runtime context; construction spawns the
/// per-view sync tasks.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into tasks and the hold ticker.
    event_tx: Sender<AppEvent>,

    terminal_provider: Arc<dyn MarketDataProvider>,
    market_provider: Arc<dyn MarketDataProvider>,

    hold: HoldGesture<IntervalTicker>,
}

impl App {
    /// Create the application with settings from disk and mock providers.
    ///
    /// Each view gets its own mock with the node delay from the config
    /// (`terminal_rpc_delay_ms` and `market_rpc_delay_ms`).
    pub fn new() -> Self {
        let config_path = handlers::settings::get_config_path();
        let config = handlers::settings::load_settings(&config_path);

        let terminal_provider = MockMarketProvider::from_config(
            &config,
            Duration::from_millis(config.terminal_rpc_delay_ms),
        );
        let market_provider = MockMarketProvider::from_config(
            &config,
            Duration::from_millis(config.market_rpc_delay_ms),
        );

        Self::with_providers(
            config,
            config_path.to_string_lossy().to_string(),
            Arc::new(terminal_provider),
            Arc::new(market_provider),
        )
    }

    /// Create the application with one provider serving both views and
    /// default settings.
    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_providers(
            TerminalConfig::default(),
            handlers::settings::get_config_path().to_string_lossy().to_string(),
            provider.clone(),
            provider,
        )
    }

    pub fn with_providers(
        config: TerminalConfig,
        config_path: String,
        terminal_provider: Arc<dyn MarketDataProvider>,
        market_provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let hold = HoldGesture::new(IntervalTicker::new(event_tx.clone()));

        let app = App {
            state: Arc::new(RwLock::new(AppState::new(config, config_path))),
            event_rx,
            event_tx,
            terminal_provider,
            market_provider,
            hold,
        };

        app.spawn_sync(ViewKind::Terminal);
        app.spawn_sync(ViewKind::Market);

        tracing::info!("App state initialized - Event channel created, view sync started");
        app
    }

    fn spawn_sync(&self, view: ViewKind) {
        let provider = match view {
            ViewKind::Terminal => self.terminal_provider.clone(),
            ViewKind::Market => self.market_provider.clone(),
        };
        let (from_symbol, to_symbol) = {
            let state = self.state.read();
            let form = state.form(view);
            (form.from_token.symbol.clone(), form.to_token.symbol.clone())
        };
        tasks::sync::sync_view(view, provider, from_symbol, to_symbol, self.event_tx.clone());
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    /// Called every frame to process async events and update state.
    ///
    /// Drains the event channel without blocking, then re-derives the hold
    /// blockers from the open modal so a blocker flip cancels the gesture on
    /// the same frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.sync_hold_blockers();
    }

    /// Handle async event results
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    pub(crate) fn sync_hold_blockers(&mut self) {
        let blockers = self.state.read().modal_blockers();
        self.hold.update_blockers(blockers);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmHost for App {
    fn on_confirm(&mut self) {
        self.hold.release();

        let Some(modal) = self.state.write().modal.take() else {
            tracing::warn!("Confirm fired without an open modal");
            return;
        };

        match serde_json::to_string(&modal.summary) {
            Ok(summary) => tracing::info!(origin = ?modal.origin, %summary, "Swap confirmed"),
            Err(e) => tracing::warn!(error = %e, "Swap confirmed, summary not serializable"),
        }

        {
            let mut state = self.state.write();
            state.form_mut(modal.origin).clear();
            state.pending_notifications.push(Notification::Success(format!(
                "Swap submitted (simulated): {} {} → {} {}",
                modal.summary.from_amount,
                modal.summary.from_symbol,
                modal.summary.to_amount,
                modal.summary.to_symbol,
            )));
        }
        self.sync_hold_blockers();
    }

    fn on_close(&mut self) {
        self.hold.release();
        if handlers::modal::close_modal(self.state.clone()).is_some() {
            self.state
                .write()
                .pending_notifications
                .push(Notification::Info("Swap cancelled".to_string()));
        }
        self.sync_hold_blockers();
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    fn handle_amount_input(&mut self, view: ViewKind, raw: String) {
        handlers::swap::handle_amount_input(self.state.clone(), view, &raw);
    }

    fn handle_max_click(&mut self, view: ViewKind) {
        handlers::swap::set_max_amount(self.state.clone(), view);
    }

    fn handle_slippage_change(&mut self, bps: u16) {
        if let Err(e) = handlers::settings::handle_slippage_change(self.state.clone(), bps) {
            tracing::warn!(bps, error = %e, "Slippage change failed");
        }
    }

    fn handle_swap_click(&mut self, view: ViewKind) {
        if let Err(e) = handlers::modal::open_modal(self.state.clone(), view) {
            tracing::debug!(?view, error = %e, "Swap click ignored");
        }
        self.sync_hold_blockers();
    }

    fn handle_hold_press(&mut self) {
        if self.state.read().modal.is_none() {
            return;
        }
        self.sync_hold_blockers();
        self.hold.press();
    }

    fn handle_hold_release(&mut self) {
        self.hold.release();
    }

    fn hold_progress(&self) -> u8 {
        self.hold.progress()
    }

    fn is_holding(&self) -> bool {
        self.hold.is_holding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::GateStatus;

    async fn synced_app(provider: MockMarketProvider) -> App {
        let mut app = App::with_provider(Arc::new(provider));
        for _ in 0..200 {
            app.on_tick();
            let synced = {
                let state = app.state.read();
                state.terminal.rpc != RpcStatus::Syncing && state.market.form.rpc != RpcStatus::Syncing
            };
            if synced {
                return app;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("views never finished syncing");
    }

    async fn pump_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
        for _ in 0..300 {
            app.on_tick();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition never reached");
    }

    async fn app_with_open_modal() -> App {
        let mut app = synced_app(MockMarketProvider::default()).await;
        app.handle_amount_input(ViewKind::Terminal, "0.5".to_string());
        app.handle_swap_click(ViewKind::Terminal);
        assert!(app.state.read().modal.is_some());
        app
    }

    #[tokio::test]
    async fn test_sync_populates_both_views() {
        let app = synced_app(MockMarketProvider::default()).await;
        let state = app.state.read();
        assert!(state.terminal.rpc.is_live());
        assert!(state.market.form.rpc.is_live());
        assert_eq!(state.terminal.balance, Some(1.4502));
        assert_eq!(state.market.form.price, 2450.50);
        assert_eq!(state.market.history.len(), 60);
    }

    #[tokio::test]
    async fn test_gate_is_syncing_before_liveness_answers() {
        let app = App::with_provider(Arc::new(
            MockMarketProvider::default().with_latency(Duration::from_secs(30)),
        ));
        let state = app.state.read();
        assert_eq!(state.terminal.gate().status(), GateStatus::Syncing);
    }

    #[tokio::test]
    async fn test_amount_typed_during_sync_survives_until_balance_arrives() {
        let mut app = App::with_provider(Arc::new(
            MockMarketProvider::default().with_latency(Duration::from_secs(30)),
        ));
        app.handle_amount_input(ViewKind::Terminal, "0.8".to_string());
        app.handle_amount_input(ViewKind::Market, "5".to_string());
        assert_eq!(app.state.read().terminal.amount, "0.8");

        for view in [ViewKind::Terminal, ViewKind::Market] {
            app.handle_event(AppEvent::ViewDataLoaded { view, balance: 1.4502, price: 2450.50 });
        }

        let state = app.state.read();
        assert_eq!(state.terminal.amount, "0.8");
        assert_eq!(state.market.form.amount, "1.4502");
    }

    #[tokio::test]
    async fn test_offline_node_keeps_gate_closed() {
        let mut app = synced_app(MockMarketProvider::default().offline()).await;
        app.handle_amount_input(ViewKind::Terminal, "0.5".to_string());
        app.handle_swap_click(ViewKind::Terminal);
        let state = app.state.read();
        assert!(matches!(state.terminal.rpc, RpcStatus::Down(_)));
        assert!(state.modal.is_none());
    }

    #[tokio::test]
    async fn test_completed_hold_confirms_once() {
        let mut app = app_with_open_modal().await;
        app.handle_hold_press();
        assert!(app.is_holding());

        pump_until(&mut app, |app| app.state.read().modal.is_none()).await;

        let state = app.state.read();
        assert_eq!(state.terminal.amount, "");
        let successes = state
            .pending_notifications
            .iter()
            .filter(|n| matches!(n, Notification::Success(_)))
            .count();
        assert_eq!(successes, 1);
        drop(state);
        assert!(!app.is_holding());
        assert_eq!(app.hold_progress(), 0);
    }

    #[tokio::test]
    async fn test_release_resets_progress() {
        let mut app = app_with_open_modal().await;
        app.handle_hold_press();
        pump_until(&mut app, |app| app.hold_progress() >= 10).await;

        app.handle_hold_release();
        assert_eq!(app.hold_progress(), 0);
        assert!(!app.is_holding());
        assert!(app.state.read().modal.is_some());

        // Ticks already queued from the released timer do nothing
        tokio::time::sleep(Duration::from_millis(60)).await;
        app.on_tick();
        assert_eq!(app.hold_progress(), 0);
    }

    #[tokio::test]
    async fn test_node_drop_cancels_hold() {
        let mut app = app_with_open_modal().await;
        app.handle_hold_press();
        assert!(app.is_holding());

        app.handle_event(AppEvent::RpcStatusChanged {
            view: ViewKind::Terminal,
            status: RpcStatus::Down("lost peer".to_string()),
        });

        assert!(!app.is_holding());
        assert_eq!(app.hold_progress(), 0);
        let state = app.state.read();
        let modal = state.modal.as_ref().unwrap();
        assert!(!modal.summary.rpc_active);
        assert_eq!(modal.gate().status(), GateStatus::Syncing);
        drop(state);

        // Blocked press is a no-op
        app.handle_hold_press();
        assert!(!app.is_holding());
    }

    #[tokio::test]
    async fn test_close_releases_hold_and_dismisses() {
        let mut app = app_with_open_modal().await;
        app.handle_hold_press();
        app.on_close();

        assert!(!app.is_holding());
        let state = app.state.read();
        assert!(state.modal.is_none());
        assert_eq!(state.terminal.amount, "0.5");
    }

    #[tokio::test]
    async fn test_press_without_modal_is_ignored() {
        let mut app = synced_app(MockMarketProvider::default()).await;
        app.handle_hold_press();
        assert!(!app.is_holding());
    }

    #[tokio::test]
    async fn test_high_impact_amount_cannot_open_modal() {
        let mut app = synced_app(MockMarketProvider {
            balance: 5000.0,
            ..MockMarketProvider::default()
        })
        .await;
        app.handle_amount_input(ViewKind::Market, "3000".to_string());
        app.handle_swap_click(ViewKind::Market);

        let state = app.state.read();
        assert_eq!(state.market.form.gate().status(), GateStatus::ImpactTooHigh);
        assert!(state.modal.is_none());
    }
}
