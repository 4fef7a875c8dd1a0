//! # Application State Types
//!
//! Screens, per-view swap forms, node status and the confirmation modal.
//! Everything derived (impact, output estimate, gate) is computed by
//! [`SwapForm`] methods on demand and never stored.

use crate::core::config::TerminalConfig;
use crate::guard::{self, ActionGate, Blockers, Sanitized};
use shared::dto::market::PricePoint;
use shared::dto::swap::{TokenDescriptor, TransactionSummary};
use shared::utils::format_amount;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sell/receive swap panel
    SwapTerminal,
    /// Price chart with an embedded swap form
    MarketView,
}

impl Screen {
    /// All screens in tab order
    pub fn all() -> &'static [Screen] {
        &[Screen::SwapTerminal, Screen::MarketView]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::SwapTerminal => "Swap Terminal",
            Screen::MarketView => "Market View",
        }
    }
}

/// Which view's swap form an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Terminal,
    Market,
}

/// Node (RPC) connection status of a view
#[derive(Debug, Clone, PartialEq)]
pub enum RpcStatus {
    /// Simulated sync still running
    Syncing,
    Live,
    /// Provider failed or reported the node down
    Down(String),
}

impl RpcStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, RpcStatus::Live)
    }
}

/// A swap form: typed amount plus the provider data it is guarded against.
#[derive(Debug, Clone)]
pub struct SwapForm {
    pub from_token: TokenDescriptor,
    pub to_token: TokenDescriptor,
    /// Amount exactly as typed (after the input guard)
    pub amount: String,
    /// Sell-side balance, read-only to the guards; `None` until the provider answers
    pub balance: Option<f64>,
    /// Price of one `from_token` in `to_token`
    pub price: f64,
    pub rpc: RpcStatus,
}

impl SwapForm {
    pub fn new(from_token: TokenDescriptor, to_token: TokenDescriptor) -> Self {
        Self {
            from_token,
            to_token,
            amount: String::new(),
            balance: None,
            price: 0.0,
            rpc: RpcStatus::Syncing,
        }
    }

    pub fn parsed_amount(&self) -> f64 {
        guard::parse_amount(&self.amount)
    }

    pub fn impact_pct(&self) -> f64 {
        guard::estimate_impact(self.parsed_amount())
    }

    pub fn is_high_impact(&self) -> bool {
        guard::is_high_impact(self.impact_pct())
    }

    pub fn balance_exceeded(&self) -> bool {
        self.balance.is_some_and(|balance| self.parsed_amount() > balance)
    }

    /// Receive-side estimate, `None` for an empty or non-numeric amount
    pub fn output_estimate(&self) -> Option<f64> {
        if self.amount.is_empty() {
            return None;
        }
        guard::estimate_output(self.parsed_amount(), self.price, self.impact_pct())
    }

    /// Receive-side estimate as shown in the form; empty when there is none
    pub fn output_display(&self) -> String {
        self.output_estimate()
            .map(|value| format_amount(value, 2))
            .unwrap_or_default()
    }

    pub fn gate(&self) -> ActionGate<'_> {
        ActionGate::new(
            !self.rpc.is_live(),
            self.impact_pct(),
            &self.amount,
            self.balance_exceeded(),
        )
    }

    /// Run a keystroke through the input guard and store the result.
    ///
    /// Before the balance is known only the sign is checked; the amount is
    /// clamped once [`SwapForm::set_balance`] runs.
    pub fn apply_input(&mut self, raw: &str) -> Sanitized {
        let ceiling = self.balance.unwrap_or(f64::INFINITY);
        let outcome = guard::sanitize_amount(raw, ceiling);
        if outcome.changes_state() {
            self.amount = outcome.clone().resolve(&self.amount);
        }
        outcome
    }

    /// Fill the balance through the same guard as typed input.
    /// A no-op while the balance is unknown.
    pub fn apply_max(&mut self) -> Sanitized {
        let Some(balance) = self.balance else {
            return Sanitized::Rejected;
        };
        self.apply_input(&balance.to_string())
    }

    /// Store the provider's balance and re-guard whatever was typed meanwhile.
    pub fn set_balance(&mut self, balance: f64) -> Sanitized {
        self.balance = Some(balance);
        let typed = self.amount.clone();
        if typed.is_empty() {
            return Sanitized::Cleared;
        }
        self.apply_input(&typed)
    }

    pub fn clear(&mut self) {
        self.amount.clear();
    }

    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary {
            from_symbol: self.from_token.symbol.clone(),
            to_symbol: self.to_token.symbol.clone(),
            from_amount: self.amount.clone(),
            to_amount: self.output_display(),
            price_impact: self.impact_pct(),
            rpc_active: self.rpc.is_live(),
            balance: self.balance.unwrap_or_default(),
        }
    }
}

/// Market view: swap form plus the chart series
#[derive(Debug, Clone)]
pub struct MarketViewState {
    pub form: SwapForm,
    pub history: Vec<PricePoint>,
    pub history_error: Option<String>,
}

/// Open confirmation modal
#[derive(Debug, Clone)]
pub struct ModalState {
    pub summary: TransactionSummary,
    /// Form the summary was built from
    pub origin: ViewKind,
}

impl ModalState {
    pub fn is_high_risk(&self) -> bool {
        guard::is_high_impact(self.summary.price_impact)
    }

    pub fn is_node_down(&self) -> bool {
        !self.summary.rpc_active
    }

    pub fn is_over_balance(&self) -> bool {
        guard::parse_amount(&self.summary.from_amount) > self.summary.balance
    }

    pub fn blockers(&self) -> Blockers {
        Blockers {
            high_impact: self.is_high_risk(),
            node_down: self.is_node_down(),
            over_balance: self.is_over_balance(),
        }
    }

    pub fn gate(&self) -> ActionGate<'_> {
        ActionGate::new(
            self.is_node_down(),
            self.summary.price_impact,
            &self.summary.from_amount,
            self.is_over_balance(),
        )
    }
}

/// Toast queued by handlers, shown by the UI on the next frame
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Info(String),
    Warning(String),
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub terminal: SwapForm,
    pub market: MarketViewState,
    pub modal: Option<ModalState>,
    pub config: TerminalConfig,
    pub config_path: String,
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(config: TerminalConfig, config_path: String) -> Self {
        Self {
            current_screen: Screen::SwapTerminal,
            terminal: SwapForm::new(TokenDescriptor::eth(), TokenDescriptor::usdc()),
            market: MarketViewState {
                form: SwapForm::new(TokenDescriptor::eth(), TokenDescriptor::usdc()),
                history: Vec::new(),
                history_error: None,
            },
            modal: None,
            config,
            config_path,
            pending_notifications: Vec::new(),
        }
    }

    pub fn form(&self, view: ViewKind) -> &SwapForm {
        match view {
            ViewKind::Terminal => &self.terminal,
            ViewKind::Market => &self.market.form,
        }
    }

    pub fn form_mut(&mut self, view: ViewKind) -> &mut SwapForm {
        match view {
            ViewKind::Terminal => &mut self.terminal,
            ViewKind::Market => &mut self.market.form,
        }
    }

    /// Blocking conditions of the open modal, none when closed
    pub fn modal_blockers(&self) -> Blockers {
        self.modal.as_ref().map(ModalState::blockers).unwrap_or_default()
    }
}
