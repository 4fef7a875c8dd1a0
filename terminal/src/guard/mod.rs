//! # Swap Guards
//!
//! Client-side guard rules shared by every swap view. Everything here is pure
//! except [`hold`], whose state machine owns a [`hold::Ticker`].
//!
//! ## Modules
//!
//! - **[`input`]**: Clamp a typed amount to `[0, balance]`
//! - **[`impact`]**: Simulated price impact and output estimate
//! - **[`gate`]**: Enable/disable policy and label priority for the primary action
//! - **[`hold`]**: Hold-to-confirm gesture state machine
//!
//! ## Flow
//!
//! ```text
//! keystroke ──> input::sanitize_amount ──> SwapForm::amount
//!                                              │
//!                      ┌───────────────────────┤
//!                      ▼                       ▼
//!            impact::estimate_impact    gate::ActionGate::status
//!                      │                       │
//!                      └──────────┬────────────┘
//!                                 ▼
//!                     button label / enabled flag
//! ```
//!
//! Derived values are recomputed on every call. Nothing in this module caches.

pub mod gate;
pub mod hold;
pub mod impact;
pub mod input;

pub use gate::{is_action_enabled, ActionGate, GateStatus};
pub use hold::{Blockers, HoldGesture, HoldState, Ticker, TickOutcome, HOLD_STEP, HOLD_TICK_INTERVAL};
pub use impact::{estimate_impact, estimate_output, is_high_impact, HIGH_IMPACT_THRESHOLD_PCT};
pub use input::{parse_amount, sanitize_amount, Sanitized};
