//! # Swap Terminal - Library Root
//!
//! A native desktop token-swap interface with client-side safety guards.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Swap Terminal**: sell/receive panels, price impact, slippage presets
//! - **Market View**: price history area chart with an embedded swap form
//! - **Safety Guard**: confirmation modal with a press-and-hold gesture that
//!   refuses to confirm on high impact, node trouble or over-balance amounts
//!
//! All chain interaction is simulated by
//! [`services::mock::MockMarketProvider`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI                   │
//! │  egui_plot      - Price chart                          │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Sync tasks and the hold ticker       │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ MarketDataProvider (async trait)
//!          ▼
//! ┌─────────────────────────┐
//! │   MockMarketProvider    │
//! │   (simulated latency)   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **guard**: pure swap guards (input clamp, impact, action gate) and the
//!   hold-to-confirm state machine
//! - **app**: orchestrator, state, events, handlers and async tasks
//! - **core**: error type, settings and the provider trait
//! - **services**: provider implementations
//! - **ui**: screens, widgets, theme and chart
//! - **debug**: logging setup
//! - **utils**: Tokio runtime
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── guard (pure rules, hold gesture)
//!   │   └── core::service (provider trait) <── services::mock
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (swap terminal, market view)
//!       └── widgets::* (safety guard modal, swap form, toasts)
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p swap-terminal
//! cargo test -p shared
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod guard;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
