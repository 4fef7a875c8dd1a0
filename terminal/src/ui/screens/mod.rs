//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one tab.
//!
//! - **[`swap_terminal`]**: Sell/receive swap panel with price stats
//! - **[`market_view`]**: Price chart with an embedded swap form
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! rendering. User actions go through [`AppLike`](crate::app::AppLike)
//! methods, which lock internally. The confirmation modal is not a screen;
//! [`crate::ui::render`] draws it above whichever tab is active.

pub mod market_view;
pub mod swap_terminal;
