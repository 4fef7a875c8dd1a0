//! # App Traits
//!
//! [`ConfirmHost`] is the callback contract the confirmation modal needs from
//! whatever hosts it. [`AppLike`] is everything the screen renderers call, so
//! they take `&mut impl AppLike` rather than a concrete [`App`](crate::app::App).

use crate::app::{AppState, Screen, ViewKind};
use parking_lot::RwLock;
use std::sync::Arc;

/// Callbacks supplied by the host of the confirmation modal.
pub trait ConfirmHost {
    /// Hold gesture completed; fired exactly once per completed hold
    fn on_confirm(&mut self);

    /// Modal dismissed (close button or backdrop)
    fn on_close(&mut self);
}

/// Trait for application-like types that screen renderers can use.
pub trait AppLike: ConfirmHost {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Navigation
    fn handle_screen_change(&mut self, screen: Screen);

    // Swap form
    fn handle_amount_input(&mut self, view: ViewKind, raw: String);
    fn handle_max_click(&mut self, view: ViewKind);
    fn handle_slippage_change(&mut self, bps: u16);
    fn handle_swap_click(&mut self, view: ViewKind);

    // Hold-to-confirm
    fn handle_hold_press(&mut self);
    fn handle_hold_release(&mut self);
    fn hold_progress(&self) -> u8;
    fn is_holding(&self) -> bool;
}
