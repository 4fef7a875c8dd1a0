//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod icons;
pub mod layouts;
pub mod live_indicator;
pub mod notifications;
pub mod safety_guard_modal;
pub mod slippage_selector;
pub mod status_bar;
pub mod swap_form;
