//! # Slippage Tolerance Selector Widget
//!
//! Preset buttons for the slippage tolerance. The value is displayed and
//! persisted; no swap path enforces it.

use crate::app::{AppLike, AppState};
use crate::core::config::SLIPPAGE_OPTIONS;
use crate::ui::theme::Theme;
use egui;
use shared::utils::bps_to_percent_str;

/// Render slippage selector widget
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Slippage");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current_slippage = state.config.slippage_bps;

            for &bps in SLIPPAGE_OPTIONS.iter().rev() {
                let is_selected = bps == current_slippage;
                if ui.selectable_label(is_selected, bps_to_percent_str(bps)).clicked() && !is_selected {
                    app.handle_slippage_change(bps);
                }
            }
        });
    });
}
