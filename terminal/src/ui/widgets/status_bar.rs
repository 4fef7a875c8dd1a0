//! # Status Bar Widget
//!
//! Bottom status bar showing per-view node status and the active slippage.

use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::live_indicator;
use egui;
use shared::utils::bps_to_percent_str;

/// Render status bar at bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Terminal:");
        live_indicator::render_live_indicator(ui, &state.terminal.rpc, theme);

        ui.separator();

        ui.colored_label(theme.dim, "Market:");
        live_indicator::render_live_indicator(ui, &state.market.form.rpc, theme);

        ui.separator();

        ui.colored_label(
            theme.dim,
            format!("Slippage: {}", bps_to_percent_str(state.config.slippage_bps)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, "Ctrl+Tab: Switch View | Esc: Close Dialog");
        });
    });
}
