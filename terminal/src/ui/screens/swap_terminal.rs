//! # Swap Terminal Screen
//!
//! Sell/receive panels, price stats and the primary "Confirm Swap" action.
//! The action opens the safety guard modal; it never swaps directly.

use crate::app::{AppLike, AppState, ViewKind};
use crate::guard::GateStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size, Icons};
use crate::ui::widgets::{layouts, slippage_selector, swap_form};
use shared::utils::{format_amount, format_percent};

const PANEL_WIDTH: f32 = 440.0;

/// Action button text for a gate status
pub fn action_label(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Syncing => "Syncing RPC...",
        GateStatus::ImpactTooHigh => "Price Impact Too High",
        GateStatus::Blocked | GateStatus::Ready => "Confirm Swap",
    }
}

/// Render the swap terminal screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let form = &state.terminal;

    ui.add_space(24.0);
    layouts::render_centered_column(ui, PANEL_WIDTH, |ui| {
        ui.horizontal(|ui| {
            ui.label(Icons::icon_red(glyph::SWAP, size::LARGE));
            ui.heading("Swap");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                swap_form::render_balance(ui, form, &theme);
            });
        });
        ui.add_space(8.0);

        layouts::render_panel(ui, None, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(theme.dim, "You Sell");
            swap_form::render_amount_input(ui, form, ViewKind::Terminal, app);
        });

        ui.vertical_centered(|ui| {
            ui.label(Icons::icon_dim(glyph::ARROW_DOWN, size::MEDIUM));
        });

        layouts::render_panel(ui, None, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(theme.dim, "You Receive");
            swap_form::render_output(ui, form, &theme);
        });
        ui.add_space(10.0);

        render_stats(ui, state, app, &theme);
        ui.add_space(10.0);

        if form.is_high_impact() {
            swap_form::render_high_impact_banner(ui, &theme);
            ui.add_space(8.0);
        }

        let status = form.gate().status();
        if swap_form::render_action_button(ui, status, action_label(status), &theme) {
            app.handle_swap_click(ViewKind::Terminal);
        }
    });
}

fn render_stats(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let form = &state.terminal;

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Price");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "1 {} = {} {}",
                form.from_token.symbol,
                format_amount(form.price, 2),
                form.to_token.symbol
            ));
        });
    });

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Price Impact");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let impact = form.impact_pct();
            ui.colored_label(theme.impact_color(impact), format_percent(impact));
        });
    });

    slippage_selector::render(ui, state, app, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label_priority() {
        assert_eq!(action_label(GateStatus::Syncing), "Syncing RPC...");
        assert_eq!(action_label(GateStatus::ImpactTooHigh), "Price Impact Too High");
        assert_eq!(action_label(GateStatus::Blocked), "Confirm Swap");
        assert_eq!(action_label(GateStatus::Ready), "Confirm Swap");
    }
}
