//! # Market View Screen
//!
//! Price history chart next to a compact swap form. The chart carries a
//! loading overlay until the market view's node sync finishes.

use crate::app::{AppLike, AppState, RpcStatus, ViewKind};
use crate::guard::GateStatus;
use crate::ui::chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size, Icons};
use crate::ui::widgets::{layouts, live_indicator, swap_form};
use egui::Color32;
use shared::utils::{format_amount, format_percent};

/// Action button text for a gate status
pub fn action_label(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Syncing => "Syncing RPC...",
        GateStatus::ImpactTooHigh => "Price Impact Too High",
        GateStatus::Blocked | GateStatus::Ready => "Swap Tokens",
    }
}

/// Render the market view screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let form = &state.market.form;

    ui.horizontal(|ui| {
        ui.label(Icons::icon_info(glyph::CHART, size::MEDIUM));
        ui.heading(format!("{}/{}", form.from_token.symbol, form.to_token.symbol));
        ui.label(egui::RichText::new(format_amount(form.price, 2)).size(18.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            live_indicator::render_live_indicator(ui, &form.rpc, &theme);
        });
    });
    ui.separator();
    ui.add_space(6.0);

    layouts::render_split_layout(
        ui,
        |ui| render_chart_panel(ui, state, &theme),
        |ui| render_swap_panel(ui, state, app, &theme),
    );
}

fn render_chart_panel(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    layouts::render_panel(ui, None, |ui| {
        let chart_response = ui.scope(|ui| {
            chart::render_price_area(ui, &state.market.history, theme);
        });

        if let Some(error) = &state.market.history_error {
            ui.colored_label(theme.error, format!("History unavailable: {error}"));
        }

        if state.market.form.rpc == RpcStatus::Syncing {
            let rect = chart_response.response.rect;
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::ZERO, Color32::from_black_alpha(160));
            ui.put(rect, egui::Spinner::new().size(32.0));
        }
    });
}

fn render_swap_panel(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let form = &state.market.form;

    layouts::render_panel(ui, Some("Swap"), |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "Balance");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                swap_form::render_balance(ui, form, theme);
            });
        });
        ui.add_space(6.0);

        ui.colored_label(theme.dim, "Amount");
        swap_form::render_amount_input(ui, form, ViewKind::Market, app);
        ui.add_space(6.0);

        ui.colored_label(theme.dim, "You Receive");
        swap_form::render_output(ui, form, theme);

        if !form.amount.is_empty() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "Price Impact");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let impact = form.impact_pct();
                    ui.colored_label(theme.impact_color(impact), format_percent(impact));
                });
            });
        }
        ui.add_space(10.0);

        let status = form.gate().status();
        if swap_form::render_action_button(ui, status, action_label(status), theme) {
            app.handle_swap_click(ViewKind::Market);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label_priority() {
        assert_eq!(action_label(GateStatus::Syncing), "Syncing RPC...");
        assert_eq!(action_label(GateStatus::ImpactTooHigh), "Price Impact Too High");
        assert_eq!(action_label(GateStatus::Ready), "Swap Tokens");
        assert_eq!(action_label(GateStatus::Blocked), "Swap Tokens");
    }
}
