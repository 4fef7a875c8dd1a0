//! # Swap Form Widgets
//!
//! Pieces shared by the swap terminal and the market view's embedded form.
//! Every edit goes through [`AppLike`] so the input guard sees it.

use crate::app::{AppLike, SwapForm, ViewKind};
use crate::guard::GateStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size, Icons};
use egui::{Color32, RichText};
use shared::dto::swap::TokenDescriptor;

const ACTION_BUTTON_HEIGHT: f32 = 44.0;

/// Coloured symbol badge for a token
pub fn render_token_badge(ui: &mut egui::Ui, token: &TokenDescriptor) {
    let [r, g, b] = token.icon_color;
    ui.label(Icons::icon_color(glyph::DOT, size::MEDIUM, Color32::from_rgb(r, g, b)));
    ui.label(RichText::new(&token.symbol).strong());
}

/// Wallet balance badge, four decimals
pub fn render_balance(ui: &mut egui::Ui, form: &SwapForm, theme: &Theme) {
    ui.label(Icons::icon_dim(glyph::WALLET, size::SMALL));
    let balance = match form.balance {
        Some(balance) => format!("{:.4}", balance),
        None => "--".to_string(),
    };
    ui.colored_label(theme.dim, format!("{} {}", balance, form.from_token.symbol));
}

/// Amount field plus Max button
pub fn render_amount_input(
    ui: &mut egui::Ui,
    form: &SwapForm,
    view: ViewKind,
    app: &mut impl AppLike,
) {
    ui.horizontal(|ui| {
        let mut amount = form.amount.clone();
        let field_width = (ui.available_width() - 130.0).max(80.0);
        let response = ui.add(
            egui::TextEdit::singleline(&mut amount)
                .hint_text("0.0")
                .font(egui::TextStyle::Heading)
                .desired_width(field_width),
        );
        if response.changed() {
            app.handle_amount_input(view, amount);
        }

        if ui.small_button("Max").clicked() {
            app.handle_max_click(view);
        }
        render_token_badge(ui, &form.from_token);
    });
}

/// Read-only receive estimate
pub fn render_output(ui: &mut egui::Ui, form: &SwapForm, theme: &Theme) {
    ui.horizontal(|ui| {
        let output = form.output_display();
        let field_width = (ui.available_width() - 90.0).max(80.0);
        ui.add_sized(
            [field_width, 28.0],
            egui::Label::new(if output.is_empty() {
                RichText::new("0.0").heading().color(theme.dim)
            } else {
                RichText::new(output).heading()
            }),
        );
        render_token_badge(ui, &form.to_token);
    });
}

/// Full-width primary action button. Returns `true` when clicked while enabled.
pub fn render_action_button(ui: &mut egui::Ui, status: GateStatus, label: &str, theme: &Theme) -> bool {
    let text_color = if status.is_enabled() { theme.normal } else { theme.dim };
    let button = egui::Button::new(RichText::new(label).size(16.0).color(text_color))
        .fill(theme.gate_fill(status))
        .min_size(egui::vec2(ui.available_width(), ACTION_BUTTON_HEIGHT));
    ui.add_enabled(status.is_enabled(), button).clicked()
}

/// Warning shown above the action when impact crosses the threshold
pub fn render_high_impact_banner(ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.error.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, theme.error))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(Icons::icon_error(glyph::WARNING, size::SMALL));
                ui.colored_label(
                    theme.error,
                    "High price impact! You may lose a significant portion of your funds.",
                );
            });
        });
}
