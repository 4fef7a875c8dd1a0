//! # Safety Guard Modal
//!
//! Confirmation dialog for a swap. Summarises the transaction, shows the
//! impact and node checks, and only confirms through a press-and-hold button.
//! Close button, Escape and a backdrop click all dismiss it through
//! [`ConfirmHost::on_close`](crate::app::ConfirmHost::on_close).

use crate::app::{AppLike, ModalState};
use crate::guard::impact::impact_bar_fraction;
use crate::guard::GateStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size, Icons};
use egui::{Align2, Color32, CornerRadius, FontId, Id, Rect, Sense};
use shared::utils::format_percent;

const MODAL_WIDTH: f32 = 380.0;
const HOLD_BUTTON_HEIGHT: f32 = 48.0;

/// Hold button text for a gate status
pub fn hold_button_label(status: GateStatus, holding: bool) -> &'static str {
    match status {
        GateStatus::Syncing => "Syncing Nodes...",
        GateStatus::ImpactTooHigh => "Impact Too High",
        GateStatus::Blocked | GateStatus::Ready if holding => "Hold to confirm...",
        GateStatus::Blocked | GateStatus::Ready => "Press & Hold to Swap",
    }
}

/// Node status row text
pub fn node_status_label(rpc_active: bool) -> &'static str {
    if rpc_active {
        "Verified Secure"
    } else {
        "Connection Unstable"
    }
}

/// Render the modal for the open confirmation
pub fn render(ctx: &egui::Context, modal: &ModalState, app: &mut impl AppLike, theme: &Theme) {
    let response = egui::Modal::new(Id::new("safety_guard_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        let close_clicked = render_header(ui, theme);
        ui.separator();
        ui.add_space(8.0);

        render_summary(ui, modal, theme);
        ui.add_space(12.0);
        render_checks(ui, modal, theme);
        ui.add_space(16.0);

        render_hold_button(ui, modal, app, theme);

        if !modal.blockers().any() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(Icons::icon_success(glyph::SHIELD, size::SMALL));
                ui.colored_label(theme.dim, "Safety Guard Active: Anti-Fat-Finger Enabled");
            });
        }

        close_clicked
    });

    if response.inner || response.should_close() {
        app.on_close();
    }
}

fn render_header(ui: &mut egui::Ui, theme: &Theme) -> bool {
    let mut close_clicked = false;
    ui.horizontal(|ui| {
        ui.label(Icons::icon_info(glyph::SHIELD, size::MEDIUM));
        ui.heading("Confirm Swap");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let close = egui::Button::new(Icons::icon_color(glyph::CLOSE, size::SMALL, theme.dim)).frame(false);
            close_clicked = ui.add(close).clicked();
        });
    });
    close_clicked
}

fn render_summary(ui: &mut egui::Ui, modal: &ModalState, theme: &Theme) {
    let summary = &modal.summary;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(theme.dim, "You Pay");
        ui.label(egui::RichText::new(format!("{} {}", summary.from_amount, summary.from_symbol)).size(20.0));
    });
    ui.vertical_centered(|ui| {
        ui.label(Icons::icon_dim(glyph::ARROW_DOWN, size::MEDIUM));
    });
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(theme.dim, "You Receive");
        ui.label(egui::RichText::new(format!("{} {}", summary.to_amount, summary.to_symbol)).size(20.0));
    });
}

fn render_checks(ui: &mut egui::Ui, modal: &ModalState, theme: &Theme) {
    let impact = modal.summary.price_impact;
    let impact_color = theme.impact_color(impact);

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Price Impact");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(impact_color, format_percent(impact));
            if modal.is_high_risk() {
                ui.label(Icons::icon_error(glyph::WARNING, size::SMALL));
            }
        });
    });
    ui.add(
        egui::ProgressBar::new(impact_bar_fraction(impact))
            .desired_height(6.0)
            .fill(impact_color),
    );
    ui.add_space(6.0);

    let rpc_active = modal.summary.rpc_active;
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Node Status");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, color) = if rpc_active {
                (glyph::CHECK, theme.success)
            } else {
                (glyph::WARNING, theme.error)
            };
            ui.colored_label(color, node_status_label(rpc_active));
            ui.label(Icons::icon_color(icon, size::SMALL, color));
        });
    });

    if modal.is_over_balance() {
        ui.add_space(6.0);
        ui.colored_label(theme.error, "Amount exceeds balance");
    }
}

/// Press-and-hold button with a progress overlay.
///
/// Senses drags rather than clicks so a press registers on pointer-down and
/// a release anywhere (or leaving the button) ends the hold.
fn render_hold_button(ui: &mut egui::Ui, modal: &ModalState, app: &mut impl AppLike, theme: &Theme) {
    let status = modal.gate().status();
    let enabled = status.is_enabled();
    let holding = app.is_holding();

    let sense = if enabled { Sense::drag() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), HOLD_BUTTON_HEIGHT), sense);

    if enabled {
        if response.drag_started() {
            app.handle_hold_press();
        } else if holding && (response.drag_stopped() || !response.contains_pointer()) {
            app.handle_hold_release();
        }
    } else if holding {
        app.handle_hold_release();
    }

    let progress = app.hold_progress();
    let holding = app.is_holding();

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = CornerRadius::same(8);
        painter.rect_filled(rect, radius, theme.gate_fill(status));

        if progress > 0 {
            let width = rect.width() * progress as f32 / 100.0;
            let overlay = Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
            painter.rect_filled(overlay, radius, Color32::from_white_alpha(48));
        }

        let text_color = if enabled { theme.normal } else { theme.dim };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            hold_button_label(status, holding),
            FontId::proportional(16.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_button_label_priority() {
        assert_eq!(hold_button_label(GateStatus::Syncing, false), "Syncing Nodes...");
        assert_eq!(hold_button_label(GateStatus::ImpactTooHigh, false), "Impact Too High");
        assert_eq!(hold_button_label(GateStatus::Ready, false), "Press & Hold to Swap");
        assert_eq!(hold_button_label(GateStatus::Blocked, false), "Press & Hold to Swap");
        assert_eq!(hold_button_label(GateStatus::Ready, true), "Hold to confirm...");
    }

    #[test]
    fn test_syncing_label_wins_while_holding() {
        assert_eq!(hold_button_label(GateStatus::Syncing, true), "Syncing Nodes...");
    }

    #[test]
    fn test_node_status_label() {
        assert_eq!(node_status_label(true), "Verified Secure");
        assert_eq!(node_status_label(false), "Connection Unstable");
    }
}
