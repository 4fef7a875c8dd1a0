//! # Live Update Indicator
//!
//! Node status badge shown in the market view header and the status bar.

use crate::app::RpcStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::glyph;
use egui;

/// Render the node status badge; the dot pulses while live
pub fn render_live_indicator(ui: &mut egui::Ui, status: &RpcStatus, theme: &Theme) {
    match status {
        RpcStatus::Live => {
            let pulse = (ui.input(|i| i.time) * 2.0) as u64 % 2;
            let color = if pulse == 0 { theme.success } else { theme.dim };
            ui.colored_label(color, format!("{} Live", glyph::DOT));
        }
        RpcStatus::Syncing => {
            ui.colored_label(theme.warning, format!("{} Syncing", glyph::DOT_HOLLOW));
        }
        RpcStatus::Down(reason) => {
            ui.colored_label(theme.error, format!("{} Offline", glyph::DOT_HOLLOW))
                .on_hover_text(reason);
        }
    }
}
