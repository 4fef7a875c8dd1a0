//! # GUI Theme
//!
//! Dark terminal theme for egui: black panels, white text, red accent and
//! green/amber/red status colours for the guard states.

use crate::guard::{self, GateStatus};
use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Terminal color palette
#[derive(Debug, Clone)]
pub struct TerminalColors {
    /// Pure black background
    pub background: Color32,
    /// Card and input background
    pub surface: Color32,
    /// Bright white text
    pub text: Color32,
    /// Primary accent
    pub red_primary: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Success green (live, verified)
    pub green_success: Color32,
    /// Error red (high impact, node down)
    pub red_error: Color32,
    /// Warning amber (syncing)
    pub yellow_warning: Color32,
    /// Info blue (primary action)
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for TerminalColors {
    fn default() -> Self {
        TerminalColors {
            background: Color32::from_rgb(0, 0, 0),           // #000000
            surface: Color32::from_rgb(17, 17, 20),           // #111114
            text: Color32::from_rgb(255, 255, 255),           // #FFFFFF
            red_primary: Color32::from_rgb(204, 0, 0),        // #CC0000

            border_dark: Color32::from_rgb(51, 51, 51),       // #333333

            green_success: Color32::from_rgb(16, 185, 129),   // #10B981
            red_error: Color32::from_rgb(239, 68, 68),        // #EF4444
            yellow_warning: Color32::from_rgb(255, 170, 0),   // #FFAA00
            blue_info: Color32::from_rgb(59, 130, 246),       // #3B82F6

            gray_inactive: Color32::from_rgb(26, 26, 26),     // #1A1A1A
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: TerminalColors,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Background color
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = TerminalColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.red_primary,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Red above the high-impact threshold, green otherwise
    pub fn impact_color(&self, impact_pct: f64) -> Color32 {
        if guard::is_high_impact(impact_pct) {
            self.error
        } else {
            self.success
        }
    }

    /// Fill of a primary action button for a gate status
    pub fn gate_fill(&self, status: GateStatus) -> Color32 {
        match status {
            GateStatus::Ready => self.info,
            GateStatus::ImpactTooHigh => self.error.gamma_multiply(0.35),
            GateStatus::Syncing | GateStatus::Blocked => self.colors.gray_inactive,
        }
    }

    /// Create terminal-style egui Visuals
    pub fn terminal_visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.surface;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 30, 30);

        // Hovered widgets - Red highlight
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 0);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 0, 0);

        visuals.widgets.active.bg_fill = Color32::from_rgb(102, 0, 0);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(76, 0, 0);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(204, 0, 0, 76); // 30% opacity red
        visuals.selection.stroke = Stroke::new(2.0, colors.red_primary);

        visuals.hyperlink_color = colors.blue_info;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the terminal theme to an egui context
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch keeps
    /// the terminal look.
    pub fn apply_terminal_theme(ctx: &Context) {
        let visuals = Theme::default().terminal_visuals();

        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied terminal theme visuals");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_color_switches_above_threshold() {
        let theme = Theme::default();
        assert_eq!(theme.impact_color(5.0), theme.success);
        assert_eq!(theme.impact_color(5.01), theme.error);
    }

    #[test]
    fn test_only_ready_gate_gets_action_fill() {
        let theme = Theme::default();
        assert_eq!(theme.gate_fill(GateStatus::Ready), theme.info);
        assert_ne!(theme.gate_fill(GateStatus::Blocked), theme.info);
        assert_ne!(theme.gate_fill(GateStatus::Syncing), theme.info);
    }
}
