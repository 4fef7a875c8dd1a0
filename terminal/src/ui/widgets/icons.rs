//! # Icons Helper Module
//!
//! Glyphs covered by egui's bundled emoji font, with theme-coloured helpers.

use crate::ui::theme::TerminalColors;
use egui::{Color32, RichText};

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 14.0;
    pub const MEDIUM: f32 = 20.0;
    pub const LARGE: f32 = 28.0;
}

/// Glyph constants
pub mod glyph {
    /// Swap/Exchange
    pub const SWAP: &str = "⇄";
    /// Receive direction arrow
    pub const ARROW_DOWN: &str = "⬇";
    pub const CHART: &str = "📈";
    pub const SHIELD: &str = "🛡";
    pub const CLOSE: &str = "✖";
    pub const CHECK: &str = "✔";
    pub const WARNING: &str = "⚠";
    pub const WALLET: &str = "💼";
    /// Live/status dot
    pub const DOT: &str = "●";
    pub const DOT_HOLLOW: &str = "○";
}

/// Icon helper functions for rendering icons with the terminal theme
pub struct Icons;

impl Icons {
    /// Render an icon with the red accent color
    pub fn icon_red(icon: &str, size: f32) -> RichText {
        Self::icon_color(icon, size, TerminalColors::default().red_primary)
    }

    pub fn icon_success(icon: &str, size: f32) -> RichText {
        Self::icon_color(icon, size, TerminalColors::default().green_success)
    }

    pub fn icon_error(icon: &str, size: f32) -> RichText {
        Self::icon_color(icon, size, TerminalColors::default().red_error)
    }

    pub fn icon_info(icon: &str, size: f32) -> RichText {
        Self::icon_color(icon, size, TerminalColors::default().blue_info)
    }

    /// Render an icon with custom color
    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }

    /// Render an icon with dim/secondary color
    pub fn icon_dim(icon: &str, size: f32) -> RichText {
        Self::icon_color(icon, size, TerminalColors::default().gray_secondary)
    }
}
