//! # Layout Components
//!
//! Reusable layout patterns for consistent screen organization

use egui;

/// Render a two-column split layout
pub fn render_split_layout<F1, F2>(ui: &mut egui::Ui, left_content: F1, right_content: F2)
where
    F1: FnOnce(&mut egui::Ui),
    F2: FnOnce(&mut egui::Ui),
{
    ui.columns(2, |columns| {
        left_content(&mut columns[0]);
        right_content(&mut columns[1]);
    });
}

/// Render content in a fixed-width column centered horizontally
pub fn render_centered_column<F>(ui: &mut egui::Ui, width: f32, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    let width = width.min(ui.available_width());
    let side = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            content(ui);
        });
    });
}

/// Render a grouped panel with optional heading
pub fn render_panel<F>(ui: &mut egui::Ui, heading: Option<&str>, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.group(|ui| {
        if let Some(heading_text) = heading {
            ui.heading(heading_text);
            ui.add_space(10.0);
        }
        content(ui);
    });
}
