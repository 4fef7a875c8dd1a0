//! # Chart Module
//!
//! Price history area chart using egui_plot.

use crate::ui::theme::Theme;
use egui;
use egui_plot::{Line, Plot, PlotPoints};
use shared::dto::market::{value_range, PricePoint};

/// Chart height in points
pub const CHART_HEIGHT: f32 = 300.0;

/// Plot coordinates: x is minutes relative to the newest point (so <= 0)
pub fn area_points(history: &[PricePoint]) -> Vec<[f64; 2]> {
    let Some(last) = history.last() else {
        return Vec::new();
    };

    history
        .iter()
        .map(|point| {
            let minutes = (point.time - last.time).num_seconds() as f64 / 60.0;
            [minutes, point.value]
        })
        .collect()
}

/// Render the price history as a filled line
pub fn render_price_area(ui: &mut egui::Ui, history: &[PricePoint], theme: &Theme) {
    if history.is_empty() {
        ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui| {
            ui.centered_and_justified(|ui| {
                ui.colored_label(theme.dim, "No chart data available");
            });
        });
        return;
    }

    let (min_price, max_price) = value_range(history);
    let points = area_points(history);

    tracing::trace!(points = points.len(), "Rendering price area chart");

    Plot::new("market_price_area")
        .height(CHART_HEIGHT)
        .include_y(min_price)
        .include_y(max_price)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Price", PlotPoints::from(points))
                    .color(theme.info)
                    .width(2.0)
                    .fill(min_price as f32),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_area_points_relative_to_newest() {
        let now = Utc::now();
        let history = vec![
            PricePoint::new(now - Duration::minutes(2), 2400.0),
            PricePoint::new(now - Duration::minutes(1), 2420.0),
            PricePoint::new(now, 2450.5),
        ];
        let points = area_points(&history);
        assert_eq!(points, vec![[-2.0, 2400.0], [-1.0, 2420.0], [0.0, 2450.5]]);
    }

    #[test]
    fn test_area_points_empty() {
        assert!(area_points(&[]).is_empty());
    }
}
