use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Brand ranking chart (side panel)
// ---------------------------------------------------------------------------

/// Horizontal bars of the most reliable brands, best on top.
pub fn brand_chart(ui: &mut Ui, state: &AppState) {
    let top = state.dataset.top_brands(state.config.top_brands);
    if top.is_empty() {
        ui.weak("Aucune marque.");
        return;
    }

    let n = top.len();
    let names: Vec<String> = top.iter().map(|b| b.brand.clone()).collect();
    let lowest = top
        .iter()
        .map(|b| b.reliability)
        .fold(f64::INFINITY, f64::min);

    // Bar `i` sits at y = n - i so rank 1 is drawn at the top.
    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, brand)| {
            Bar::new((n - i) as f64, brand.reliability)
                .name(format!("{}. {}", i + 1, brand.brand))
                .fill(color::tier_color(brand.appreciation))
                .width(0.7)
        })
        .collect();

    let chart = BarChart::new(bars).horizontal();

    Plot::new("brand_chart")
        .height(22.0 * n as f32 + 40.0)
        .include_x((lowest - 5.0).floor())
        .include_x(100.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .y_axis_formatter(move |mark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 1.0 || pos > n as f64 {
                return String::new();
            }
            names[n - pos as usize].clone()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
