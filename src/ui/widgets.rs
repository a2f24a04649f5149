use eframe::egui::{self, RichText, Ui};

use reliability_viewer::data::model::Appreciation;

use crate::color;

// ---------------------------------------------------------------------------
// Small shared widgets
// ---------------------------------------------------------------------------

/// Coloured pill with the tier label.
pub fn appreciation_badge(ui: &mut Ui, appreciation: Appreciation) -> egui::Response {
    let text = RichText::new(format!(" {} ", appreciation.label()))
        .small()
        .strong()
        .color(color::tier_text_color(appreciation))
        .background_color(color::tier_color(appreciation));
    ui.label(text)
}

/// Reliability index coloured by value.
pub fn score_label(ui: &mut Ui, score: f64) -> egui::Response {
    ui.label(
        RichText::new(format!("{score}"))
            .strong()
            .color(color::score_color(score)),
    )
}

/// Large reliability index with "sur 100" underneath.
pub fn score_headline(ui: &mut Ui, score: f64) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("{score}"))
                .size(36.0)
                .strong()
                .color(color::score_color(score)),
        );
        ui.weak("sur 100");
    });
}

/// Horizontal 0-100 bar.
pub fn score_bar(ui: &mut Ui, score: f64) {
    ui.add(
        egui::ProgressBar::new((score / 100.0) as f32)
            .fill(color::score_color(score))
            .desired_width(ui.available_width().min(240.0))
            .text(format!("{score}")),
    );
}

/// Tier legend with score bands.
pub fn legend(ui: &mut Ui) {
    egui::Grid::new("appreciation_legend")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for tier in Appreciation::ALL {
                appreciation_badge(ui, tier);
                ui.weak(tier.score_band());
                ui.end_row();
            }
        });
}
