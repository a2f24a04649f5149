use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use reliability_viewer::data::model::Appreciation;

// ---------------------------------------------------------------------------
// Reliability colours
// ---------------------------------------------------------------------------

/// Hue of a reliability index: red below 60, green from 100, linear between.
fn score_hue(score: f64) -> f32 {
    let t = ((score - 60.0) / 40.0).clamp(0.0, 1.0) as f32;
    t * 135.0
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Text / bar colour of a reliability index.
pub fn score_color(score: f64) -> Color32 {
    hsl_to_color32(score_hue(score), 0.70, 0.42)
}

/// Badge fill of a tier, from red (Mauvais) to deep green (Très bon).
pub fn tier_color(appreciation: Appreciation) -> Color32 {
    match appreciation {
        Appreciation::TresBon => hsl_to_color32(142.0, 0.72, 0.34),
        Appreciation::Bon => hsl_to_color32(142.0, 0.65, 0.45),
        Appreciation::Moyen => hsl_to_color32(45.0, 0.93, 0.50),
        Appreciation::Mediocre => hsl_to_color32(25.0, 0.95, 0.53),
        Appreciation::Mauvais => hsl_to_color32(0.0, 0.84, 0.60),
    }
}

/// Label colour readable on top of [`tier_color`].
pub fn tier_text_color(appreciation: Appreciation) -> Color32 {
    match appreciation {
        Appreciation::Moyen => Color32::BLACK,
        _ => Color32::WHITE,
    }
}
