use eframe::egui::{self, RichText, Ui};

use reliability_viewer::data::compare::{ComparisonSummary, delta_sentence};

use crate::state::AppState;
use crate::ui::widgets;

// ---------------------------------------------------------------------------
// Bottom compare bar
// ---------------------------------------------------------------------------

/// Selected vehicles as removable chips plus the Effacer / Comparer buttons.
pub fn compare_bar(ui: &mut Ui, state: &mut AppState) {
    let mut remove: Option<u32> = None;
    let mut clear = false;
    let mut compare = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("⚖ Comparer: {}", state.selection.len()));
        ui.separator();

        for car in state.selection.resolve(&state.dataset) {
            ui.group(|ui: &mut Ui| {
                ui.label(car.full_name());
                if ui.small_button("✖").on_hover_text(format!("Retirer {}", car.brand)).clicked() {
                    remove = Some(car.id);
                }
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui
                .add_enabled(state.selection.can_compare(), egui::Button::new("Comparer"))
                .clicked()
            {
                compare = true;
            }
            if ui.button("Effacer").clicked() {
                clear = true;
            }
        });
    });

    if let Some(id) = remove {
        state.remove_from_compare(id);
    }
    if clear {
        state.clear_compare();
    }
    if compare {
        state.open_compare();
    }
}

// ---------------------------------------------------------------------------
// Comparison window
// ---------------------------------------------------------------------------

/// Side-by-side view of the selection with the best-score marker and the
/// analysis sentence.
pub fn compare_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_compare {
        return;
    }

    let mut open = true;
    let mut close = false;
    let mut remove: Option<u32> = None;

    let records = state.selection.resolve(&state.dataset);
    let summary = ComparisonSummary::of(&records);
    let count = records.len();

    egui::Window::new("Comparaison")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(760.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.weak(format!("{count} véhicule{}", if count > 1 { "s" } else { "" }));
            ui.separator();

            ui.columns(count.max(1), |cols: &mut [Ui]| {
                for (ui, car) in cols.iter_mut().zip(&records) {
                    ui.vertical_centered(|ui: &mut Ui| {
                        let best = count > 1 && summary.as_ref().is_some_and(|s| s.is_best(car));
                        if best {
                            let fill = ui.visuals().selection.bg_fill;
                            ui.label(RichText::new(" Meilleur ").strong().background_color(fill));
                        } else {
                            ui.label(" ");
                        }
                        ui.strong(&car.brand);
                        ui.weak(&car.model);
                        widgets::score_headline(ui, car.reliability);
                        widgets::appreciation_badge(ui, car.appreciation);
                        ui.add_space(6.0);
                        ui.label(format!("Type: {}", car.body_type));
                        ui.label(format!("Période: {}", car.commercialization));
                        if ui.small_button("Retirer").clicked() {
                            remove = Some(car.id);
                        }
                    });
                }
            });

            if let Some(sentence) = delta_sentence(&records) {
                ui.separator();
                ui.strong("Analyse");
                ui.label(sentence);
            }

            ui.separator();
            ui.vertical_centered_justified(|ui: &mut Ui| {
                if ui.button("Fermer").clicked() {
                    close = true;
                }
            });
        });

    if let Some(id) = remove {
        state.remove_from_compare(id);
    }
    if close || !open {
        state.show_compare = false;
    }
}
