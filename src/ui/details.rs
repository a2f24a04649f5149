use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::widgets;

enum DetailsAction {
    Back,
    Open(u32),
    ToggleCompare(u32),
}

// ---------------------------------------------------------------------------
// Vehicle detail page (central panel)
// ---------------------------------------------------------------------------

/// Render the detail page of vehicle `id`, or a not-found notice.
pub fn details_view(ui: &mut Ui, state: &mut AppState, id: u32) {
    let mut action: Option<DetailsAction> = None;

    if ui.button("⬅ Retour aux résultats").clicked() {
        action = Some(DetailsAction::Back);
    }
    ui.add_space(8.0);

    match state.dataset.car_by_id(id) {
        None => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("Véhicule non trouvé").size(18.0));
                ui.add_space(8.0);
                if ui.button("Retour à la recherche").clicked() {
                    action = Some(DetailsAction::Back);
                }
            });
        }
        Some(car) => {
            let similar = state.dataset.similar_to(
                car,
                state.config.similar_tolerance,
                state.config.similar_limit,
            );
            let selected = state.selection.contains(car.id);
            let can_add = selected || !state.selection.is_full();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    // ---- Heading ----
                    ui.horizontal(|ui: &mut Ui| {
                        ui.heading(RichText::new(car.full_name()).strong());
                        widgets::appreciation_badge(ui, car.appreciation);
                    });
                    ui.weak(&car.body_type);
                    ui.add_space(8.0);

                    let label = if selected { "Retirer de la comparaison" } else { "Ajouter à la comparaison" };
                    if ui.add_enabled(can_add, egui::Button::new(label)).clicked() {
                        action = Some(DetailsAction::ToggleCompare(car.id));
                    }
                    ui.separator();

                    // ---- Score + details ----
                    ui.columns(2, |cols: &mut [Ui]| {
                        cols[0].strong("Indice de fiabilité");
                        widgets::score_headline(&mut cols[0], car.reliability);
                        widgets::score_bar(&mut cols[0], car.reliability);

                        cols[1].strong("Détails du véhicule");
                        egui::Grid::new("car_details")
                            .num_columns(2)
                            .striped(true)
                            .spacing([24.0, 6.0])
                            .show(&mut cols[1], |ui: &mut Ui| {
                                ui.weak("Marque");
                                ui.strong(&car.brand);
                                ui.end_row();
                                ui.weak("Modèle");
                                ui.strong(&car.model);
                                ui.end_row();
                                ui.weak("Type");
                                ui.strong(&car.body_type);
                                ui.end_row();
                                ui.weak("Commercialisation");
                                ui.strong(&car.commercialization);
                                ui.end_row();
                                if let Some(brand) = state.dataset.brand(&car.brand) {
                                    ui.weak("Rang de la marque");
                                    ui.strong(format!("{} ({})", brand.rank, brand.reliability));
                                    ui.end_row();
                                }
                            });
                    });
                    ui.separator();

                    // ---- Similar vehicles ----
                    ui.strong("Véhicules similaires");
                    if similar.is_empty() {
                        ui.weak("Aucun véhicule similaire trouvé.");
                    }
                    for other in &similar {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.link(other.full_name()).clicked() {
                                action = Some(DetailsAction::Open(other.id));
                            }
                            widgets::appreciation_badge(ui, other.appreciation);
                            ui.weak(&other.body_type);
                            widgets::score_label(ui, other.reliability);
                        });
                    }
                    ui.separator();

                    // ---- Legend ----
                    ui.strong("Légende des appréciations");
                    widgets::legend(ui);
                    ui.weak(
                        "L'indice de fiabilité prend en compte les pannes, les coûts de \
                         réparation et la satisfaction globale des propriétaires.",
                    );
                });
        }
    }

    match action {
        Some(DetailsAction::Back) => state.back_to_results(),
        Some(DetailsAction::Open(other)) => state.open_details(other),
        Some(DetailsAction::ToggleCompare(id)) => {
            state.toggle_compare(id);
        }
        None => {}
    }
}
