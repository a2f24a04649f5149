use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use reliability_viewer::data::export;
use reliability_viewer::data::filter::ALL;
use reliability_viewer::data::model::Appreciation;

use crate::state::AppState;
use crate::ui::{chart, widgets};

// ---------------------------------------------------------------------------
// Left side panel – search, filters, stats, ranking
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(64.0)
                .max_height(64.0)
                .rounding(4.0),
        );
        ui.heading("Fiabilité automobile");
    });
    ui.add_space(4.0);

    // Clone what we need so we can mutate state inside the widgets.
    let brands: Vec<String> = state.dataset.unique_brands().into_iter().map(String::from).collect();
    let types: Vec<String> = state.dataset.unique_types().into_iter().map(String::from).collect();
    let models: Vec<String> = state
        .criteria
        .brand
        .as_deref()
        .map(|b| state.dataset.models_by_brand(b).into_iter().map(String::from).collect())
        .unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            search_box(ui, state, &models);
            ui.separator();

            filter_widgets(ui, state, &brands, &types);
            ui.separator();

            let stats = state.dataset.stats();
            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.weak("Modèles analysés");
                    ui.strong(stats.vehicles.to_string());
                    ui.end_row();
                    ui.weak("Marques couvertes");
                    ui.strong(stats.brands.to_string());
                    ui.end_row();
                    ui.weak("Score moyen");
                    ui.strong(format!("{}/100", stats.mean_reliability));
                    ui.end_row();
                });
            ui.separator();

            egui::CollapsingHeader::new(
                RichText::new(format!("Top {} des marques", state.config.top_brands)).strong(),
            )
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                chart::brand_chart(ui, state);
            });

            egui::CollapsingHeader::new(RichText::new("Légende").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    widgets::legend(ui);
                });
        });
}

fn search_box(ui: &mut Ui, state: &mut AppState, models: &[String]) {
    ui.strong("Recherche");
    ui.horizontal(|ui: &mut Ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("Modèle ou marque…")
                .desired_width(150.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("🔍").clicked() || submitted {
            state.submit_search();
        }
    });

    if !models.is_empty() {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for model in models {
                if ui.small_button(model).clicked() {
                    state.search_input = model.clone();
                    state.submit_search();
                }
            }
        });
    }
}

fn filter_widgets(ui: &mut Ui, state: &mut AppState, brands: &[String], types: &[String]) {
    ui.strong("Filtres");

    // ---- Brand ----
    let current_brand = state.criteria.brand.clone();
    let mut picked_brand: Option<String> = None;
    egui::ComboBox::from_id_salt("brand_filter")
        .selected_text(current_brand.as_deref().unwrap_or("Toutes les marques"))
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_brand.is_none(), "Toutes les marques")
                .clicked()
            {
                picked_brand = Some(ALL.to_string());
            }
            for brand in brands {
                if ui
                    .selectable_label(current_brand.as_ref() == Some(brand), brand)
                    .clicked()
                {
                    picked_brand = Some(brand.clone());
                }
            }
        });
    if let Some(brand) = picked_brand {
        state.set_brand(&brand);
    }

    // ---- Body type ----
    let current_type = state.criteria.body_type.clone();
    let mut picked_type: Option<String> = None;
    egui::ComboBox::from_id_salt("type_filter")
        .selected_text(current_type.as_deref().unwrap_or("Tous les types"))
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current_type.is_none(), "Tous").clicked() {
                picked_type = Some(ALL.to_string());
            }
            for body_type in types {
                if ui
                    .selectable_label(current_type.as_ref() == Some(body_type), body_type)
                    .clicked()
                {
                    picked_type = Some(body_type.clone());
                }
            }
        });
    if let Some(body_type) = picked_type {
        state.set_body_type(&body_type);
    }

    // ---- Appreciation ----
    let current_tier = state.criteria.appreciation;
    let mut picked_tier: Option<Option<Appreciation>> = None;
    egui::ComboBox::from_id_salt("appreciation_filter")
        .selected_text(current_tier.map_or("Toutes les appréciations", Appreciation::label))
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current_tier.is_none(), "Toutes").clicked() {
                picked_tier = Some(None);
            }
            for tier in Appreciation::ALL {
                if ui
                    .selectable_label(current_tier == Some(tier), tier.label())
                    .clicked()
                {
                    picked_tier = Some(Some(tier));
                }
            }
        });
    if let Some(tier) = picked_tier {
        state.set_appreciation(tier);
    }

    if !state.criteria.is_empty() && ui.button("✖ Effacer les filtres").clicked() {
        state.clear_filters();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Fichier", |ui: &mut Ui| {
            if ui.button("Ouvrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Exporter la vue…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Quitter").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        ui.label(format!(
            "{} véhicules, {} affichés",
            state.dataset.len(),
            state.visible_ids.len()
        ));

        ui.separator();
        ui.weak(format!("Tri: {}", state.sort));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Ouvrir des données de fiabilité")
        .add_filter("Formats pris en charge", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

/// Save the rows currently shown in the table.
pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Exporter les véhicules affichés")
        .set_file_name("vehicules.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet"])
        .save_file();

    if let Some(path) = file {
        let rows = state.visible_records();
        if let Err(e) = export::write_file(&path, &rows) {
            log::error!("Failed to export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
