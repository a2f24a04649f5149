use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use reliability_viewer::data::sort::{SortDirection, SortField, SortSpec};

use crate::state::AppState;
use crate::ui::widgets;

const ROW_HEIGHT: f32 = 24.0;

/// Row interaction collected while the table borrows the state.
enum RowAction {
    ToggleCompare(u32),
    OpenDetails(u32),
}

fn header_text(field: SortField, sort: SortSpec) -> String {
    if sort.field != field {
        return format!("{} ⇅", field.label());
    }
    match sort.direction {
        SortDirection::Ascending => format!("{} ▲", field.label()),
        SortDirection::Descending => format!("{} ▼", field.label()),
    }
}

// ---------------------------------------------------------------------------
// Vehicle table (central panel)
// ---------------------------------------------------------------------------

/// Render the sortable vehicle table.
pub fn car_table(ui: &mut Ui, state: &mut AppState) {
    let heading = if state.criteria.is_empty() {
        "Tous les véhicules"
    } else {
        "Résultats"
    };
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(heading);
        ui.label(RichText::new(state.visible_ids.len().to_string()).strong());
    });
    ui.weak("Cliquez sur + pour ajouter à la comparaison");
    ui.separator();

    let rows = state.visible_records();
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Aucun véhicule trouvé");
        });
        return;
    }

    let sort = state.sort;
    let selection = &state.selection;
    let mut clicked_field: Option<SortField> = None;
    let mut action: Option<RowAction> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(28.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(70.0))
        .min_scrolled_height(0.0)
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("+");
            });
            for field in SortField::ALL {
                header.col(|ui: &mut Ui| {
                    if ui.button(RichText::new(header_text(field, sort)).strong()).clicked() {
                        clicked_field = Some(field);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let car = rows[row.index()];
                let selected = selection.contains(car.id);

                row.col(|ui: &mut Ui| {
                    let enabled = selected || !selection.is_full();
                    let label = if selected { "✔" } else { "+" };
                    let response = ui
                        .add_enabled(enabled, egui::SelectableLabel::new(selected, label))
                        .on_hover_text("Comparer")
                        .on_disabled_hover_text(format!(
                            "{} véhicules maximum",
                            selection.capacity()
                        ));
                    if response.clicked() {
                        action = Some(RowAction::ToggleCompare(car.id));
                    }
                });
                row.col(|ui: &mut Ui| {
                    ui.strong(&car.brand);
                });
                row.col(|ui: &mut Ui| {
                    if ui.link(&car.model).clicked() {
                        action = Some(RowAction::OpenDetails(car.id));
                    }
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&car.body_type);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&car.commercialization);
                });
                row.col(|ui: &mut Ui| {
                    widgets::appreciation_badge(ui, car.appreciation);
                });
                row.col(|ui: &mut Ui| {
                    widgets::score_label(ui, car.reliability);
                });
            });
        });

    if let Some(field) = clicked_field {
        state.sort_by(field);
    }
    match action {
        Some(RowAction::ToggleCompare(id)) => {
            state.toggle_compare(id);
        }
        Some(RowAction::OpenDetails(id)) => state.open_details(id),
        None => {}
    }
}
