use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{compare, details, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReliabilityApp {
    pub state: AppState,
}

impl ReliabilityApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ReliabilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: comparison selection ----
        if !self.state.selection.is_empty() {
            egui::TopBottomPanel::bottom("compare_bar").show(ctx, |ui| {
                compare::compare_bar(ui, &mut self.state);
            });
        }

        // ---- Left side panel: search, filters, ranking ----
        egui::SidePanel::left("filter_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table or detail page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Browse => table::car_table(ui, &mut self.state),
            View::Details(id) => details::details_view(ui, &mut self.state, id),
        });

        // ---- Comparison window ----
        compare::compare_window(ctx, &mut self.state);
    }
}
