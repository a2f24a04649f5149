use std::path::Path;

use reliability_viewer::data::compare::{ComparisonSet, ToggleOutcome};
use reliability_viewer::data::filter::{FilterCriteria, filter_records};
use reliability_viewer::data::loader;
use reliability_viewer::data::model::{Appreciation, Dataset, VehicleRecord};
use reliability_viewer::data::sort::{SortField, SortSpec, sort_records};
use reliability_viewer::BrowserConfig;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse,
    /// Detail page of a vehicle id (which may not exist).
    Details(u32),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: BrowserConfig,

    /// Reference data currently browsed.
    pub dataset: Dataset,

    /// Active filter constraints.
    pub criteria: FilterCriteria,

    /// Contents of the search box (applied on submit).
    pub search_input: String,

    /// Active table ordering.
    pub sort: SortSpec,

    /// Ids of the rows passing the filters, in sort order (cached).
    pub visible_ids: Vec<u32>,

    /// Inputs `visible_ids` was derived from.
    visible_key: Option<(FilterCriteria, SortSpec)>,

    /// Vehicles picked for comparison.
    pub selection: ComparisonSet,

    pub view: View,

    /// Whether the comparison window is open.
    pub show_compare: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: BrowserConfig, dataset: Dataset) -> Self {
        let selection = ComparisonSet::with_capacity(config.compare_capacity);
        let mut state = Self {
            config,
            dataset,
            criteria: FilterCriteria::default(),
            search_input: String::new(),
            sort: SortSpec::default(),
            visible_ids: Vec::new(),
            visible_key: None,
            selection,
            view: View::Browse,
            show_compare: false,
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Ingest a newly loaded dataset.  Filters and sort survive; selected ids
    /// missing from the new data are dropped.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection.retain_known(&dataset);
        if !self.selection.can_compare() {
            self.show_compare = false;
        }
        self.dataset = dataset;
        self.visible_key = None;
        self.status_message = None;
        self.refresh();
    }

    /// Load a dataset file, keeping the current data on failure.
    pub fn open_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute `visible_ids` if the filters or the sort changed.
    pub fn refresh(&mut self) {
        let key = (self.criteria.clone(), self.sort);
        if self.visible_key.as_ref() == Some(&key) {
            return;
        }
        let filtered = filter_records(self.dataset.cars(), &self.criteria);
        self.visible_ids = sort_records(&filtered, self.sort)
            .iter()
            .map(|car| car.id)
            .collect();
        log::debug!("{} of {} vehicles visible", self.visible_ids.len(), self.dataset.len());
        self.visible_key = Some(key);
    }

    /// Rows of the table, in display order.
    pub fn visible_records(&self) -> Vec<&VehicleRecord> {
        self.visible_ids
            .iter()
            .filter_map(|&id| self.dataset.car_by_id(id))
            .collect()
    }

    // -- Filters --

    pub fn set_brand(&mut self, value: &str) {
        self.criteria.set_brand(value);
        self.refresh();
    }

    pub fn set_body_type(&mut self, value: &str) {
        self.criteria.set_body_type(value);
        self.refresh();
    }

    pub fn set_appreciation(&mut self, value: Option<Appreciation>) {
        self.criteria.set_appreciation(value);
        self.refresh();
    }

    /// Apply the search box contents as the free-text constraint.
    pub fn submit_search(&mut self) {
        self.criteria.set_text(&self.search_input);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.search_input.clear();
        self.refresh();
    }

    // -- Sorting --

    /// Column header click.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.select(field);
        self.refresh();
    }

    // -- Comparison --

    pub fn toggle_compare(&mut self, id: u32) -> ToggleOutcome {
        let outcome = self.selection.toggle(id);
        if outcome == ToggleOutcome::Full {
            log::debug!(
                "Comparison already holds {} vehicles, ignoring {id}",
                self.selection.capacity()
            );
        }
        if !self.selection.can_compare() {
            self.show_compare = false;
        }
        outcome
    }

    pub fn remove_from_compare(&mut self, id: u32) {
        self.selection.remove(id);
        if !self.selection.can_compare() {
            self.show_compare = false;
        }
    }

    pub fn clear_compare(&mut self) {
        self.selection.clear();
        self.show_compare = false;
    }

    pub fn open_compare(&mut self) {
        self.show_compare = self.selection.can_compare();
    }

    // -- Navigation --

    pub fn open_details(&mut self, id: u32) {
        self.view = View::Details(id);
    }

    pub fn back_to_results(&mut self) {
        self.view = View::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reliability_viewer::data::sort::SortDirection;

    fn state() -> AppState {
        AppState::new(BrowserConfig::default(), loader::bundled().unwrap())
    }

    #[test]
    fn starts_with_every_vehicle_by_reliability() {
        let state = state();
        assert_eq!(state.visible_ids.len(), state.dataset.len());
        let scores: Vec<f64> = state.visible_records().iter().map(|c| c.reliability).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn filter_changes_refresh_visible_rows() {
        let mut state = state();
        state.set_brand("Toyota");
        assert!(!state.visible_ids.is_empty());
        assert!(state.visible_records().iter().all(|c| c.brand == "Toyota"));

        state.search_input = "yaris".into();
        state.submit_search();
        let models: Vec<&str> = state.visible_records().iter().map(|c| c.model.as_str()).collect();
        assert_eq!(models, vec!["Yaris"]);

        state.clear_filters();
        assert_eq!(state.visible_ids.len(), state.dataset.len());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn header_clicks_flip_and_reset_direction() {
        let mut state = state();
        state.sort_by(SortField::Reliability);
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        let first = state.visible_records()[0].reliability;
        let min = state
            .dataset
            .cars()
            .iter()
            .map(|c| c.reliability)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(first, min);

        state.sort_by(SortField::Brand);
        assert_eq!(state.sort, SortSpec::new(SortField::Brand));
    }

    #[test]
    fn compare_window_needs_two_vehicles() {
        let mut state = state();
        state.toggle_compare(1);
        state.open_compare();
        assert!(!state.show_compare);

        state.toggle_compare(2);
        state.open_compare();
        assert!(state.show_compare);

        state.remove_from_compare(2);
        assert!(!state.show_compare);
    }

    #[test]
    fn selection_is_capped_by_config() {
        let config = BrowserConfig {
            compare_capacity: 2,
            ..BrowserConfig::default()
        };
        let mut state = AppState::new(config, loader::bundled().unwrap());
        state.toggle_compare(1);
        state.toggle_compare(2);
        assert_eq!(state.toggle_compare(3), ToggleOutcome::Full);
        assert_eq!(state.selection.ids(), &[1, 2]);
    }

    #[test]
    fn reload_drops_unknown_selection() {
        let mut state = state();
        state.toggle_compare(1);
        state.toggle_compare(2);
        state.open_compare();

        let smaller = loader::parse_json(
            r#"[{"id": 2, "marque": "Kia", "modele": "Rio", "type": "Citadine",
                 "dateCommercialisation": "2017-2024", "appreciationQueChoisir": "Bon",
                 "indiceFiabilite": 91.0}]"#,
        )
        .unwrap();
        state.set_dataset(smaller);
        assert_eq!(state.selection.ids(), &[2]);
        assert!(!state.show_compare);
        assert_eq!(state.visible_ids, vec![2]);
    }

    #[test]
    fn failed_load_keeps_current_data() {
        let mut state = state();
        let before = state.dataset.len();
        state.open_path(Path::new("/nonexistent/cars.json"));
        assert_eq!(state.dataset.len(), before);
        assert!(state.status_message.is_some());
    }
}
