use super::model::{Dataset, VehicleRecord};

// ---------------------------------------------------------------------------
// Comparison selection
// ---------------------------------------------------------------------------

/// What a [`ComparisonSet::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full; nothing changed.
    Full,
}

/// Ordered selection of distinct vehicle ids, bounded by `capacity`.
/// Insertion order is the display order of the comparison view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: Vec<u32>,
    capacity: usize,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::with_capacity(4)
    }
}

impl ComparisonSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Remove `id` if selected, otherwise append it when there is room.
    pub fn toggle(&mut self, id: u32) -> ToggleOutcome {
        if self.contains(id) {
            self.remove(id);
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::Full
        } else {
            self.ids.push(id);
            ToggleOutcome::Added
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.ids.retain(|&selected| selected != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A comparison needs at least two vehicles.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= 2
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Selected records in selection order.  Ids unknown to `dataset` are skipped.
    pub fn resolve<'a>(&self, dataset: &'a Dataset) -> Vec<&'a VehicleRecord> {
        self.ids.iter().filter_map(|&id| dataset.car_by_id(id)).collect()
    }

    /// Drop ids that `dataset` does not contain (after loading another file).
    pub fn retain_known(&mut self, dataset: &Dataset) {
        self.ids.retain(|&id| dataset.car_by_id(id).is_some());
    }
}

// ---------------------------------------------------------------------------
// Comparison summary
// ---------------------------------------------------------------------------

/// Figures derived from the compared records.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary<'a> {
    /// Highest reliability in the selection; every record at this score is "best".
    pub best_score: f64,
    pub best: &'a VehicleRecord,
    pub worst: &'a VehicleRecord,
}

impl<'a> ComparisonSummary<'a> {
    /// `None` for an empty selection.  On equal scores the later record wins
    /// both the best and the worst slot.
    pub fn of(records: &[&'a VehicleRecord]) -> Option<Self> {
        let (&first, rest) = records.split_first()?;
        let mut best = first;
        let mut worst = first;
        for &record in rest {
            if record.reliability >= best.reliability {
                best = record;
            }
            if record.reliability <= worst.reliability {
                worst = record;
            }
        }
        Some(Self {
            best_score: best.reliability,
            best,
            worst,
        })
    }

    pub fn is_best(&self, record: &VehicleRecord) -> bool {
        record.reliability == self.best_score
    }

    /// Reliability gap between the best and the worst record.
    pub fn gap(&self) -> f64 {
        self.best.reliability - self.worst.reliability
    }

    /// Analysis sentence of the comparison view.
    pub fn sentence(&self) -> String {
        format!(
            "Le {} obtient le meilleur score ({}/100), {:.1} points de plus que le {}.",
            self.best.full_name(),
            self.best.reliability,
            self.gap(),
            self.worst.full_name(),
        )
    }
}

/// Analysis sentence for a selection, only meaningful with two or more records.
pub fn delta_sentence(records: &[&VehicleRecord]) -> Option<String> {
    if records.len() < 2 {
        return None;
    }
    ComparisonSummary::of(records).map(|s| s.sentence())
}
