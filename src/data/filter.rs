use super::model::{Appreciation, VehicleRecord};

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Combo-box value standing for "no constraint".
pub const ALL: &str = "all";

/// Active constraints of the vehicle listing.  `None` on a dimension means
/// the dimension is unconstrained; all present constraints must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    /// Exact brand.
    pub brand: Option<String>,
    /// Case-insensitive substring of the model or the brand.
    pub text: Option<String>,
    /// Exact body type.
    pub body_type: Option<String>,
    pub appreciation: Option<Appreciation>,
}

/// Map UI input to a constraint: empty, blank and `"all"` mean none.
fn constraint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

impl FilterCriteria {
    pub fn set_brand(&mut self, value: &str) {
        self.brand = constraint(value);
    }

    /// Free text is matched trimmed.
    pub fn set_text(&mut self, value: &str) {
        self.text = constraint(value).map(|t| t.trim().to_string());
    }

    pub fn set_body_type(&mut self, value: &str) {
        self.body_type = constraint(value);
    }

    pub fn set_appreciation(&mut self, value: Option<Appreciation>) {
        self.appreciation = value;
    }

    /// Whether no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.text.is_none()
            && self.body_type.is_none()
            && self.appreciation.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `car` satisfies every active constraint.
    pub fn matches(&self, car: &VehicleRecord) -> bool {
        if let Some(brand) = &self.brand {
            if car.brand != *brand {
                return false;
            }
        }
        if let Some(body_type) = &self.body_type {
            if car.body_type != *body_type {
                return false;
            }
        }
        if let Some(appreciation) = self.appreciation {
            if car.appreciation != appreciation {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            if !car.model.to_lowercase().contains(&needle)
                && !car.brand.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the records passing `criteria`, in input order.
pub fn filter_records<'a>(records: &'a [VehicleRecord], criteria: &FilterCriteria) -> Vec<&'a VehicleRecord> {
    records.iter().filter(|car| criteria.matches(car)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::car;

    fn records() -> Vec<VehicleRecord> {
        vec![
            car(1, "Peugeot", "208", "Citadine", Appreciation::Bon, 92.0),
            car(2, "Renault", "Clio", "Citadine", Appreciation::TresBon, 96.0),
            car(3, "Peugeot", "3008", "SUV", Appreciation::Mauvais, 70.0),
            car(4, "Dacia", "Duster", "SUV", Appreciation::Moyen, 86.5),
            car(5, "Mercedes", "Classe A", "Compacte", Appreciation::Mediocre, 81.0),
        ]
    }

    fn ids(found: &[&VehicleRecord]) -> Vec<u32> {
        found.iter().map(|c| c.id).collect()
    }

    #[test]
    fn brand_filter() {
        let cars = records();
        let mut criteria = FilterCriteria::default();
        criteria.set_brand("Peugeot");
        assert_eq!(ids(&filter_records(&cars, &criteria)), vec![1, 3]);
    }

    #[test]
    fn brand_match_is_case_sensitive() {
        let cars = records();
        let mut criteria = FilterCriteria::default();
        criteria.set_brand("peugeot");
        assert!(filter_records(&cars, &criteria).is_empty());
    }

    #[test]
    fn empty_criteria_returns_everything() {
        let cars = records();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        let all = filter_records(&cars, &criteria);
        assert_eq!(all.len(), cars.len());
        assert!(all.iter().zip(&cars).all(|(a, b)| *a == b));
    }

    #[test]
    fn all_sentinel_and_blank_are_unconstrained() {
        let mut criteria = FilterCriteria::default();
        criteria.set_brand(ALL);
        criteria.set_body_type("");
        criteria.set_text("   ");
        assert!(criteria.is_empty());
    }

    #[test]
    fn text_matches_model_or_brand_ignoring_case() {
        let cars = records();
        let mut criteria = FilterCriteria::default();

        criteria.set_text("clio");
        assert_eq!(ids(&filter_records(&cars, &criteria)), vec![2]);

        criteria.set_text("PEUG");
        assert_eq!(ids(&filter_records(&cars, &criteria)), vec![1, 3]);

        criteria.set_text(" classe a ");
        assert_eq!(ids(&filter_records(&cars, &criteria)), vec![5]);
    }

    #[test]
    fn constraints_combine_with_and() {
        let cars = records();
        let mut criteria = FilterCriteria::default();
        criteria.set_body_type("SUV");
        criteria.set_appreciation(Some(Appreciation::Moyen));
        assert_eq!(ids(&filter_records(&cars, &criteria)), vec![4]);

        criteria.set_brand("Peugeot");
        assert!(filter_records(&cars, &criteria).is_empty());
    }

    #[test]
    fn result_is_sound_and_complete() {
        let cars = records();
        let mut criteria = FilterCriteria::default();
        criteria.set_text("e");
        criteria.set_body_type("Citadine");

        let found = filter_records(&cars, &criteria);
        for car in &cars {
            let expected = car.body_type == "Citadine"
                && (car.model.to_lowercase().contains('e') || car.brand.to_lowercase().contains('e'));
            assert_eq!(found.iter().any(|c| c.id == car.id), expected, "car {}", car.id);
        }
    }

    #[test]
    fn clear_resets_every_dimension() {
        let mut criteria = FilterCriteria::default();
        criteria.set_brand("Dacia");
        criteria.set_appreciation(Some(Appreciation::Bon));
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
