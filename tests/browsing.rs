use reliability_viewer::data::compare::{ComparisonSet, ComparisonSummary, ToggleOutcome, delta_sentence};
use reliability_viewer::data::filter::{FilterCriteria, filter_records};
use reliability_viewer::data::loader;
use reliability_viewer::data::model::{Appreciation, Dataset, VehicleRecord};
use reliability_viewer::data::sort::{SortDirection, SortField, SortSpec, sort_records};
use reliability_viewer::BrowserConfig;

fn record(id: u32, brand: &str, model: &str, appreciation: Appreciation, reliability: f64) -> VehicleRecord {
    VehicleRecord {
        id,
        brand: brand.into(),
        model: model.into(),
        body_type: "Citadine".into(),
        commercialization: "2019-2024".into(),
        appreciation,
        reliability,
    }
}

/// A: Peugeot 92 Bon, B: Renault 96 Très bon, C: Peugeot 70 Mauvais.
fn scenario() -> Dataset {
    Dataset::from_cars(vec![
        record(1, "Peugeot", "208", Appreciation::Bon, 92.0),
        record(2, "Renault", "Clio", Appreciation::TresBon, 96.0),
        record(3, "Peugeot", "3008", Appreciation::Mauvais, 70.0),
    ])
    .unwrap()
}

fn ids(records: &[&VehicleRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn scenario_filter_sort_compare() {
    let dataset = scenario();

    let mut criteria = FilterCriteria::default();
    criteria.set_brand("Peugeot");
    assert_eq!(ids(&filter_records(dataset.cars(), &criteria)), vec![1, 3]);

    let all: Vec<&VehicleRecord> = dataset.cars().iter().collect();
    assert_eq!(ids(&sort_records(&all, SortSpec::new(SortField::Reliability))), vec![2, 1, 3]);

    let mut selection = ComparisonSet::default();
    for id in [1, 2, 3] {
        assert_eq!(selection.toggle(id), ToggleOutcome::Added);
    }
    let compared = selection.resolve(&dataset);
    let summary = ComparisonSummary::of(&compared).unwrap();
    assert_eq!(summary.best.id, 2);
    assert_eq!(summary.best_score, 96.0);
    assert_eq!(summary.worst.id, 3);
    assert_eq!(format!("{:.1}", summary.gap()), "26.0");
    let sentence = delta_sentence(&compared).unwrap();
    assert!(sentence.starts_with("Le Renault Clio"));
    assert!(sentence.ends_with("26.0 points de plus que le Peugeot 3008."));
}

#[test]
fn missing_id_is_not_found() {
    let dataset = scenario();
    assert!(dataset.car_by_id(0).is_none());
    assert!(dataset.car_by_id(u32::MAX).is_none());
}

#[test]
fn bundled_filters_are_sound_and_complete() {
    let dataset = loader::bundled().unwrap();
    for brand in dataset.unique_brands() {
        for tier in Appreciation::ALL {
            let mut criteria = FilterCriteria::default();
            criteria.set_brand(brand);
            criteria.set_appreciation(Some(tier));

            let found = filter_records(dataset.cars(), &criteria);
            let expected: Vec<u32> = dataset
                .cars()
                .iter()
                .filter(|c| c.brand == brand && c.appreciation == tier)
                .map(|c| c.id)
                .collect();
            assert_eq!(ids(&found), expected, "{brand} / {tier}");
        }
    }
}

#[test]
fn bundled_tier_sort_is_monotonic() {
    let dataset = loader::bundled().unwrap();
    let all: Vec<&VehicleRecord> = dataset.cars().iter().collect();
    let spec = SortSpec {
        field: SortField::Appreciation,
        direction: SortDirection::Descending,
    };
    let sorted = sort_records(&all, spec);
    assert!(sorted
        .windows(2)
        .all(|w| w[0].appreciation.ordinal() >= w[1].appreciation.ordinal()));
    assert_eq!(sorted.first().unwrap().appreciation, Appreciation::TresBon);
    assert_eq!(sorted.last().unwrap().appreciation, Appreciation::Mauvais);
}

#[test]
fn bundled_similar_vehicles_respect_tolerance() {
    let dataset = loader::bundled().unwrap();
    let config = BrowserConfig::default();
    for car in dataset.cars() {
        let similar = dataset.similar_to(car, config.similar_tolerance, config.similar_limit);
        assert!(similar.len() <= config.similar_limit);
        for other in similar {
            assert_ne!(other.id, car.id);
            assert!(other.body_type == car.body_type || other.brand == car.brand);
            assert!((other.reliability - car.reliability).abs() <= config.similar_tolerance + 1e-9);
        }
    }
}

#[test]
fn bundled_brand_table_matches_vehicles() {
    let dataset = loader::bundled().unwrap();
    assert_eq!(dataset.brands().len(), dataset.unique_brands().len());
    for brand in dataset.brands() {
        assert!(dataset.cars_by_brand(&brand.brand).next().is_some(), "{}", brand.brand);
    }
    let top = dataset.top_brands(BrowserConfig::default().top_brands);
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0].reliability >= w[1].reliability));
}
