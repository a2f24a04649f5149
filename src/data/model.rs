use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::sort::collate;
use crate::error::{DatasetError, Result};

// ---------------------------------------------------------------------------
// Appreciation – the five reliability tiers
// ---------------------------------------------------------------------------

/// Reliability tier awarded to a vehicle or a brand, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Appreciation {
    #[serde(rename = "Très bon")]
    TresBon,
    #[serde(rename = "Bon")]
    Bon,
    #[serde(rename = "Moyen")]
    Moyen,
    #[serde(rename = "Médiocre")]
    Mediocre,
    #[serde(rename = "Mauvais")]
    Mauvais,
}

impl Appreciation {
    /// All tiers, best first.
    pub const ALL: [Appreciation; 5] = [
        Appreciation::TresBon,
        Appreciation::Bon,
        Appreciation::Moyen,
        Appreciation::Mediocre,
        Appreciation::Mauvais,
    ];

    /// Rank used for ordering: 5 for the best tier down to 1.
    pub fn ordinal(self) -> u8 {
        match self {
            Appreciation::TresBon => 5,
            Appreciation::Bon => 4,
            Appreciation::Moyen => 3,
            Appreciation::Mediocre => 2,
            Appreciation::Mauvais => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Appreciation::TresBon => "Très bon",
            Appreciation::Bon => "Bon",
            Appreciation::Moyen => "Moyen",
            Appreciation::Mediocre => "Médiocre",
            Appreciation::Mauvais => "Mauvais",
        }
    }

    /// Score band shown in the legend.
    pub fn score_band(self) -> &'static str {
        match self {
            Appreciation::TresBon => "95+",
            Appreciation::Bon => "90-94",
            Appreciation::Moyen => "85-89",
            Appreciation::Mediocre => "80-84",
            Appreciation::Mauvais => "<80",
        }
    }

    /// Tier of a reliability index according to the legend bands.
    pub fn from_score(score: f64) -> Self {
        if score >= 95.0 {
            Appreciation::TresBon
        } else if score >= 90.0 {
            Appreciation::Bon
        } else if score >= 85.0 {
            Appreciation::Moyen
        } else if score >= 80.0 {
            Appreciation::Mediocre
        } else {
            Appreciation::Mauvais
        }
    }
}

impl fmt::Display for Appreciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Appreciation {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        Appreciation::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| DatasetError::unknown_appreciation(s))
    }
}

impl TryFrom<String> for Appreciation {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// VehicleRecord – one row of the reliability table
// ---------------------------------------------------------------------------

/// A single vehicle model with its reliability assessment.
///
/// Field names on disk follow the published data file (`marque`, `modele`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u32,
    #[serde(rename = "marque")]
    pub brand: String,
    #[serde(rename = "modele")]
    pub model: String,
    #[serde(rename = "type")]
    pub body_type: String,
    /// Commercialisation period, display only (e.g. `"2019-2024"`).
    #[serde(rename = "dateCommercialisation")]
    pub commercialization: String,
    #[serde(rename = "appreciationQueChoisir")]
    pub appreciation: Appreciation,
    /// Reliability index on a 0-100 scale.
    #[serde(rename = "indiceFiabilite")]
    pub reliability: f64,
}

impl VehicleRecord {
    /// `"Brand Model"`, as used in headings and the comparison sentence.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(DatasetError::EmptyField { id: self.id, field: "brand" });
        }
        if self.model.trim().is_empty() {
            return Err(DatasetError::EmptyField { id: self.id, field: "model" });
        }
        if !(0.0..=100.0).contains(&self.reliability) {
            return Err(DatasetError::ReliabilityOutOfRange {
                id: self.id,
                value: self.reliability,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// BrandAggregate – per-brand summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAggregate {
    #[serde(rename = "rang")]
    pub rank: u32,
    #[serde(rename = "marque")]
    pub brand: String,
    pub appreciation: Appreciation,
    #[serde(rename = "indiceFiabilite")]
    pub reliability: f64,
}

/// Derive brand aggregates from vehicle rows: mean reliability rounded to one
/// decimal, tier from the legend bands, rank by descending mean.
pub fn aggregate_brands(cars: &[VehicleRecord]) -> Vec<BrandAggregate> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for car in cars {
        let entry = sums.entry(car.brand.as_str()).or_insert((0.0, 0));
        entry.0 += car.reliability;
        entry.1 += 1;
    }

    let mut brands: Vec<BrandAggregate> = sums
        .into_iter()
        .map(|(brand, (sum, count))| {
            let reliability = round1(sum / count as f64);
            BrandAggregate {
                rank: 0,
                brand: brand.to_string(),
                appreciation: Appreciation::from_score(reliability),
                reliability,
            }
        })
        .collect();

    brands.sort_by(|a, b| {
        b.reliability
            .total_cmp(&a.reliability)
            .then_with(|| collate(&a.brand, &b.brand))
    });
    for (i, brand) in brands.iter_mut().enumerate() {
        brand.rank = i as u32 + 1;
    }
    brands
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded reference data
// ---------------------------------------------------------------------------

/// Headline figures shown above the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    pub vehicles: usize,
    pub brands: usize,
    /// Mean reliability rounded to one decimal (0 for an empty dataset).
    pub mean_reliability: f64,
}

/// Validated, read-only vehicle and brand data.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    cars: Vec<VehicleRecord>,
    brands: Vec<BrandAggregate>,
}

impl Dataset {
    /// Build a dataset, checking ids are unique and every record is well formed.
    pub fn new(cars: Vec<VehicleRecord>, brands: Vec<BrandAggregate>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cars.len());
        for car in &cars {
            car.validate()?;
            if !seen.insert(car.id) {
                return Err(DatasetError::DuplicateId { id: car.id });
            }
        }
        Ok(Self { cars, brands })
    }

    /// Build a dataset from vehicle rows only; brand aggregates are derived.
    pub fn from_cars(cars: Vec<VehicleRecord>) -> Result<Self> {
        let brands = aggregate_brands(&cars);
        log::debug!("Derived {} brand aggregates", brands.len());
        Self::new(cars, brands)
    }

    pub fn cars(&self) -> &[VehicleRecord] {
        &self.cars
    }

    pub fn brands(&self) -> &[BrandAggregate] {
        &self.brands
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the dataset has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Look up a vehicle.  `None` is an ordinary outcome (stale link, other
    /// dataset) and is rendered as a not-found view.
    pub fn car_by_id(&self, id: u32) -> Option<&VehicleRecord> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn brand(&self, name: &str) -> Option<&BrandAggregate> {
        self.brands.iter().find(|b| b.brand == name)
    }

    pub fn cars_by_brand<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VehicleRecord> + 'a {
        self.cars.iter().filter(move |c| c.brand == name)
    }

    /// Distinct models of a brand in first-seen order.
    pub fn models_by_brand(&self, name: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.cars
            .iter()
            .filter(|c| c.brand == name)
            .map(|c| c.model.as_str())
            .filter(|m| seen.insert(*m))
            .collect()
    }

    /// Distinct brands, collated alphabetically.
    pub fn unique_brands(&self) -> Vec<&str> {
        unique_sorted(self.cars.iter().map(|c| c.brand.as_str()))
    }

    /// Distinct body types, collated alphabetically.
    pub fn unique_types(&self) -> Vec<&str> {
        unique_sorted(self.cars.iter().map(|c| c.body_type.as_str()))
    }

    /// Other vehicles sharing the body type or the brand of `reference` whose
    /// reliability is within `tolerance` points.  Same-type vehicles come
    /// first, then the smallest gap; at most `limit` are returned.
    pub fn similar_to(&self, reference: &VehicleRecord, tolerance: f64, limit: usize) -> Vec<&VehicleRecord> {
        let gap = |c: &VehicleRecord| (c.reliability - reference.reliability).abs();
        let same_type = |c: &VehicleRecord| c.body_type == reference.body_type;

        let mut similar: Vec<&VehicleRecord> = self
            .cars
            .iter()
            .filter(|c| c.id != reference.id)
            .filter(|&c| same_type(c) || c.brand == reference.brand)
            // one-decimal data: keep a 5.0 gap inside a 5.0 tolerance
            .filter(|&c| gap(c) <= tolerance + 1e-9)
            .collect();

        similar.sort_by(|&a, &b| {
            same_type(b)
                .cmp(&same_type(a))
                .then_with(|| gap(a).total_cmp(&gap(b)))
        });
        similar.truncate(limit);
        similar
    }

    pub fn stats(&self) -> DatasetStats {
        let mean_reliability = if self.cars.is_empty() {
            0.0
        } else {
            let sum: f64 = self.cars.iter().map(|c| c.reliability).sum();
            round1(sum / self.cars.len() as f64)
        };
        DatasetStats {
            vehicles: self.cars.len(),
            brands: self.unique_brands().len(),
            mean_reliability,
        }
    }

    /// The `limit` most reliable brands, best first.
    pub fn top_brands(&self, limit: usize) -> Vec<&BrandAggregate> {
        let mut ranked: Vec<&BrandAggregate> = self.brands.iter().collect();
        ranked.sort_by(|a, b| b.reliability.total_cmp(&a.reliability));
        ranked.truncate(limit);
        ranked
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out: Vec<&str> = values.filter(|v| seen.insert(*v)).collect();
    out.sort_by(|a, b| collate(a, b));
    out
}
