/// Data layer: reference records, loading, and the list derivations.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet  (or bundled assets/cars.json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<VehicleRecord>, Vec<BrandAggregate>, lookups
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  filter   │ ──▶ │   sort    │  visible rows of the table
///   └──────────┘     └──────────┘
///
///   ┌──────────┐
///   │  compare  │  bounded selection + summary, independent of the above
///   └──────────┘
///
///   export: Dataset / visible rows → .json / .csv / .parquet
/// ```

pub mod compare;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
