use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
    UInt32Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{BrandAggregate, Dataset, VehicleRecord};
use crate::error::DatasetError;

/// Reference data compiled into the binary.
const BUNDLED_JSON: &str = include_str!("../../assets/cars.json");

/// Column names of the tabular formats, in table order.
pub const CAR_COLUMNS: [&str; 7] = [
    "id",
    "marque",
    "modele",
    "type",
    "dateCommercialisation",
    "appreciationQueChoisir",
    "indiceFiabilite",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a vehicle dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `{ "cars": [...], "brands": [...] }` or a bare `[...]` of cars
/// * `.csv`     – one car per row, header row with [`CAR_COLUMNS`]
/// * `.parquet` – one car per row, columns named as [`CAR_COLUMNS`]
///
/// Tabular files carry no brand table; brand aggregates are derived.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DatasetError::unsupported_format(other).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} vehicles and {} brands from {}",
        dataset.len(),
        dataset.brands().len(),
        path.display()
    );
    Ok(dataset)
}

/// The reference dataset shipped with the viewer.
pub fn bundled() -> Result<Dataset> {
    parse_json(BUNDLED_JSON).context("parsing bundled dataset")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse either layout:
///
/// ```json
/// {
///   "cars": [{ "id": 1, "marque": "Toyota", "modele": "Yaris", "type": "Citadine",
///              "dateCommercialisation": "2020-2024",
///              "appreciationQueChoisir": "Très bon", "indiceFiabilite": 97.1 }],
///   "brands": [{ "rang": 1, "marque": "Toyota", "appreciation": "Très bon",
///                "indiceFiabilite": 96.4 }]
/// }
/// ```
///
/// or the `cars` array alone.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    match root {
        JsonValue::Array(_) => {
            let cars: Vec<VehicleRecord> =
                serde_json::from_value(root).context("reading car records")?;
            Ok(Dataset::from_cars(cars)?)
        }
        JsonValue::Object(mut obj) => {
            let cars = obj
                .remove("cars")
                .context("Expected a \"cars\" array")?;
            let cars: Vec<VehicleRecord> =
                serde_json::from_value(cars).context("reading car records")?;

            match obj.remove("brands") {
                Some(brands) => {
                    let brands: Vec<BrandAggregate> =
                        serde_json::from_value(brands).context("reading brand records")?;
                    Ok(Dataset::new(cars, brands)?)
                }
                None => Ok(Dataset::from_cars(cars)?),
            }
        }
        _ => bail!("Expected a top-level JSON object or array"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in CAR_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::missing_column(column).into());
        }
    }

    let mut cars = Vec::new();
    for (row_no, result) in reader.deserialize::<VehicleRecord>().enumerate() {
        let car = result.with_context(|| format!("CSV row {row_no}"))?;
        cars.push(car);
    }

    Ok(Dataset::from_cars(cars)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by Pandas (`df.to_parquet()`), Polars and the
/// `export_dataset` tool.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut cars = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut cars)?;
    }

    Ok(Dataset::from_cars(cars)?)
}

fn read_batch(batch: &RecordBatch, cars: &mut Vec<VehicleRecord>) -> Result<()> {
    let id = column(batch, "id")?;
    let brand = column(batch, "marque")?;
    let model = column(batch, "modele")?;
    let body_type = column(batch, "type")?;
    let period = column(batch, "dateCommercialisation")?;
    let appreciation = column(batch, "appreciationQueChoisir")?;
    let reliability = column(batch, "indiceFiabilite")?;

    for row in 0..batch.num_rows() {
        let car = VehicleRecord {
            id: extract_u32(id, row).with_context(|| format!("Row {row}: id"))?,
            brand: extract_string(brand, row).with_context(|| format!("Row {row}: marque"))?,
            model: extract_string(model, row).with_context(|| format!("Row {row}: modele"))?,
            body_type: extract_string(body_type, row)
                .with_context(|| format!("Row {row}: type"))?,
            commercialization: extract_string(period, row)
                .with_context(|| format!("Row {row}: dateCommercialisation"))?,
            appreciation: extract_string(appreciation, row)
                .with_context(|| format!("Row {row}: appreciationQueChoisir"))?
                .parse()?,
            reliability: extract_f64(reliability, row)
                .with_context(|| format!("Row {row}: indiceFiabilite"))?,
        };
        cars.push(car);
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| DatasetError::missing_column(name))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

fn extract_u32(col: &Arc<dyn Array>, row: usize) -> Result<u32> {
    if col.is_null(row) {
        bail!("null value");
    }
    let value: i64 = match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().context("expected Int32Array")?;
            arr.value(row).into()
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().context("expected Int64Array")?;
            arr.value(row)
        }
        DataType::UInt32 => {
            let arr = col.as_any().downcast_ref::<UInt32Array>().context("expected UInt32Array")?;
            arr.value(row).into()
        }
        other => bail!("Expected an integer column, got {other:?}"),
    };
    u32::try_from(value).with_context(|| format!("{value} is not a valid id"))
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().context("expected Int64Array")?;
            Ok(arr.value(row) as f64)
        }
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_is_valid() {
        let dataset = bundled().unwrap();
        assert!(dataset.len() > 20);
        assert!(!dataset.brands().is_empty());
        assert!(dataset.car_by_id(1).is_some());
    }

    #[test]
    fn parses_bare_array_and_derives_brands() {
        let dataset = parse_json(
            r#"[
                {"id": 1, "marque": "Kia", "modele": "Picanto", "type": "Citadine",
                 "dateCommercialisation": "2017-2024", "appreciationQueChoisir": "Bon",
                 "indiceFiabilite": 91.0},
                {"id": 2, "marque": "Kia", "modele": "Niro", "type": "SUV",
                 "dateCommercialisation": "2016-2022", "appreciationQueChoisir": "Très bon",
                 "indiceFiabilite": 95.0}
            ]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        let kia = dataset.brand("Kia").unwrap();
        assert_eq!(kia.reliability, 93.0);
        assert_eq!(kia.rank, 1);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = parse_json(
            r#"[{"id": 1, "marque": "Kia", "modele": "Rio", "type": "Citadine",
                 "dateCommercialisation": "2017", "appreciationQueChoisir": "Excellent",
                 "indiceFiabilite": 91.0}]"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Unknown appreciation"));
    }

    #[test]
    fn scalar_root_is_rejected() {
        assert!(parse_json("42").is_err());
        assert!(parse_json(r#"{"brands": []}"#).is_err());
    }
}
