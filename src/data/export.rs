use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::loader::CAR_COLUMNS;
use super::model::VehicleRecord;
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// Writers – the inverse of the loaders, used by `export_dataset` and the
// viewer's "Exporter" menu entry
// ---------------------------------------------------------------------------

/// Write `cars` to `path`, picking the format from the extension.
pub fn write_file(path: &Path, cars: &[&VehicleRecord]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => write_json(path, cars),
        "csv" => write_csv(path, cars),
        "parquet" | "pq" => write_parquet(path, cars),
        other => Err(DatasetError::unsupported_format(other).into()),
    }
    .with_context(|| format!("writing {}", path.display()))?;

    log::info!("Exported {} vehicles to {}", cars.len(), path.display());
    Ok(())
}

fn write_json(path: &Path, cars: &[&VehicleRecord]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, cars).context("serializing vehicles")?;
    Ok(())
}

fn write_csv(path: &Path, cars: &[&VehicleRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for car in cars {
        writer.serialize(car).with_context(|| format!("vehicle {}", car.id))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Build one Arrow batch with the [`CAR_COLUMNS`] layout.
pub fn to_record_batch(cars: &[&VehicleRecord]) -> Result<RecordBatch> {
    let [id, brand, model, body_type, period, appreciation, reliability] = CAR_COLUMNS;
    let schema = Arc::new(Schema::new(vec![
        Field::new(id, DataType::UInt32, false),
        Field::new(brand, DataType::Utf8, false),
        Field::new(model, DataType::Utf8, false),
        Field::new(body_type, DataType::Utf8, false),
        Field::new(period, DataType::Utf8, false),
        Field::new(appreciation, DataType::Utf8, false),
        Field::new(reliability, DataType::Float64, false),
    ]));

    let strings = |f: fn(&VehicleRecord) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(cars.iter().map(|&c| f(c)).collect::<Vec<_>>()))
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from(cars.iter().map(|c| c.id).collect::<Vec<_>>())),
        strings(|c| c.brand.as_str()),
        strings(|c| c.model.as_str()),
        strings(|c| c.body_type.as_str()),
        strings(|c| c.commercialization.as_str()),
        strings(|c| c.appreciation.label()),
        Arc::new(Float64Array::from(cars.iter().map(|c| c.reliability).collect::<Vec<_>>())),
    ];

    RecordBatch::try_new(schema, columns).context("building record batch")
}

fn write_parquet(path: &Path, cars: &[&VehicleRecord]) -> Result<()> {
    let batch = to_record_batch(cars)?;
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
