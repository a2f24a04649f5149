//! Write the bundled (or a given) vehicle dataset as JSON, CSV or Parquet.
//!
//! ```text
//! export_dataset cars.parquet
//! export_dataset --input cars.csv --brand Toyota toyota.json
//! export_dataset --type SUV --preview 5 suv.csv
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use arrow::util::pretty::pretty_format_batches;
use reliability_viewer::data::export::{to_record_batch, write_file};
use reliability_viewer::data::filter::{FilterCriteria, filter_records};
use reliability_viewer::data::loader;
use reliability_viewer::data::sort::{SortSpec, sort_records};

#[derive(Parser, Debug)]
#[command(name = "export_dataset")]
#[command(about = "Convert a vehicle reliability dataset between formats")]
struct Args {
    /// Output file; the format follows the extension
    output: PathBuf,

    /// Source dataset (defaults to the bundled data)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Only export this brand
    #[arg(long)]
    brand: Option<String>,

    /// Only export this body type
    #[arg(long = "type")]
    body_type: Option<String>,

    /// Print the first rows as a table before writing
    #[arg(long, value_name = "ROWS")]
    preview: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = match &args.input {
        Some(path) => loader::load_file(path)?,
        None => loader::bundled()?,
    };

    let mut criteria = FilterCriteria::default();
    criteria.set_brand(args.brand.as_deref().unwrap_or(""));
    criteria.set_body_type(args.body_type.as_deref().unwrap_or(""));

    let rows = sort_records(&filter_records(dataset.cars(), &criteria), SortSpec::default());
    if let Some(n) = args.preview {
        let head = &rows[..n.min(rows.len())];
        println!("{}", pretty_format_batches(&[to_record_batch(head)?])?);
    }
    write_file(&args.output, &rows)?;

    println!("Wrote {} vehicles to {}", rows.len(), args.output.display());
    Ok(())
}
