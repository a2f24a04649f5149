use std::fs;

use reliability_viewer::data::export::write_file;
use reliability_viewer::data::loader::{self, load_file};
use reliability_viewer::data::model::{Appreciation, VehicleRecord};
use reliability_viewer::DatasetError;
use tempfile::TempDir;

fn bundled_rows() -> Vec<VehicleRecord> {
    loader::bundled().unwrap().cars().to_vec()
}

#[test]
fn csv_export_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.csv");
    let rows = bundled_rows();
    let refs: Vec<&VehicleRecord> = rows.iter().collect();

    write_file(&path, &refs).unwrap();
    let dataset = load_file(&path).unwrap();

    assert_eq!(dataset.cars(), rows.as_slice());
    // brand table is derived for tabular files
    assert_eq!(dataset.brands().len(), dataset.unique_brands().len());
}

#[test]
fn parquet_export_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.parquet");
    let rows = bundled_rows();
    let refs: Vec<&VehicleRecord> = rows.iter().collect();

    write_file(&path, &refs).unwrap();
    let dataset = load_file(&path).unwrap();

    assert_eq!(dataset.len(), rows.len());
    let citroen = dataset.cars().iter().find(|c| c.brand == "Citroën").unwrap();
    assert_eq!(citroen.appreciation, "Moyen".parse::<Appreciation>().unwrap());
}

#[test]
fn handwritten_csv_with_accents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.csv");
    fs::write(
        &path,
        "id,marque,modele,type,dateCommercialisation,appreciationQueChoisir,indiceFiabilite\n\
         10,Renault,Mégane,Compacte,2016-2022,Médiocre,81.7\n\
         11,Renault,Clio,Citadine,2019-2024,Bon,90.9\n",
    )
    .unwrap();

    let dataset = load_file(&path).unwrap();
    let megane = dataset.car_by_id(10).unwrap();
    assert_eq!(megane.model, "Mégane");
    assert_eq!(megane.appreciation, Appreciation::Mediocre);
    assert_eq!(dataset.brand("Renault").unwrap().reliability, 86.3);
}

#[test]
fn csv_without_tier_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.csv");
    fs::write(
        &path,
        "id,marque,modele,type,dateCommercialisation,indiceFiabilite\n1,Kia,Rio,Citadine,2017,91.0\n",
    )
    .unwrap();

    let err = load_file(&path).unwrap_err();
    let missing = err
        .chain()
        .find_map(|e| e.downcast_ref::<DatasetError>())
        .unwrap();
    assert!(matches!(missing, DatasetError::MissingColumn { column } if column == "appreciationQueChoisir"));
}

#[test]
fn json_with_duplicate_ids_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.json");
    fs::write(
        &path,
        r#"{"cars": [
            {"id": 1, "marque": "Kia", "modele": "Rio", "type": "Citadine",
             "dateCommercialisation": "2017", "appreciationQueChoisir": "Bon", "indiceFiabilite": 91.0},
            {"id": 1, "marque": "Kia", "modele": "Ceed", "type": "Compacte",
             "dateCommercialisation": "2018", "appreciationQueChoisir": "Bon", "indiceFiabilite": 90.5}
        ]}"#,
    )
    .unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Duplicate vehicle id: 1"));
}

#[test]
fn json_keeps_published_brand_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.json");
    fs::write(
        &path,
        r#"{
            "cars": [{"id": 1, "marque": "Kia", "modele": "Rio", "type": "Citadine",
                      "dateCommercialisation": "2017", "appreciationQueChoisir": "Bon",
                      "indiceFiabilite": 91.0}],
            "brands": [{"rang": 3, "marque": "Kia", "appreciation": "Très bon", "indiceFiabilite": 95.2}]
        }"#,
    )
    .unwrap();

    let dataset = load_file(&path).unwrap();
    let kia = dataset.brand("Kia").unwrap();
    assert_eq!(kia.rank, 3);
    assert_eq!(kia.appreciation, Appreciation::TresBon);
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.xlsx");
    fs::write(&path, "").unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported file format: .xlsx"));
}
