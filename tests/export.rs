use std::fs;

use serde_json::json;
use tempfile::tempdir;

use vortexasdk::flatten::FlatRecord;
use vortexasdk::{flatten, SdkError, Table};

fn records() -> Vec<FlatRecord> {
    [
        json!({"id": "a", "name": "Stallion", "dwt": 320000}),
        json!({"id": "b", "name": "Falcon", "dwt": 105000, "flag": "PA"}),
    ]
    .iter()
    .map(|r| flatten(r).unwrap())
    .collect()
}

#[test]
fn test_write_csv_with_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vessels.csv");

    let table = Table::from_records(&records(), vec!["id".into(), "name".into(), "dwt".into()]);
    table.write_csv(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["id,name,dwt", "a,Stallion,320000", "b,Falcon,105000"]);
}

#[test]
fn test_write_csv_all_columns_has_empty_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("all.csv");

    let records = records();
    let table = Table::from_records(&records, Table::all_columns(&records));
    assert_eq!(table.columns, vec!["id", "name", "dwt", "flag"]);
    table.write_csv(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,name,dwt,flag");
    assert_eq!(lines[1], "a,Stallion,320000,");
    assert_eq!(lines[2], "b,Falcon,105000,PA");
}

#[test]
fn test_write_csv_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("out.csv");
    let table = Table::from_records(&records(), vec!["id".into()]);
    assert!(matches!(table.write_csv(&path), Err(SdkError::Io(_))));
}

#[test]
fn test_unknown_column_lookup() {
    let table = Table::from_records(&records(), vec!["id".into()]);
    assert!(matches!(table.column("name"), Err(SdkError::ColumnNotFound(c)) if c == "name"));
}
