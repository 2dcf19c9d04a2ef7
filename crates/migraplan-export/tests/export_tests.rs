use std::fs;

use migraplan_core::{FileRecord, MigrationPlan};
use migraplan_export::{PlanExporter, STRUCTURED_ARTIFACT, TABULAR_ARTIFACT};
use tempfile::TempDir;

fn sample_plan() -> MigrationPlan {
    MigrationPlan::new(vec![
        FileRecord::new("/docs/a.docx", 10, "docx"),
        FileRecord::new("/docs/actas/b.pdf", 300, "pdf"),
        FileRecord::new("/docs/sin_extension", 7, ""),
    ])
}

/// (path, size, type) triples parsed back out of the tabular artifact.
fn parse_tabular(text: &str) -> Vec<(String, u64, String)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (
                r[0].to_string(),
                r[1].parse::<u64>().unwrap(),
                r[2].to_string(),
            )
        })
        .collect()
}

/// The same triples parsed back out of the structured artifact.
fn parse_structured(text: &str) -> Vec<(String, u64, String)> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(text).unwrap();
    rows.iter()
        .map(|row| {
            (
                row["Ruta"].as_str().unwrap().to_string(),
                row["Tamano"].as_u64().unwrap(),
                row["Tipo"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn both_formats_round_trip_to_the_same_records() {
    let plan = sample_plan();
    let exporter = PlanExporter::new();

    let tabular = parse_tabular(&exporter.to_tabular(&plan).unwrap());
    let structured = parse_structured(&exporter.to_structured(&plan).unwrap());

    assert_eq!(tabular, structured);
    assert_eq!(tabular.len(), plan.len());
    assert_eq!(tabular[1], ("/docs/actas/b.pdf".to_string(), 300, "pdf".to_string()));
}

#[test]
fn artifacts_land_under_their_fixed_names() {
    let temp = TempDir::new().unwrap();
    let exporter = PlanExporter::new();
    let plan = sample_plan();

    let csv_path = exporter.write_tabular(&plan, temp.path()).unwrap();
    let json_path = exporter.write_structured(&plan, temp.path()).unwrap();

    assert_eq!(csv_path.file_name().unwrap(), TABULAR_ARTIFACT);
    assert_eq!(json_path.file_name().unwrap(), STRUCTURED_ARTIFACT);
    assert!(csv_path.exists());
    assert!(json_path.exists());
}

#[test]
fn existing_artifacts_are_overwritten_not_appended() {
    let temp = TempDir::new().unwrap();
    let exporter = PlanExporter::new();

    exporter.write_tabular(&sample_plan(), temp.path()).unwrap();
    let first = fs::read_to_string(temp.path().join(TABULAR_ARTIFACT)).unwrap();

    let smaller = MigrationPlan::new(vec![FileRecord::new("/solo.pdf", 1, "pdf")]);
    exporter.write_tabular(&smaller, temp.path()).unwrap();
    let second = fs::read_to_string(temp.path().join(TABULAR_ARTIFACT)).unwrap();

    assert!(second.len() < first.len());
    assert_eq!(second.lines().count(), 2);
}

#[test]
fn empty_plan_produces_consumable_artifacts() {
    let temp = TempDir::new().unwrap();
    let exporter = PlanExporter::new();
    let plan = MigrationPlan::new(Vec::new());

    exporter.write_tabular(&plan, temp.path()).unwrap();
    exporter.write_structured(&plan, temp.path()).unwrap();

    let csv_text = fs::read_to_string(temp.path().join(TABULAR_ARTIFACT)).unwrap();
    let json_text = fs::read_to_string(temp.path().join(STRUCTURED_ARTIFACT)).unwrap();

    assert!(parse_tabular(&csv_text).is_empty());
    assert!(parse_structured(&json_text).is_empty());
}

#[test]
fn write_into_missing_directory_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no/such/dir");

    let err = PlanExporter::new()
        .write_tabular(&sample_plan(), &missing)
        .unwrap_err();
    assert!(matches!(err, migraplan_export::ExportError::Io { .. }));
}
