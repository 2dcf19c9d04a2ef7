use migraplan_core::{
    DEFAULT_MAX_FILE_SIZE_BYTES, FileRecord, MigrationConfig, MigrationPlan, ScanOutcome,
    ScanWarning, WarningKind,
};

#[test]
fn config_round_trips_through_serde() {
    let config = MigrationConfig::builder()
        .max_file_size_bytes(1024u64)
        .supported_types(vec!["pdf".to_string(), "docx".to_string()])
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back: MigrationConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.max_file_size_bytes, 1024);
    assert_eq!(back.supported_types, config.supported_types);
    assert_eq!(back.excluded_folders, config.excluded_folders);
}

#[test]
fn config_deserialization_fills_defaults() {
    let config: MigrationConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.max_file_size_bytes, DEFAULT_MAX_FILE_SIZE_BYTES);
    assert!(config.is_supported("docx"));
    assert!(config.is_excluded("temp"));
    assert_eq!(config.threads, 0);
}

#[test]
fn record_round_trips_through_serde() {
    let record = FileRecord::new("/docs/acta.xlsx", 4096, "xlsx");
    let json = serde_json::to_string(&record).unwrap();
    let back: FileRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn outcome_diagnostics_survive_serde() {
    let outcome = ScanOutcome::new(
        vec![FileRecord::new("/a.pdf", 1, "pdf")],
        vec![ScanWarning::new(
            "/locked.docx",
            "permission denied",
            WarningKind::Unreadable,
        )],
        true,
    );

    let json = serde_json::to_string(&outcome).unwrap();
    let back: ScanOutcome = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), 1);
    assert_eq!(back.skipped_count(), 1);
    assert!(back.cancelled);
}

#[test]
fn plan_owns_its_records() {
    let records = vec![
        FileRecord::new("/a.docx", 1, "docx"),
        FileRecord::new("/b.pdf", 2, "pdf"),
    ];
    let plan = MigrationPlan::new(records.clone());
    assert_eq!(plan.records(), records.as_slice());
}
