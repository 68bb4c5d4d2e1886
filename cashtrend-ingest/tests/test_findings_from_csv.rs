use cashtrend_core::{analyze, classify, DayDelta, Scenario};
use cashtrend_ingest::{load_series, LoadError};
use std::io::Write;
use std::path::PathBuf;

fn cash_on_hand_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("cash_on_hand.csv")
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Real-data regression: the sample ledger has flat days, ties, and recoveries.
#[test]
fn test_mixed_report_from_sample_csv() {
    let series = load_series(cash_on_hand_path()).expect("should load cash_on_hand.csv");
    assert_eq!(series.len(), 9);
    assert_eq!(series.as_slice()[0], DayDelta::new(41, 15000));
    assert_eq!(classify(&series), Scenario::Mixed);

    let expected = "\
[CASH DEFICIT] DAY: 42, AMOUNT: SGD37000
[CASH DEFICIT] DAY: 45, AMOUNT: SGD22500
[CASH DEFICIT] DAY: 47, AMOUNT: SGD38000
[CASH DEFICIT] DAY: 49, AMOUNT: SGD38000
[HIGHEST CASH DEFICIT] Day: 47, AMOUNT: SGD38000
[2ND HIGHEST CASH DEFICIT] Day: 49, AMOUNT: SGD38000
[3RD HIGHEST CASH DEFICIT] Day: 42, AMOUNT: SGD37000
";
    assert_eq!(analyze(&series).render(), expected);
}

#[test]
fn test_rerun_is_byte_identical() {
    let first = analyze(&load_series(cash_on_hand_path()).unwrap()).render();
    let second = analyze(&load_series(cash_on_hand_path()).unwrap()).render();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_surplus_file() {
    let file = write_csv("Day,Cash On Hand\n1,100\n2,130\n3,135\n4,165\n");
    let finding = analyze(&load_series(file.path()).unwrap());
    assert_eq!(
        finding.render(),
        "[CASH SURPLUS] CASH ON EACH DAY IS HIGHER THAN THE PREVIOUS DAY\n\
         [HIGHEST CASH SURPLUS] DAY: 2, AMOUNT: SGD30\n"
    );
}

#[test]
fn test_deficit_file() {
    let file = write_csv("Day,Cash On Hand\n1,100\n2,97\n3,90\n4,83\n");
    let finding = analyze(&load_series(file.path()).unwrap());
    assert_eq!(finding.scenario, Scenario::Deficit);
    assert_eq!(finding.lines[1], "[HIGHEST CASH DEFICIT] DAY: 3, AMOUNT: SGD7");
}

#[test]
fn test_single_row_file_is_empty_mixed() {
    let file = write_csv("Day,Cash On Hand\n1,100\n");
    let finding = analyze(&load_series(file.path()).unwrap());
    assert_eq!(finding.scenario, Scenario::Mixed);
    assert!(finding.is_empty());
}

#[test]
fn test_missing_file_is_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("Cash_on_Hand.csv");
    match load_series(&missing) {
        Err(LoadError::SourceNotFound { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_non_integer_file_is_malformed() {
    let file = write_csv("Day,Cash On Hand\n1,100\n2,one hundred\n");
    let err = load_series(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::MalformedInput { line: 3, .. }));
    assert!(err.to_string().contains("not an integer"));
}
