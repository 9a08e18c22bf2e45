use hundred_chickens::{
    Combination, LocalStorage, OutputFormat, PuzzleEngine, ResolvedConfig, StdoutSink, TomlConfig,
};
use std::fs;
use tempfile::TempDir;

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[test]
fn test_table_written_to_default_file() {
    let temp_dir = TempDir::new().unwrap();
    let engine = PuzzleEngine::new(ResolvedConfig::default(), storage_in(&temp_dir));

    let summary = engine.run().unwrap();

    assert_eq!(summary.count, 4);
    let path = temp_dir.path().join("solutions.txt");
    assert_eq!(summary.location, path.display().to_string());

    let table = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4 + 4 + 1);
    assert_eq!(lines[1], "=".repeat(35));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "   0           25           75");
    assert_eq!(lines[7], "  12            4           84");
    assert_eq!(lines[8], "=".repeat(35));
}

#[test]
fn test_default_run_goes_to_stdout() {
    let summary = PuzzleEngine::new(ResolvedConfig::default(), StdoutSink)
        .run()
        .unwrap();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.location, "stdout");
}

#[test]
fn test_csv_round_trips_through_reader() {
    let temp_dir = TempDir::new().unwrap();
    let config = ResolvedConfig {
        format: OutputFormat::Csv,
        output_path: Some("reports/chickens.csv".to_string()),
        ..ResolvedConfig::default()
    };

    PuzzleEngine::new(config, storage_in(&temp_dir)).run().unwrap();

    let mut reader = csv::Reader::from_path(temp_dir.path().join("reports/chickens.csv")).unwrap();
    let rows: Vec<Combination> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows, hundred_chickens::solve_classic());
}

#[test]
fn test_json_report_from_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("chickens.toml");
    fs::write(
        &config_path,
        r#"
[puzzle]
check = "exact"

[output]
format = "json"
path = "report.json"
"#,
    )
    .unwrap();

    let resolved = TomlConfig::from_file(&config_path).unwrap().resolve().unwrap();
    let summary = PuzzleEngine::new(resolved, storage_in(&temp_dir)).run().unwrap();
    assert!(summary.location.ends_with("report.json"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["count"], 4);
    assert_eq!(report["params"]["check"], "exact");
    let combinations: Vec<Combination> =
        serde_json::from_value(report["combinations"].clone()).unwrap();
    assert_eq!(combinations, hundred_chickens::solve_classic());
}

#[test]
fn test_invalid_config_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[puzzle]\nbudget = \"lots\"\n").unwrap();

    let err = TomlConfig::from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    assert_eq!(err.exit_code(), 1);
}
