//! End-to-end tests for seed script generation against the built-in
//! `stores` schema.

use seed_core::{GeneratorConfig, SeedSchema};
use seed_script::{CommonSeedArgs, GenerateArgs, ScriptPopulator};
use std::collections::HashSet;

const ROW_COUNT: u64 = 5000;

/// Lines in the stores create block: `create`, 5 attribute names, 5 type
/// codes, 3 string widths, `finish`, `open`.
const CREATE_BLOCK_LINES: usize = 16;

fn builtin_schema() -> SeedSchema {
    SeedSchema::from_yaml(dbseed::DEFAULT_SCHEMA_YAML).unwrap()
}

fn pool(schema: &SeedSchema, field: &str) -> HashSet<String> {
    let spec = schema
        .get_table("stores")
        .unwrap()
        .get_field(field)
        .unwrap();
    match &spec.generator {
        GeneratorConfig::OneOf { values } => values
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect(),
        other => panic!("expected one_of for {field}, got {other:?}"),
    }
}

fn generate_script(seed: u64, count: u64) -> String {
    let mut populator = ScriptPopulator::new(builtin_schema(), seed);
    let mut buf = Vec::new();
    populator.write_script("stores", &mut buf, count).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_script_structure() {
    let script = generate_script(42, ROW_COUNT);
    let lines: Vec<&str> = script.lines().collect();

    // One create block, N insert lines, one exit, in that order
    assert_eq!(lines.len(), CREATE_BLOCK_LINES + ROW_COUNT as usize + 1);

    let expected_block = [
        "create stores.dat",
        "store_id",
        "1",
        "first_name",
        "3",
        "15",
        "last_name",
        "3",
        "15",
        "location",
        "3",
        "32",
        "profit",
        "2",
        "finish",
        "open stores.dat",
    ];
    assert_eq!(&lines[..CREATE_BLOCK_LINES], &expected_block);

    for line in &lines[CREATE_BLOCK_LINES..lines.len() - 1] {
        assert!(line.starts_with("stores insert "), "unexpected line: {line}");
    }
    assert_eq!(*lines.last().unwrap(), "exit");

    // The create block appears exactly once
    assert_eq!(script.matches("create stores.dat").count(), 1);
    assert_eq!(script.matches("finish").count(), 1);
}

#[test]
fn test_insert_lines_respect_pools_and_ranges() {
    let schema = builtin_schema();
    let first_names = pool(&schema, "first_name");
    let last_names = pool(&schema, "last_name");
    let locations = pool(&schema, "location");

    let script = generate_script(42, ROW_COUNT);
    let inserts: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("stores insert "))
        .collect();
    assert_eq!(inserts.len(), ROW_COUNT as usize);

    for (i, line) in inserts.iter().enumerate() {
        let payload = line.strip_prefix("stores insert ").unwrap();
        let tokens: Vec<&str> = payload.split(',').collect();
        assert_eq!(tokens.len(), 5, "bad insert line: {line}");

        // Ids are the exact sequence 0..N with no gaps or reordering
        let id: u64 = tokens[0].parse().unwrap();
        assert_eq!(id, i as u64);

        assert!(first_names.contains(tokens[1]), "unknown first name: {}", tokens[1]);
        assert!(last_names.contains(tokens[2]), "unknown last name: {}", tokens[2]);
        assert!(locations.contains(tokens[3]), "unknown location: {}", tokens[3]);

        let profit: f64 = tokens[4].parse().unwrap();
        assert!(
            (-10_000.0..=500_000.0).contains(&profit),
            "profit out of range: {profit}"
        );
    }
}

#[test]
fn test_first_insert_line_shape() {
    let script = generate_script(42, 1);
    let line = script
        .lines()
        .find(|l| l.starts_with("stores insert "))
        .unwrap();

    assert!(line.starts_with("stores insert 0,"));
}

#[test]
fn test_determinism() {
    // Same seed: byte-identical scripts
    assert_eq!(generate_script(42, 200), generate_script(42, 200));

    // Different seeds: different scripts
    assert_ne!(generate_script(42, 200), generate_script(7, 200));
}

#[test]
fn test_run_generate_writes_files_and_metrics() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    let metrics_path = temp_dir.path().join("metrics.json");

    let args = GenerateArgs {
        output_dir: Some(output_dir.clone()),
        emit_metrics: Some(metrics_path.clone()),
        common: CommonSeedArgs {
            schema: None,
            row_count: 100,
            seed: Some(7),
            tables: vec![],
            dry_run: false,
        },
    };

    dbseed::run_generate(args).unwrap();

    let script_path = output_dir.join("stores.dbms");
    let script = std::fs::read_to_string(&script_path).unwrap();
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines.len(), CREATE_BLOCK_LINES + 100 + 1);
    assert_eq!(*lines.last().unwrap(), "exit");

    let reports: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&metrics_path).unwrap()).unwrap();
    let report = &reports.as_array().unwrap()[0];
    assert_eq!(report["table"], "stores");
    assert_eq!(report["rows_written"], 100);
    assert_eq!(
        report["bytes_written"].as_u64().unwrap(),
        std::fs::metadata(&script_path).unwrap().len()
    );
}

#[test]
fn test_run_generate_dry_run_writes_nothing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");

    let args = GenerateArgs {
        output_dir: Some(output_dir.clone()),
        emit_metrics: None,
        common: CommonSeedArgs {
            schema: None,
            row_count: 100,
            seed: None,
            tables: vec![],
            dry_run: true,
        },
    };

    dbseed::run_generate(args).unwrap();
    assert!(!output_dir.exists());
}

#[test]
fn test_run_schema_check_builtin() {
    dbseed::run_schema_check(None).unwrap();
}

#[test]
fn test_run_generate_unknown_table_fails() {
    let args = GenerateArgs {
        output_dir: None,
        emit_metrics: None,
        common: CommonSeedArgs {
            schema: None,
            row_count: 1,
            seed: None,
            tables: vec!["missing".to_string()],
            dry_run: true,
        },
    };

    assert!(dbseed::run_generate(args).is_err());
}
