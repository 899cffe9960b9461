use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use trace_decompress::commands::{execute_decompress, validate_args, DecompressArgs};

#[test]
fn test_validate_args_valid() {
    let args = DecompressArgs {
        input: PathBuf::from("traces/rx-burst.trace"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_input() {
    let args = DecompressArgs {
        input: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_default_output_dir() {
    assert_eq!(DecompressArgs::default().output_dir, PathBuf::from("output"));
}

#[test]
fn test_execute_writes_processed_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rx-burst.trace");
    fs::write(&input, "100 0\n5 12\n300 3\n").unwrap();

    let args = DecompressArgs {
        input,
        output_dir: dir.path().join("output"),
        templates: None,
    };

    let written = execute_decompress(args).unwrap();

    assert_eq!(written, dir.path().join("output/processed-rx-burst.trace"));
    assert_eq!(
        fs::read_to_string(&written).unwrap(),
        "EOD\n\
         HIRQENTRY 0 1 240 1 0 0 interruptfifop_fired s\n\
         HIRQEXIT 0 1 720 1 0 0 interruptfifop_fired s\n\
         H\t\t\n"
    );
}

#[test]
fn test_execute_with_mapping_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("custom.trace");
    let mapping = dir.path().join("mapping.json");
    fs::write(&input, "60 2\n").unwrap();
    fs::write(
        &mapping,
        r#"{"traceIdsToCSEMEvents": {"2": {"csemEvents": "SRVENTRY 0 0 [CPU_CYCLES] 0 0 0 task s\n"}}}"#,
    )
    .unwrap();

    let args = DecompressArgs {
        input,
        output_dir: dir.path().to_path_buf(),
        templates: Some(mapping),
    };

    let written = execute_decompress(args).unwrap();

    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "EOD\nSRVENTRY 0 0 80 0 0 0 task s\nH\t\t\n"
    );
}

#[test]
fn test_execute_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");

    let args = DecompressArgs {
        input: dir.path().join("absent.trace"),
        output_dir: output_dir.clone(),
        templates: None,
    };

    let error = execute_decompress(args).unwrap_err();

    assert!(error.to_string().contains("Failed to open trace file"));
    assert!(!output_dir.exists());
}

#[test]
fn test_execute_invalid_mapping_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.trace");
    let mapping = dir.path().join("mapping.json");
    fs::write(&input, "100 0\n").unwrap();
    fs::write(&mapping, "not json").unwrap();

    let args = DecompressArgs {
        input,
        output_dir: dir.path().join("output"),
        templates: Some(mapping),
    };

    assert!(execute_decompress(args).is_err());
}
