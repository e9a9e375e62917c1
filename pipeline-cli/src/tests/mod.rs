//! Unit tests for pipeline-cli: reading from files, strings and error reporting.

use std::io::Write;

use crate::{check_path, check_reader, check_str, render, CliError};

const VALID: &str = r#"{
    "nodes": [{"id": "a", "type": "input"}, {"id": "b", "type": "output"}],
    "edges": [{"id": "e1", "source": "a", "target": "b"}]
}"#;

/// **Scenario**: A pipeline file on disk is read and validated.
///
/// Given: a temp file holding a valid input → output pipeline  
/// When: check_path is called with its path  
/// Then: the report has 2 nodes, 1 edge, is a DAG and all nodes are healthy
#[test]
fn check_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID.as_bytes()).unwrap();

    let report = check_path(file.path()).expect("report");
    assert_eq!(report.num_nodes, 2);
    assert_eq!(report.num_edges, 1);
    assert!(report.is_dag);
    assert!(report.node_health.iter().all(|h| h.healthy));
}

#[test]
fn check_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    match check_path(&missing) {
        Err(CliError::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn check_str_rejects_invalid_json() {
    assert!(matches!(check_str("{nodes"), Err(CliError::Json(_))));
}

#[test]
fn check_str_rejects_empty_nodes() {
    let err = check_str(r#"{"nodes": [], "edges": []}"#).unwrap_err();
    assert!(matches!(err, CliError::Validation(_)));
    assert_eq!(err.to_string(), "No nodes provided");
}

#[test]
fn check_reader_reports_cycle() {
    let json = r#"{"nodes": [{"id": "a", "type": "llm"}], "edges": [{"source": "a", "target": "a"}]}"#;
    let report = check_reader(json.as_bytes()).expect("report");
    assert!(!report.is_dag);
    assert_eq!(report.node_health[0].reason, "Pipeline contains a cycle");
}

/// **Scenario**: Compact rendering matches the HTTP response shape.
#[test]
fn render_compact_json() {
    let report = check_str(VALID).unwrap();
    let out = render(&report, false).unwrap();
    assert!(out.starts_with(r#"{"num_nodes":2,"num_edges":1,"is_dag":true,"node_health":["#));
    assert!(!out.contains('\n'));
    assert!(render(&report, true).unwrap().contains('\n'));
}
