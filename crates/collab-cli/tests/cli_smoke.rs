use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const EDGES: &str = "\
year,author_pid,coauthor_pid
2000,hub,a
2000,hub,b
2001,hub,c
2001,a,b
2003,c,d
";

const ATTRIBUTES: &str = r#"{
  "hub": {"country": "SG", "institute": "NTU", "expertise": "ml"},
  "a": {"country": "SG", "institute": "NTU", "expertise": "ml"},
  "b": {"country": "US", "institute": "MIT", "expertise": "vision"},
  "c": {"country": "CN", "institute": "PKU", "expertise": "systems"},
  "d": {"country": "SG", "institute": "NUS", "expertise": "ml"}
}"#;

fn fixture(dir: &Path) -> PathBuf {
    fs::write(dir.join("edges.csv"), EDGES).unwrap();
    fs::write(dir.join("attrs.json"), ATTRIBUTES).unwrap();
    let config = dir.join("collab.yaml");
    fs::write(
        &config,
        "dataset:\n  edges: edges.csv\n  attributes: attrs.json\nrandom:\n  nodes: 40\n  edge_probability: 0.2\n",
    )
    .unwrap();
    config
}

fn collab(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collab"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run collab")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "collab failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json stdout")
}

#[test]
fn stats_emits_the_property_table() {
    let dir = TempDir::new().unwrap();
    let config = fixture(dir.path());
    let output = collab(&["stats", "--config", config.to_str().unwrap(), "--json"]);
    let rows = json_stdout(&output);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[1]["property"], "Number of nodes");
    assert_eq!(rows[1]["result"], 5);
    assert_eq!(rows[2]["result"], 5);
    assert_eq!(
        rows[9]["property"],
        "Node with highest degree centrality (max key)"
    );
}

#[test]
fn stats_respects_the_year_window_and_selection() {
    let dir = TempDir::new().unwrap();
    let config = fixture(dir.path());
    let output = collab(&[
        "stats",
        "--config",
        config.to_str().unwrap(),
        "--from",
        "2000",
        "--to",
        "2000",
        "--selection",
        "arg-max",
        "--json",
    ]);
    let rows = json_stdout(&output);
    assert_eq!(rows[1]["result"], 3);
    assert_eq!(rows[9]["property"], "Node with highest degree centrality");
    assert_eq!(rows[9]["result"], "hub");
}

#[test]
fn degree_dist_reports_points_and_trend() {
    let dir = TempDir::new().unwrap();
    let config = fixture(dir.path());
    let output = collab(&["degree-dist", "--config", config.to_str().unwrap(), "--json"]);
    let body = json_stdout(&output);
    let points = body["points"].as_array().unwrap();
    // degrees: hub 3, a 2, b 2, c 2, d 1
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["degree"], 3);
    assert_eq!(points[1]["count"], 3);
    assert!(body["trend"].is_object());
}

#[test]
fn random_mode_needs_no_dataset_files() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("collab.yaml");
    fs::write(
        &config,
        "dataset:\n  edges: missing.csv\nrandom:\n  nodes: 50\n  edge_probability: 0.2\n",
    )
    .unwrap();
    let first = collab(&["degree-dist", "--config", config.to_str().unwrap(), "--mode", "random", "--json"]);
    let second = collab(&["degree-dist", "--config", config.to_str().unwrap(), "--mode", "random", "--json"]);
    assert_eq!(json_stdout(&first), json_stdout(&second));
}

#[test]
fn reconstruct_reports_hash_and_counts() {
    let dir = TempDir::new().unwrap();
    let config = fixture(dir.path());
    let output = collab(&["reconstruct", "--config", config.to_str().unwrap(), "--json"]);
    let body = json_stdout(&output);
    assert_eq!(body["graph_hash"].as_str().unwrap().len(), 64);
    let report = &body["report"];
    assert_eq!(report["edges_before"], 5);
    assert_eq!(report["options"]["reweight"], "literal");
    assert!(report["capping"].is_object());
}

#[test]
fn inverted_range_fails() {
    let dir = TempDir::new().unwrap();
    let config = fixture(dir.path());
    let output = collab(&[
        "stats",
        "--config",
        config.to_str().unwrap(),
        "--from",
        "2005",
        "--to",
        "2000",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("inverted-year-range"));
}
