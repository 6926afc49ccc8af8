//! Integration tests for the Senda shortest-path engine.
//!
//! These tests verify end-to-end workflows combining parsing, endpoint
//! validation, path finding, and report export.

use senda::prelude::*;
use senda::SendaError;

const CHAIN: &str = "0 1 0\n0 0 1\n0 0 0";

#[test]
fn full_workflow_from_user_tokens_to_report() {
    // Everything a caller supplies arrives as text tokens.
    let graph = parse_matrix(CHAIN, "3").unwrap();
    let (start, end) = validate_endpoints("1", "3", "3").unwrap();
    let result = find_path_by_name(&graph, start, end, "floyd-warshall").unwrap();

    assert_eq!(result.distance, 2);
    assert_eq!(result.path, vec![0, 1, 2]);
    assert_eq!(result.edges, vec![(0, 1), (1, 2)]);
    assert_eq!(result.operations_count, 38);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solution.txt");
    save_report(&path, CHAIN, &result, AlgorithmKind::FloydWarshall, start, end).unwrap();

    let report = std::fs::read_to_string(&path).unwrap();
    assert!(report.contains("Path search from vertex 1 to vertex 3."));
    assert!(report.contains("Path vertex sequence: 1 -> 2 -> 3"));
}

#[test]
fn reverse_query_on_chain_is_unreachable_under_both_variants() {
    let graph = parse_matrix(CHAIN, "3").unwrap();
    for kind in AlgorithmKind::ALL {
        let result = find_path(&graph, 2, 0, kind).unwrap();
        assert_eq!(result.distance, UNREACHABLE);
        assert!(result.path.is_empty());
        assert!(result.edges.is_empty());
        assert_eq!(result.operations_count, 36);
    }
}

#[test]
fn template_edit_then_query() {
    // Create an empty template, "fill in" one edge, and query it.
    let template = empty_matrix_template("2").unwrap();
    assert_eq!(template, "0 0\n0 0");

    let edited = template.replacen("0 0", "0 7", 1);
    let graph = parse_matrix(&edited, "2").unwrap();
    let result = find_path(&graph, 0, 1, AlgorithmKind::Dantzig).unwrap();
    assert_eq!(result.distance, 7);
    assert_eq!(result.path, vec![0, 1]);
}

#[test]
fn single_vertex_graph_boundary() {
    let graph = parse_matrix("0", "1").unwrap();
    let result = find_path(&graph, 0, 0, AlgorithmKind::FloydWarshall).unwrap();
    assert_eq!(result.distance, 0);
    assert_eq!(result.path, vec![0]);
    assert!(result.edges.is_empty());
    assert_eq!(result.operations_count, 1);
}

#[test]
fn random_demo_matrix_is_queryable() {
    let text = random_matrix_text("6").unwrap();
    let graph = parse_matrix(&text, "6").unwrap();
    // Whatever the draw, every query must complete without error.
    for start in 0..6 {
        for end in 0..6 {
            let a = find_path(&graph, start, end, AlgorithmKind::FloydWarshall).unwrap();
            let b = find_path(&graph, start, end, AlgorithmKind::Dantzig).unwrap();
            assert_eq!(a.distance, b.distance);
            assert_eq!(a.path, b.path);
        }
    }
}

#[test]
fn diagonal_violation_is_reported_before_later_cells() {
    // Row-major scan: the bad diagonal at [1, 1] masks the bad weight at [2, 2].
    let err = parse_matrix("5 1\n0 2000", "2").unwrap_err();
    match err {
        SendaError::InvalidWeight { row, col, found, .. } => {
            assert_eq!((row, col, found), (1, 1, 5));
        }
        other => panic!("expected InvalidWeight, got {other:?}"),
    }
}

#[test]
fn stale_results_are_not_tied_to_a_replaced_graph() {
    // Parsing replaces the graph wholesale; a prior result stays
    // self-contained and readable.
    let first = parse_matrix(CHAIN, "3").unwrap();
    let result = find_path(&first, 0, 2, AlgorithmKind::FloydWarshall).unwrap();

    let _second = parse_matrix("0 9\n0 0", "2").unwrap();
    assert_eq!(result.path, vec![0, 1, 2]);
}
