//! Property-based tests using proptest.
//!
//! These tests verify cross-variant equivalence and parsing invariants
//! over randomly generated graphs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use senda::prelude::*;
use senda::random::random_matrix_text_with;

// Strategy: valid (size, weights) pairs — zero diagonal, off-diagonal
// cells either 0 (no edge) or a weight in [1, 1000]
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<i32>)> {
    (1usize..=10)
        .prop_flat_map(|size| {
            let cell = prop_oneof![
                3 => Just(0i32),
                7 => 1i32..=1000,
            ];
            (Just(size), proptest::collection::vec(cell, size * size))
        })
        .prop_map(|(size, mut weights)| {
            for i in 0..size {
                weights[i * size + i] = 0;
            }
            (size, weights)
        })
}

fn matrix_text(size: usize, weights: &[i32]) -> String {
    (0..size)
        .map(|i| {
            weights[i * size..(i + 1) * size]
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse(size: usize, weights: &[i32]) -> Graph {
    parse_matrix(&matrix_text(size, weights), &size.to_string()).expect("strategy output is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Core equivalence: both variants return identical distance, path,
    // and edges for every (start, end) pair
    #[test]
    fn variants_agree_on_every_query((size, weights) in graph_strategy()) {
        let g = parse(size, &weights);
        for start in 0..size {
            for end in 0..size {
                let a = find_path(&g, start, end, AlgorithmKind::FloydWarshall)
                    .expect("valid query");
                let b = find_path(&g, start, end, AlgorithmKind::Dantzig)
                    .expect("valid query");
                prop_assert_eq!(a.distance, b.distance, "({}, {})", start, end);
                prop_assert_eq!(&a.path, &b.path, "({}, {})", start, end);
                prop_assert_eq!(&a.edges, &b.edges, "({}, {})", start, end);
            }
        }
    }

    #[test]
    fn parse_preserves_weights((size, weights) in graph_strategy()) {
        let g = parse(size, &weights);
        prop_assert_eq!(g.size(), size);
        prop_assert_eq!(g.weights(), weights.as_slice());
    }

    #[test]
    fn diagonal_is_always_zero((size, weights) in graph_strategy()) {
        let g = parse(size, &weights);
        for i in 0..size {
            prop_assert_eq!(g.weight(i, i), 0);
        }
    }

    #[test]
    fn trivial_query_ignores_graph_contents((size, weights) in graph_strategy()) {
        let g = parse(size, &weights);
        for kind in AlgorithmKind::ALL {
            for v in 0..size {
                let result = find_path(&g, v, v, kind).expect("valid query");
                prop_assert_eq!(result.distance, 0);
                prop_assert_eq!(&result.path, &vec![v]);
                prop_assert!(result.edges.is_empty());
                prop_assert_eq!(result.operations_count, 1);
            }
        }
    }

    // A reachable result is internally consistent: path endpoints match
    // the query, edges are the consecutive path pairs, every edge exists
    // in the graph, and the distance is the sum of edge weights
    #[test]
    fn reachable_results_are_consistent((size, weights) in graph_strategy()) {
        let g = parse(size, &weights);
        for start in 0..size {
            for end in 0..size {
                if start == end {
                    continue;
                }
                let result = find_path(&g, start, end, AlgorithmKind::FloydWarshall)
                    .expect("valid query");
                if !result.is_reachable() {
                    prop_assert!(result.path.is_empty());
                    prop_assert!(result.edges.is_empty());
                    prop_assert_eq!(result.operations_count, size * size + size * size * size);
                    continue;
                }
                prop_assert_eq!(result.path[0], start);
                prop_assert_eq!(*result.path.last().expect("non-empty"), end);
                prop_assert_eq!(result.edges.len(), result.path.len() - 1);

                let mut total = 0i64;
                for (edge, pair) in result.edges.iter().zip(result.path.windows(2)) {
                    prop_assert_eq!(*edge, (pair[0], pair[1]));
                    let w = g.weight(edge.0, edge.1);
                    prop_assert!(w > 0, "path uses missing edge ({}, {})", edge.0, edge.1);
                    total += i64::from(w);
                }
                prop_assert_eq!(i64::from(result.distance), total);

                let hops = result.edges.len();
                prop_assert_eq!(
                    result.operations_count,
                    size * size + size * size * size + hops
                );
            }
        }
    }

    #[test]
    fn empty_template_round_trips(size in 1usize..=10) {
        let token = size.to_string();
        let text = empty_matrix_template(&token).expect("valid size");
        let g = parse_matrix(&text, &token).expect("template parses");
        prop_assert!(g.weights().iter().all(|&w| w == 0));
    }

    #[test]
    fn random_matrix_round_trips(seed in any::<u64>(), size in 1usize..=10) {
        let token = size.to_string();
        let mut rng = StdRng::seed_from_u64(seed);
        let text = random_matrix_text_with(&mut rng, &token).expect("valid size");
        let g = parse_matrix(&text, &token).expect("generated text parses");
        prop_assert_eq!(g.size(), size);
    }
}
