//! Random demo-matrix generation.
//!
//! Produces adjacency-weight matrix text that always parses back through
//! [`parse_matrix`](crate::graph::parse_matrix): zero diagonal, and each
//! off-diagonal edge present with probability [`EDGE_PROBABILITY`] carrying
//! a small random weight. Meant for seeding demos and tests, not for
//! realistic graph distributions.

use rand::Rng;

use crate::error::Result;
use crate::graph::{parse_size, MIN_EDGE_WEIGHT};

/// Probability that any off-diagonal edge exists.
pub const EDGE_PROBABILITY: f64 = 0.7;
/// Largest weight assigned to a generated edge. Deliberately small so demo
/// paths stay easy to verify by hand.
pub const MAX_RANDOM_WEIGHT: i32 = 10;

/// Generate random matrix text for a declared size token.
///
/// # Errors
/// Same size-token errors as [`parse_matrix`](crate::graph::parse_matrix):
/// `MalformedInput` for a non-integer token, `OutOfRange` outside `[1, 10]`.
///
/// # Examples
/// ```
/// use senda::graph::parse_matrix;
/// use senda::random::random_matrix_text;
///
/// let text = random_matrix_text("4").unwrap();
/// let g = parse_matrix(&text, "4").unwrap();
/// assert_eq!(g.size(), 4);
/// ```
pub fn random_matrix_text(size_token: &str) -> Result<String> {
    random_matrix_text_with(&mut rand::thread_rng(), size_token)
}

/// [`random_matrix_text`] with a caller-supplied generator, for
/// deterministic output under a seeded rng.
pub fn random_matrix_text_with<R: Rng>(rng: &mut R, size_token: &str) -> Result<String> {
    let size = parse_size(size_token)?;

    let mut rows = Vec::with_capacity(size);
    for i in 0..size {
        let mut row = Vec::with_capacity(size);
        for j in 0..size {
            let weight = if i == j {
                0
            } else if rng.gen_bool(EDGE_PROBABILITY) {
                rng.gen_range(MIN_EDGE_WEIGHT..=MAX_RANDOM_WEIGHT)
            } else {
                0
            };
            row.push(weight.to_string());
        }
        rows.push(row.join(" "));
    }

    Ok(rows.join("\n"))
}
