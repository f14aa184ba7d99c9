use crate::graph::dense::DenseGraph;
use crate::Result;
use rand::prelude::*;

/// Generates a random undirected dense graph
///
/// Each unordered pair `{a, b}` with `a < b` receives an edge with probability
/// `edge_probability`; weights are whole numbers drawn from `1..=max_weight`
/// and mirrored across the diagonal.
pub fn generate_random_undirected(
    size: usize,
    edge_probability: f64,
    max_weight: u32,
) -> Result<DenseGraph<f64>> {
    assert!(max_weight > 0, "max_weight must be positive");
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    let mut graph = DenseGraph::new(size);
    let mut rng = rand::thread_rng();

    for a in 0..size {
        for b in (a + 1)..size {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1..=max_weight) as f64;
                graph.set_edge_symmetric(a, b, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed dense graph
///
/// Every ordered pair with distinct endpoints is considered independently, so
/// `(a, b)` and `(b, a)` may end up with different weights or only one present.
pub fn generate_random_directed(
    size: usize,
    edge_probability: f64,
    max_weight: u32,
) -> Result<DenseGraph<f64>> {
    assert!(max_weight > 0, "max_weight must be positive");
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    let mut graph = DenseGraph::new(size);
    let mut rng = rand::thread_rng();

    for from in 0..size {
        for to in 0..size {
            if from != to && rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1..=max_weight) as f64;
                graph.set_edge(from, to, weight)?;
            }
        }
    }

    Ok(graph)
}
