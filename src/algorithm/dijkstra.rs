use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm in its dense O(V²) formulation
///
/// Instead of a priority queue, each round performs one linear scan over the
/// unvisited vertices that both relaxes the current vertex's outgoing edges
/// and picks the next vertex. With an adjacency matrix the scan is free
/// relative to the cost of reading the row, so the queue would buy nothing.
///
/// Edge weights must be non-negative; [`crate::DenseGraph`] rejects negative
/// weights at construction, and results over a graph that slipped one through
/// some other `Graph` impl are unspecified.
#[derive(Debug, Default)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    /// Creates a new solver instance
    pub fn new() -> Self {
        DenseDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DenseDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DenseDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(Error::EmptyGraph);
        }
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());
        let mut current = source;

        // At most n rounds; each round permanently settles one vertex.
        loop {
            visited[current] = true;
            let Some(dist_current) = distances[current] else {
                break;
            };
            log::trace!("settled vertex {} at distance {:?}", current, dist_current);

            // Fused pass: relax every unvisited destination, and track the
            // unvisited vertex with the smallest tentative distance. The
            // strict `<` comparisons mean ties keep the lowest-index vertex
            // encountered first, which fixes which of several equal-cost
            // paths the predecessor chain reports.
            let mut next: Option<(usize, W)> = None;
            for dest in 0..n {
                if visited[dest] {
                    continue;
                }

                if let Some(weight) = graph.edge_weight(current, dest) {
                    let candidate = dist_current + weight;
                    let improves = match distances[dest] {
                        None => true,
                        Some(best) => candidate < best,
                    };
                    if improves {
                        distances[dest] = Some(candidate);
                        predecessors[dest] = Some(current);
                    }
                }

                if let Some(tentative) = distances[dest] {
                    let closer = match next {
                        None => true,
                        Some((_, min)) => tentative < min,
                    };
                    if closer {
                        next = Some((dest, tentative));
                    }
                }
            }

            // No unvisited vertex has a finite distance: everything left is
            // unreachable from the source.
            match next {
                Some((vertex, _)) => current = vertex,
                None => break,
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            visited,
            source,
        })
    }
}
