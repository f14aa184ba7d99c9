use crate::graph::Graph;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Result of a shortest path algorithm execution
///
/// One label per vertex, produced fresh by each solve and never mutated
/// afterwards. Distances are `None` for unreachable vertices, which is a
/// normal outcome rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Best total weight from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    ///
    /// `None` for the source itself and for unreachable vertices.
    pub predecessors: Vec<Option<usize>>,

    /// Whether each vertex's outgoing edges were fully relaxed
    pub visited: Vec<bool>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to `vertex`, `None` if unreachable or invalid
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Reconstructs the path from the source to `target` by walking
    /// predecessor links
    ///
    /// A pure read of the finished label table. Returns `None` when the
    /// target is out of range or unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.distances.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors[current] {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => return None,
            }
            // A finished label table never chains longer than the vertex count
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
