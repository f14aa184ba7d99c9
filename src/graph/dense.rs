use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, ToPrimitive, Zero};
use std::fmt::{self, Debug, Display};

/// A dense graph storing a weight-or-absent entry for every ordered vertex pair
///
/// The matrix is row-major with `size * size` entries; `None` marks an absent
/// edge. Undirected graphs are represented by mirroring each weight across the
/// diagonal (see [`DenseGraph::set_edge_symmetric`]); the solver itself is
/// direction-agnostic and only ever reads `(current, dest)`.
#[derive(Debug, Clone)]
pub struct DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices, fixed at construction
    size: usize,

    /// Row-major `size × size` matrix of edge weights
    matrix: Vec<Option<W>>,
}

impl<W> DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with the given number of vertices and no edges
    pub fn new(size: usize) -> Self {
        DenseGraph {
            size,
            matrix: vec![None; size * size],
        }
    }

    /// Returns the number of vertices
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stores `weight` at `(from, to)`
    ///
    /// Fails on out-of-range indices or a negative weight. Setting the same
    /// pair twice overwrites the previous weight; there is no removal, graphs
    /// are write-then-read.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.size || to >= self.size {
            return Err(Error::IndexOutOfRange(from, to, self.size));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        self.matrix[from * self.size + to] = Some(weight);
        Ok(())
    }

    /// Stores `weight` at both `(a, b)` and `(b, a)`
    ///
    /// Undirected construction helper; keeps the matrix symmetric as long as
    /// every insertion goes through it.
    pub fn set_edge_symmetric(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)
    }

    /// Returns the entry at `(r, c)`, distinguishing absence from bad indices
    ///
    /// `Ok(None)` means the pair is in range but carries no edge;
    /// `Err(IndexOutOfRange)` means the query itself was invalid. Callers must
    /// not conflate the two.
    pub fn weight_at(&self, r: usize, c: usize) -> Result<Option<W>> {
        if r >= self.size || c >= self.size {
            return Err(Error::IndexOutOfRange(r, c, self.size));
        }
        Ok(self.matrix[r * self.size + c])
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|entry| entry.is_some()).count()
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.size
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.matrix[from * self.size + to]
    }
}

/// Renders the matrix as a table, `X` for absent edges
///
/// Row index is the source vertex, column index the destination.
impl<W> Display for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CELL_WIDTH: usize = 3;

        writeln!(f, "a=from b=to")?;
        write!(f, "a\\b")?;
        for c in 0..self.size {
            write!(f, "{:>width$}", c, width = CELL_WIDTH)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:>width$}", r, width = CELL_WIDTH)?;
            for c in 0..self.size {
                match self.matrix[r * self.size + c] {
                    Some(w) => {
                        // Shed fractional digits until the cell fits
                        let mut cell = format!("{}", w);
                        if cell.len() > CELL_WIDTH {
                            cell = format!("{:.1}", w);
                        }
                        if cell.len() > CELL_WIDTH {
                            cell = format!("{:.0}", w);
                        }
                        write!(f, "{:>width$}", cell, width = CELL_WIDTH)?;
                    }
                    None => write!(f, "{:>width$}", "X", width = CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
