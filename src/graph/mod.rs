pub mod dense;
pub mod generators;
pub mod traits;

pub use dense::DenseGraph;
pub use traits::Graph;
