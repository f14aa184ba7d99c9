pub mod format;
pub mod interactive;

pub use format::parse_graph;
pub use interactive::InteractiveBuilder;
