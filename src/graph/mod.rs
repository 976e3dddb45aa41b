pub mod builder;
pub mod generators;
pub mod traits;
pub mod transit;

pub use builder::GraphBuilder;
pub use traits::{Graph, Weight};
pub use transit::TransitGraph;
