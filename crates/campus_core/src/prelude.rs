//! Re-exports of the most commonly used items in `campus_core`.
pub use crate::edge;
pub use crate::error::GraphError;
pub use crate::graph::{EdgeSpec, Graph};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path;
pub use crate::search::shortest_path::{PathResult, ShortestPath};
pub use crate::util::campus_map::{campus_edges, campus_graph};
