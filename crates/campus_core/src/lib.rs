//! Crate to find shortest walking routes on a campus map.
//!
//! # Basic usage
//! ```
//! use campus_core::prelude::*;
//!
//! // Build the graph once from a static edge list
//! let g = Graph::build(vec![
//!     edge!("Library South", "Langdale Hall", 137),
//!     edge!("Langdale Hall", "Aderhold", 644),
//! ])
//! .expect("Invalid edge list");
//!
//! // Query it as often as needed
//! match shortest_path(&g, "Library South", "Aderhold").expect("Unknown building") {
//!     PathResult::Found(sp) => assert_eq!(sp.weight, 781),
//!     PathResult::NotFound => unreachable!(),
//! }
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
