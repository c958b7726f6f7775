//! A* route search over a graph of named locations.
//!
//! ```
//! use route_planner::{AStar, Graph};
//!
//! let mut builder = Graph::builder();
//! builder.add_node("A", 0.0, 0.0).unwrap();
//! builder.add_node("B", 10.0, 0.0).unwrap();
//! builder.add_node("C", 10.0, 10.0).unwrap();
//! builder.add_edge("A", "B", 10.0).unwrap();
//! builder.add_edge("B", "C", 10.0).unwrap();
//! builder.add_edge("A", "C", 15.0).unwrap();
//! let graph = builder.build();
//!
//! let route = AStar{}.search(&graph, "A", "C").unwrap().unwrap();
//! assert_eq!(route.path, vec!["A", "C"]);
//! assert_eq!(route.cost, 15.0);
//! ```

mod collections;
pub mod datasets;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use errors::{GraphError, PathPlannerError};
pub use graph::{Graph, GraphBuilder, Node};
pub use graph_algos::{AStar, Route};
