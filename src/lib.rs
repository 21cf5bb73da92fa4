//! Single-source shortest paths over non-negative weighted graphs using a
//! lazy-deletion Dijkstra.
//!
//! ```
//! use dijkstra_sssp::{compute_sssp, Graph};
//!
//! let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 0.5)]).unwrap();
//! let paths = compute_sssp(&graph, 0).unwrap();
//! assert_eq!(paths.distances(), &[0.0, 2.0, 2.5]);
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! ```
pub mod csv_io;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod reference;

pub use dijkstra::{compute_sssp, dijkstra_all, ShortestPaths};
pub use error::{Result, SsspError};
pub use graph::{Edge, Graph, NodeIndex, Weight};
