//! Minimum spanning trees and single-source shortest paths over small graphs
//! given as a node list and an edge list.
//!
//! Edges are always treated as undirected. Nodes are addressed by their
//! position in the node list and referenced from edges by name.
//!
//! # Examples
//!
//! ```
//! use spanpath::{
//!     algo::{dijkstra, kruskal, prim},
//!     core::{build_adjacency_matrix, Edge, Node},
//! };
//!
//! let nodes = vec![Node::new("A"), Node::new("B"), Node::new("C")];
//! let edges = vec![
//!     Edge::new("A", "B", 2.0),
//!     Edge::new("B", "C", 3.0),
//!     Edge::new("A", "C", 10.0),
//! ];
//!
//! let matrix = build_adjacency_matrix(&nodes, &edges).unwrap();
//!
//! let tree = prim(&matrix);
//! assert!(tree.is_complete());
//! assert_eq!(tree.total_weight(), Some(5.0));
//!
//! let forest = kruskal(&nodes, &edges).unwrap();
//! assert_eq!(forest.total_weight(), Some(5.0));
//!
//! let paths = dijkstra(&matrix, "A").unwrap();
//! assert_eq!(paths.dist(2), Some(&5.0));
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;

pub mod prelude {
    pub use crate::{
        algo::{dijkstra, kruskal, prim, Route, ShortestPaths, SpanningTree},
        core::{build_adjacency_matrix, AdjacencyMatrix, Edge, Node, Weight},
    };
}
