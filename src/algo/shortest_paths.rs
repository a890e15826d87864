//! Find [single source shortest paths] and their distances in a graph given
//! by its [`AdjacencyMatrix`](crate::core::AdjacencyMatrix).
//!
//! Edge weights must not be negative. If the weight type is
//! [unsigned](crate::core::Weight::is_unsigned), this is guaranteed at compile
//! time and the check is skipped.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use spanpath::{
//!     algo::dijkstra,
//!     core::{build_adjacency_matrix, Edge, Node},
//! };
//!
//! let nodes = ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg"].map(Node::new);
//! let edges = [
//!     Edge::new("Prague", "Bratislava", 328u32),
//!     Edge::new("Prague", "Nuremberg", 297),
//!     Edge::new("Prague", "Vienna", 293),
//!     Edge::new("Bratislava", "Vienna", 79),
//!     Edge::new("Nuremberg", "Munich", 170),
//!     Edge::new("Vienna", "Munich", 402),
//! ];
//!
//! let matrix = build_adjacency_matrix(&nodes, &edges).unwrap();
//! let shortest_paths = dijkstra(&matrix, "Prague").unwrap();
//!
//! let munich = matrix.index_of("Munich").unwrap();
//! assert_eq!(shortest_paths.dist(munich), Some(&467));
//!
//! let path = shortest_paths
//!     .path_to(munich)
//!     .unwrap()
//!     .into_iter()
//!     .map(|v| matrix.node(v).name.as_str())
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//! assert_eq!(path, "Prague - Nuremberg - Munich");
//! ```

use thiserror::Error;

use crate::core::model::Node;

mod dijkstra;

pub use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source node.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: Option<usize>,
    nodes: Vec<Node>,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W> {
    fn empty() -> Self {
        Self {
            source: None,
            nodes: Vec::new(),
            dist: Vec::new(),
            pred: Vec::new(),
        }
    }

    /// Index of the node where the search was started, or `None` if the graph
    /// was empty.
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the shortest distance between the source node and the given
    /// node, or `None` if the node is unreachable.
    pub fn dist(&self, to: usize) -> Option<&W> {
        self.dist.get(to).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, to: usize) -> bool {
        self.dist(to).is_some()
    }

    /// Returns an iterator over nodes on the path between the given node and
    /// the source node, in this order, excluding the given node itself.
    ///
    /// The iterator is empty if the node is the source or is unreachable.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
            remaining: self.pred.len(),
        }
    }

    /// Returns the nodes on the shortest path from the source node to the
    /// given node, both inclusive, or `None` if the node is unreachable.
    pub fn path_to(&self, to: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(to) {
            return None;
        }

        let mut path = vec![to];
        path.extend(self.reconstruct(to));

        if path.last().copied() != self.source {
            log::warn!("predecessor chain of #{to} does not lead to the source");
            return None;
        }

        path.reverse();
        Some(path)
    }
}

impl<W: Clone> ShortestPaths<W> {
    /// One record for every node except the source, in the node order.
    pub fn routes(&self) -> Vec<Route<W>> {
        let Some(source) = self.source else {
            return Vec::new();
        };

        let from = &self.nodes[source].name;

        self.nodes
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != source)
            .map(|(index, node)| Route {
                from: from.clone(),
                to: node.name.clone(),
                distance: self.dist(index).cloned(),
                path: self.path_to(index).unwrap_or_default(),
            })
            .collect()
    }
}

/// Shortest path from the source to a target node.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W> {
    pub from: String,
    pub to: String,
    /// Total weight of the path, `None` if the target is unreachable.
    pub distance: Option<W>,
    /// Node indices from the source to the target, both inclusive. Empty if
    /// the target is unreachable.
    pub path: Vec<usize>,
}

impl<W> Route<W> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The start node is not in the graph.
    #[error("start node `{0}` does not exist")]
    UnknownStart(String),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A path distance is out of range of the weight type.
    #[error("path distance overflows the weight type")]
    Overflow,
}

/// Iterator over the nodes on the path from a node to the source node.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: usize,
    pred: &'a [Option<usize>],
    // The walk never takes more steps than there are nodes, even if the
    // predecessor links were cyclic.
    remaining: usize,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.curr = self.pred.get(self.curr).copied().flatten()?;
        Some(self.curr)
    }
}
