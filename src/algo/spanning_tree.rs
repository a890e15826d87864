//! Find a [minimum spanning tree] of an undirected weighted graph.
//!
//! Two algorithms are available. [Prim's](prim) works on the
//! [`AdjacencyMatrix`](crate::core::AdjacencyMatrix), [Kruskal's](kruskal)
//! works directly on the node and edge lists. If the graph is disconnected,
//! both return a spanning forest which is reported as
//! [incomplete](SpanningTree::is_complete).
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use spanpath::{algo::SpanningTree, core::{Edge, Node}};
//!
//! let nodes = ["A", "B", "C", "D"].map(Node::new);
//! let edges = [
//!     Edge::new("A", "B", 4u32),
//!     Edge::new("B", "C", 1),
//!     Edge::new("C", "D", 2),
//!     Edge::new("A", "D", 3),
//!     Edge::new("A", "C", 5),
//! ];
//!
//! let tree = SpanningTree::on(&nodes, &edges).run().unwrap();
//!
//! assert!(tree.is_complete());
//! assert_eq!(tree.total_weight(), Some(6));
//! ```

use std::slice;

use thiserror::Error;

use crate::core::{model::Edge, weight::Weight};

mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningTreeBuilder;
pub use kruskal::kruskal;
pub use prim::prim;

/// Edges selected by a minimum spanning tree algorithm, in the order of
/// selection.
///
/// If the graph is not connected, the edges form a spanning forest with fewer
/// than `N - 1` edges. Use [`is_complete`](SpanningTree::is_complete) or
/// [`complete`](SpanningTree::complete) to distinguish the two cases.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
    node_count: usize,
}

impl<W> SpanningTree<W> {
    pub(crate) fn new(edges: Vec<Edge<W>>, node_count: usize) -> Self {
        Self { edges, node_count }
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of nodes of the graph the tree spans.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges of a spanning tree of a connected graph with the same
    /// number of nodes.
    pub fn expected_len(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Returns true if the edges span all nodes.
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.expected_len()
    }

    /// Returns the edges if they form a full spanning tree, otherwise an error
    /// carrying the partial forest.
    pub fn complete(self) -> Result<Vec<Edge<W>>, DisconnectedError<W>> {
        if self.is_complete() {
            Ok(self.edges)
        } else {
            let expected = self.expected_len();
            Err(DisconnectedError {
                forest: self.edges,
                expected,
            })
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Edge<W>> {
        self.edges.iter()
    }
}

impl<W: Weight> SpanningTree<W> {
    /// Sum of the edge weights, or `None` if it does not fit into `W`.
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |total, edge| total.checked_add(&edge.weight))
    }
}

impl<'a, W> IntoIterator for &'a SpanningTree<W> {
    type Item = &'a Edge<W>;
    type IntoIter = slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Algorithm for [`SpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    ///
    /// Grows a single tree from node 0 by repeatedly adding the cheapest edge
    /// leaving the tree. Works on the dense matrix, so it is a good fit for
    /// dense graphs.
    Prim,

    /// [Kruskal's
    /// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm)
    ///
    /// Adds edges in ascending order of weight unless they close a cycle.
    /// Works on the edge list, so it is a good fit for sparse graphs.
    Kruskal,
}

/// The graph is not connected, so no spanning tree exists.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("graph is disconnected, spanning forest has {} of {expected} edges", .forest.len())]
pub struct DisconnectedError<W> {
    /// Minimum spanning forest found by the algorithm.
    pub forest: Vec<Edge<W>>,
    /// Number of edges of a full spanning tree.
    pub expected: usize,
}
