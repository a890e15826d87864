use std::fmt;

use thiserror::Error;

use crate::{
    algo::{ShortestPaths, SpanningTree},
    common::DisjointSet,
    core::{AdjacencyMatrix, Edge, NameIndex, Node, Weight},
};

/// Node and edge lists as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput<W> {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<W>>,
}

impl<W> GraphInput<W> {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge<W>>) -> Self {
        Self { nodes, edges }
    }

    /// Position of the first node with given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }

    pub fn map_weights<U, F>(self, mut f: F) -> GraphInput<U>
    where
        F: FnMut(W) -> U,
    {
        GraphInput {
            nodes: self.nodes,
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge::new(edge.from, edge.to, f(edge.weight)))
                .collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConsistencyError {
    #[error("edge refers to unknown node `{0}`")]
    UnknownNode(String),
    #[error("edge {0} - {1} closes a cycle")]
    Cycle(String, String),
    #[error("{len} edges, but at most {expected} expected")]
    TooManyEdges { len: usize, expected: usize },
    #[error("tree reported as complete = {reported}, which does not hold")]
    Completeness { reported: bool },
    #[error("source has distance {0}")]
    SourceDistance(String),
    #[error("node #{node}: {reason}")]
    Path { node: usize, reason: String },
    #[error("edge #{u} - #{v} can shorten the distance to #{v}")]
    NotShortest { u: usize, v: usize },
}

/// Checks that the edges form a forest over the nodes and that the reported
/// completeness matches.
pub fn check_spanning_tree<W>(
    nodes: &[Node],
    tree: &SpanningTree<W>,
) -> Result<(), ConsistencyError> {
    let index = NameIndex::new(nodes);
    let mut sets = DisjointSet::new(nodes.len());

    if tree.len() > tree.expected_len() {
        return Err(ConsistencyError::TooManyEdges {
            len: tree.len(),
            expected: tree.expected_len(),
        });
    }

    for edge in tree {
        let from = index
            .get(&edge.from)
            .ok_or_else(|| ConsistencyError::UnknownNode(edge.from.clone()))?;
        let to = index
            .get(&edge.to)
            .ok_or_else(|| ConsistencyError::UnknownNode(edge.to.clone()))?;

        if !sets.union(from, to) {
            return Err(ConsistencyError::Cycle(edge.from.clone(), edge.to.clone()));
        }
    }

    // An acyclic edge set over n nodes is spanning iff it has n - 1 edges.
    let spanning = sets.set_count() <= 1;
    if spanning != tree.is_complete() {
        return Err(ConsistencyError::Completeness {
            reported: tree.is_complete(),
        });
    }

    Ok(())
}

/// Checks that every reported path exists in the matrix and sums to the
/// reported distance, and that no matrix edge can improve any distance.
pub fn check_shortest_paths<W>(
    matrix: &AdjacencyMatrix<W>,
    paths: &ShortestPaths<W>,
) -> Result<(), ConsistencyError>
where
    W: Weight + fmt::Debug,
{
    let Some(source) = paths.source() else {
        return Ok(());
    };

    match paths.dist(source) {
        Some(dist) if *dist == W::zero() => {}
        dist => return Err(ConsistencyError::SourceDistance(format!("{dist:?}"))),
    }

    let path_error = |node: usize, reason: &str| ConsistencyError::Path {
        node,
        reason: reason.to_string(),
    };

    for v in 0..matrix.len() {
        let Some(dist) = paths.dist(v) else {
            if paths.path_to(v).is_some() {
                return Err(path_error(v, "unreachable node has a path"));
            }
            continue;
        };

        let path = paths
            .path_to(v)
            .ok_or_else(|| path_error(v, "reachable node has no path"))?;

        if path.first() != Some(&source) || path.last() != Some(&v) {
            return Err(path_error(v, "path does not connect source and node"));
        }

        let mut total = W::zero();
        for step in path.windows(2) {
            let weight = matrix
                .weight(step[0], step[1])
                .ok_or_else(|| path_error(v, "path uses a missing edge"))?;
            total = total
                .checked_add(weight)
                .ok_or_else(|| path_error(v, "path weight overflows"))?;
        }

        if total != *dist {
            return Err(path_error(v, "path weight differs from the distance"));
        }
    }

    for u in 0..matrix.len() {
        let Some(dist_u) = paths.dist(u) else {
            continue;
        };

        for (v, weight) in matrix.neighbors(u) {
            // A sum out of range cannot be shorter than a stored distance.
            let Some(candidate) = dist_u.checked_add(weight) else {
                continue;
            };

            match paths.dist(v) {
                Some(dist_v) if *dist_v <= candidate => {}
                _ => return Err(ConsistencyError::NotShortest { u, v }),
            }
        }
    }

    Ok(())
}
