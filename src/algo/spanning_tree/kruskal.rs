use std::cmp::Ordering;

use crate::{
    common::DisjointSet,
    core::{
        error::InvalidEdgeError,
        model::{Edge, Node},
        name_index::NameIndex,
        weight::Weight,
    },
};

use super::SpanningTree;

/// Minimum spanning tree using Kruskal's algorithm.
///
/// Edges are considered in ascending order of weight, with ties kept in the
/// input order. An edge is accepted if it connects two different components.
/// The caller's edge list is never reordered. Accepted edges are returned as
/// they were given, including their orientation.
///
/// All edges are validated before the search starts. A disconnected graph
/// gives a spanning forest which is reported as
/// [incomplete](SpanningTree::is_complete).
pub fn kruskal<W: Weight>(
    nodes: &[Node],
    edges: &[Edge<W>],
) -> Result<SpanningTree<W>, InvalidEdgeError> {
    let n = nodes.len();
    let index = NameIndex::new(nodes);

    let endpoints = edges
        .iter()
        .enumerate()
        .map(|(position, edge)| index.resolve(position, edge))
        .collect::<Result<Vec<_>, _>>()?;

    // Sorting positions instead of the edges themselves. The sort is stable,
    // so ties keep the input order. Weights are comparable after validation,
    // and equal weights (including `-0.0` and `0.0`) compare as equal.
    let mut order = (0..edges.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        edges[a]
            .weight
            .partial_cmp(&edges[b].weight)
            .unwrap_or(Ordering::Equal)
    });

    let target = n.saturating_sub(1);
    let mut sets = DisjointSet::new(n);
    let mut selected = Vec::with_capacity(target);

    for position in order {
        if selected.len() == target {
            break;
        }

        let (from, to) = endpoints[position];

        if sets.union(from, to) {
            log::trace!("kruskal accepted edge #{position}");
            selected.push(edges[position].clone());
        }
    }

    log::debug!(
        "kruskal accepted {} of {} edges for {n} nodes",
        selected.len(),
        edges.len()
    );

    Ok(SpanningTree::new(selected, n))
}
