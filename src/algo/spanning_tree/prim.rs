use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{matrix::AdjacencyMatrix, model::Edge, weight::Weight},
};

use super::SpanningTree;

/// Minimum spanning tree using Prim's algorithm, growing from node 0.
///
/// In each step, all pairs of an in-tree node `i` and an out-of-tree node `j`
/// are scanned in row-major order and the strictly lightest one is added, so
/// ties resolve to the first pair encountered. The emitted edge goes from `i`
/// to `j`.
///
/// If some node cannot be reached, the algorithm stops and the result is
/// [incomplete](SpanningTree::is_complete). Note that then even nodes
/// reachable through other parts of the graph are left out.
///
/// Runs in O(N³), which is fine for graphs of tens of nodes.
pub fn prim<W: Weight>(matrix: &AdjacencyMatrix<W>) -> SpanningTree<W> {
    let n = matrix.len();
    let target = n.saturating_sub(1);
    let mut edges = Vec::with_capacity(target);

    if n == 0 {
        return SpanningTree::new(edges, n);
    }

    let mut in_tree = FixedBitSet::with_capacity(n);
    in_tree.visit(0);

    while edges.len() < target {
        let mut best: Option<(usize, usize, &W)> = None;

        for i in in_tree.ones() {
            for j in 0..n {
                if in_tree.is_visited(j) {
                    continue;
                }

                if let Some(weight) = matrix.weight(i, j) {
                    let lighter = match best {
                        Some((_, _, best_weight)) => weight < best_weight,
                        None => true,
                    };

                    if lighter {
                        best = Some((i, j, weight));
                    }
                }
            }
        }

        let Some((i, j, weight)) = best else {
            log::debug!(
                "prim stopped after {} of {target} edges, graph is disconnected",
                edges.len()
            );
            break;
        };

        log::trace!("prim selected edge {i} -> {j}");

        edges.push(Edge::new(
            matrix.node(i).name.clone(),
            matrix.node(j).name.clone(),
            weight.clone(),
        ));
        in_tree.visit(j);
    }

    SpanningTree::new(edges, n)
}
