use crate::core::{
    error::InvalidEdgeError,
    matrix::AdjacencyMatrix,
    model::{Edge, Node},
    weight::Weight,
};

use super::{kruskal, prim, Algo, SpanningTree};

/// Builder for [`SpanningTree`].
pub struct SpanningTreeBuilder<'a, W> {
    nodes: &'a [Node],
    edges: &'a [Edge<W>],
    algo: Option<Algo>,
}

impl<W> SpanningTree<W> {
    /// Starts configuring the minimum spanning tree search on given nodes and
    /// edges.
    pub fn on<'a>(nodes: &'a [Node], edges: &'a [Edge<W>]) -> SpanningTreeBuilder<'a, W> {
        SpanningTreeBuilder {
            nodes,
            edges,
            algo: None,
        }
    }
}

impl<'a, W> SpanningTreeBuilder<'a, W> {
    /// Forces a specific algorithm.
    pub fn using(self, algo: Algo) -> Self {
        Self {
            algo: Some(algo),
            ..self
        }
    }

    /// Forces a specific algorithm, or lets the builder choose if `None`.
    pub fn using_opt(self, algo: Option<Algo>) -> Self {
        Self { algo, ..self }
    }

    /// Runs the search.
    ///
    /// For Prim's algorithm, the adjacency matrix is built first.
    pub fn run(self) -> Result<SpanningTree<W>, InvalidEdgeError>
    where
        W: Weight,
    {
        let algo = self.algo.unwrap_or_else(|| self.choose_algo());

        match algo {
            Algo::Prim => {
                let matrix = AdjacencyMatrix::new(self.nodes, self.edges)?;
                Ok(prim(&matrix))
            }
            Algo::Kruskal => kruskal(self.nodes, self.edges),
        }
    }

    fn choose_algo(&self) -> Algo {
        let n = self.nodes.len();
        let complete_edge_count = n * n.saturating_sub(1) / 2;

        // Prim scans the whole matrix anyway, so it pays off only when the
        // matrix is reasonably full. Otherwise sorting the edges is cheaper.
        if self.edges.len() * 4 >= complete_edge_count && n > 0 {
            Algo::Prim
        } else {
            Algo::Kruskal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder<'a>(nodes: &'a [Node], edges: &'a [Edge<u32>]) -> SpanningTreeBuilder<'a, u32> {
        SpanningTree::on(nodes, edges)
    }

    #[test]
    fn choose_prim_for_dense() {
        let nodes = ["A", "B", "C"].map(Node::new);
        let edges = [Edge::new("A", "B", 1), Edge::new("B", "C", 1)];

        assert_eq!(builder(&nodes, &edges).choose_algo(), Algo::Prim);
    }

    #[test]
    fn choose_kruskal_for_sparse() {
        let nodes = (0..20).map(|i| Node::new(i.to_string())).collect::<Vec<_>>();
        let edges = [Edge::new("0", "1", 1), Edge::new("2", "3", 1)];

        assert_eq!(builder(&nodes, &edges).choose_algo(), Algo::Kruskal);
    }

    #[test]
    fn choose_kruskal_for_empty() {
        assert_eq!(builder(&[], &[]).choose_algo(), Algo::Kruskal);
    }

    #[test]
    fn using_opt_none_chooses() {
        let nodes = ["A", "B"].map(Node::new);
        let edges = [Edge::new("A", "B", 3)];

        let tree = builder(&nodes, &edges).using_opt(None).run().unwrap();

        assert!(tree.is_complete());
        assert_eq!(tree.total_weight(), Some(3));
    }
}
