use super::{
    error::InvalidEdgeError,
    model::{Edge, Node},
    name_index::NameIndex,
    weight::Weight,
};

/// Dense weighted adjacency matrix of an undirected graph.
///
/// Only the lower triangle (including the diagonal) is stored, which makes the
/// matrix symmetric by construction. Absent edges are `None` and the diagonal
/// is always zero.
///
/// The matrix owns a copy of the node list it was built from, so that the
/// algorithms consuming it can report results in terms of node names.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W = f64> {
    nodes: Vec<Node>,
    index: NameIndex,
    cells: Vec<Option<W>>,
}

/// Builds the adjacency matrix for given nodes and edges.
///
/// Every edge is written in both directions. If more edges connect the same
/// pair of nodes, the last one wins. Self-loops never overwrite the zero
/// diagonal. An edge referring to a name that is not in the node list, or
/// having a weight that cannot be compared, makes the whole build fail.
pub fn build_adjacency_matrix<W: Weight>(
    nodes: &[Node],
    edges: &[Edge<W>],
) -> Result<AdjacencyMatrix<W>, InvalidEdgeError> {
    AdjacencyMatrix::new(nodes, edges)
}

impl<W: Weight> AdjacencyMatrix<W> {
    pub fn new(nodes: &[Node], edges: &[Edge<W>]) -> Result<Self, InvalidEdgeError> {
        let n = nodes.len();
        let index = NameIndex::new(nodes);

        let mut cells = vec![None; size_of(n)];
        for i in 0..n {
            cells[cell_index(i, i)] = Some(W::zero());
        }

        for (position, edge) in edges.iter().enumerate() {
            let (from, to) = index.resolve(position, edge)?;

            if from == to {
                log::trace!("ignoring self-loop on `{}`", edge.from);
                continue;
            }

            cells[cell_index(from, to)] = Some(edge.weight.clone());
        }

        log::debug!("built {n}x{n} adjacency matrix from {} edges", edges.len());

        Ok(Self {
            nodes: nodes.to_vec(),
            index,
            cells,
        })
    }
}

impl<W> AdjacencyMatrix<W> {
    /// Number of nodes, which is the number of rows as well as columns.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Position of the node with given name, first match on duplicate names.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name)
    }

    /// Returns the weight of the edge between `row` and `col`, or `None` if
    /// the nodes are not directly connected.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn weight(&self, row: usize, col: usize) -> Option<&W> {
        let n = self.len();
        assert!(
            row < n && col < n,
            "matrix index ({row}, {col}) out of bounds for {n} nodes"
        );
        self.cells[cell_index(row, col)].as_ref()
    }

    /// Iterator over nodes directly connected to `row`, excluding `row`
    /// itself, in ascending order.
    pub fn neighbors(&self, row: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        (0..self.len())
            .filter(move |&col| col != row)
            .filter_map(move |col| self.weight(row, col).map(|weight| (col, weight)))
    }

    /// Number of node pairs connected by an edge.
    pub fn edge_count(&self) -> usize {
        let n = self.len();
        let present = self.cells.iter().filter(|cell| cell.is_some()).count();
        // Minus the diagonal.
        present - n
    }
}

impl<W: Clone> AdjacencyMatrix<W> {
    /// Full square representation, row by row.
    pub fn to_rows(&self) -> Vec<Vec<Option<W>>> {
        let n = self.len();
        (0..n)
            .map(|row| (0..n).map(|col| self.weight(row, col).cloned()).collect())
            .collect()
    }
}

// Lower triangle layout: rows have 1, 2, 3, ..., n cells, so the row `r`
// starts at r (r + 1) / 2.
fn size_of(n: usize) -> usize {
    n * (n + 1) / 2
}

fn cell_index(row: usize, col: usize) -> usize {
    let (row, col) = if row >= col { (row, col) } else { (col, row) };
    row * (row + 1) / 2 + col
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::error::InvalidEdgeErrorKind;

    use super::*;

    fn nodes(names: &[&str]) -> Vec<Node> {
        names.iter().copied().map(Node::new).collect()
    }

    #[test]
    fn triangle() {
        let matrix = build_adjacency_matrix(
            &nodes(&["A", "B", "C"]),
            &[
                Edge::new("A", "B", 2.0),
                Edge::new("B", "C", 3.0),
                Edge::new("A", "C", 10.0),
            ],
        )
        .unwrap();

        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![Some(0.0), Some(2.0), Some(10.0)],
                vec![Some(2.0), Some(0.0), Some(3.0)],
                vec![Some(10.0), Some(3.0), Some(0.0)],
            ]
        );
        assert_eq!(matrix.edge_count(), 3);
    }

    #[test]
    fn absent_edges() {
        let matrix =
            build_adjacency_matrix(&nodes(&["A", "B", "C"]), &[Edge::new("C", "B", 4u32)])
                .unwrap();

        assert_eq!(matrix.weight(0, 1), None);
        assert_eq!(matrix.weight(0, 2), None);
        assert_eq!(matrix.weight(1, 2), Some(&4));
        assert_eq!(matrix.weight(2, 1), Some(&4));
        assert_eq!(matrix.neighbors(0).count(), 0);
        assert_eq!(matrix.neighbors(2).collect::<Vec<_>>(), vec![(1, &4)]);
    }

    #[test]
    fn last_edge_wins() {
        let matrix = build_adjacency_matrix(
            &nodes(&["A", "B"]),
            &[Edge::new("A", "B", 1), Edge::new("B", "A", 5)],
        )
        .unwrap();

        assert_eq!(matrix.weight(0, 1), Some(&5));
        assert_eq!(matrix.edge_count(), 1);
    }

    #[test]
    fn self_loop_keeps_zero_diagonal() {
        let matrix =
            build_adjacency_matrix(&nodes(&["A", "B"]), &[Edge::new("A", "A", 9)]).unwrap();

        assert_eq!(matrix.weight(0, 0), Some(&0));
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn unknown_node_rejected() {
        let result = build_adjacency_matrix(
            &nodes(&["A", "B"]),
            &[Edge::new("A", "B", 1), Edge::new("B", "Z", 2)],
        );

        assert_matches!(
            result,
            Err(InvalidEdgeError {
                edge: 1,
                kind: InvalidEdgeErrorKind::DestinationAbsent,
                ..
            })
        );
    }

    #[test]
    fn nan_rejected() {
        let result =
            build_adjacency_matrix(&nodes(&["A", "B"]), &[Edge::new("A", "B", f32::NAN)]);

        assert_matches!(
            result,
            Err(InvalidEdgeError {
                kind: InvalidEdgeErrorKind::IncomparableWeight,
                ..
            })
        );
    }

    #[test]
    fn infinity_rejected() {
        let result = build_adjacency_matrix(
            &nodes(&["A", "B", "C"]),
            &[Edge::new("A", "B", 1.0), Edge::new("B", "C", f64::INFINITY)],
        );

        assert_matches!(
            result,
            Err(InvalidEdgeError {
                edge: 1,
                kind: InvalidEdgeErrorKind::InfiniteWeight,
                ..
            })
        );
    }

    #[test]
    fn empty() {
        let matrix = build_adjacency_matrix::<f64>(&[], &[]).unwrap();

        assert!(matrix.is_empty());
        assert!(matrix.to_rows().is_empty());
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn duplicate_names_first_match() {
        let matrix =
            build_adjacency_matrix(&nodes(&["A", "B", "A"]), &[Edge::new("B", "A", 1)]).unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.index_of("A"), Some(0));
        assert_eq!(matrix.weight(1, 0), Some(&1));
        assert_eq!(matrix.weight(1, 2), None);
    }

    #[test]
    fn build_is_idempotent() {
        let nodes = nodes(&["A", "B", "C", "D"]);
        let edges = vec![
            Edge::new("A", "B", 1.5),
            Edge::new("C", "D", 0.5),
            Edge::new("D", "A", 2.0),
        ];

        let first = build_adjacency_matrix(&nodes, &edges).unwrap();
        let second = build_adjacency_matrix(&nodes, &edges).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn weight_out_of_bounds() {
        let matrix = build_adjacency_matrix::<u8>(&nodes(&["A"]), &[]).unwrap();
        let _ = matrix.weight(0, 1);
    }

    #[test]
    fn cell_index_symmetric() {
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(cell_index(i, j), cell_index(j, i));
                assert!(cell_index(i, j) < size_of(10));
            }
        }
    }
}
