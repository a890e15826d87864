use arbitrary::{Arbitrary, Unstructured};

use crate::core::{Edge, Node};

use super::testing::GraphInput;

const MAX_NODES: usize = 32;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
struct RawEdge<W> {
    from: Index,
    to: Index,
    weight: W,
}

/// Arbitrary graphs with up to 32 nodes. Node names are unique and every edge
/// refers to existing nodes. Self-loops and parallel edges are possible.
impl<'a, W> Arbitrary<'a> for GraphInput<W>
where
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n = u.int_in_range(0..=MAX_NODES)?;
        let nodes = (0..n)
            .map(|v| Node::new(format!("v{v}")))
            .collect::<Vec<_>>();

        let raw: Vec<RawEdge<W>> = u.arbitrary()?;
        let edges = raw
            .into_iter()
            .filter_map(|edge| {
                let from = edge.from.get(n)?;
                let to = edge.to.get(n)?;
                Some(Edge::new(
                    nodes[from].name.clone(),
                    nodes[to].name.clone(),
                    edge.weight,
                ))
            })
            .collect();

        Ok(GraphInput::new(nodes, edges))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::NameIndex;

    use super::*;

    #[test]
    fn index_modulo() {
        assert_eq!(Index(7).get(3), Some(1));
        assert_eq!(Index(7).get(0), None);
    }

    #[test]
    fn arbitrary_edges_reference_nodes() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let input = GraphInput::<u8>::arbitrary(&mut u).unwrap();
        let index = NameIndex::new(&input.nodes);

        assert!(input.nodes.len() <= MAX_NODES);
        for edge in &input.edges {
            assert!(index.get(&edge.from).is_some());
            assert!(index.get(&edge.to).is_some());
        }
    }
}
