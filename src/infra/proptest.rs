use std::fmt;

use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::core::{Edge, Node};

use super::testing::GraphInput;

/// Strategy generating node and edge lists with unique node names, no
/// self-loops and at most one edge per pair of nodes.
///
/// Usage: `graph(0u32..100).max_size(16).connected()`.
pub fn graph<S>(weight: S) -> GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: fmt::Debug + Clone,
{
    GraphStrategy::new(weight)
}

#[derive(Debug, Clone)]
pub struct GraphStrategy<S> {
    weight: S,
    params: StrategyParams,
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    connected: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            connected: false,
        }
    }
}

impl<S> GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: fmt::Debug + Clone,
{
    pub fn new(weight: S) -> Self {
        Self {
            weight,
            params: StrategyParams::default(),
        }
    }

    /// Maximum number of nodes.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: StrategyParams {
                max_size,
                ..self.params
            },
            ..self
        }
    }

    /// Generates only connected graphs.
    pub fn connected(self) -> Self {
        Self {
            params: StrategyParams {
                connected: true,
                ..self.params
            },
            ..self
        }
    }

    fn build(&self) -> BoxedStrategy<GraphInput<S::Value>> {
        let weight = self.weight.clone();
        let StrategyParams {
            max_size,
            connected,
        } = self.params;

        (0..=max_size)
            .prop_flat_map(move |n| {
                if n == 0 {
                    return Just(GraphInput::new(Vec::new(), Vec::new())).boxed();
                }

                // Random recursive tree, which guarantees connectivity.
                let tree = (1..n)
                    .map(|v| (0..v, weight.clone()))
                    .collect::<Vec<_>>();
                let extra = vec((0..n, 0..n, weight.clone()), 0..=(4 * n));

                (tree, extra)
                    .prop_map(move |(tree, extra)| assemble(n, connected, tree, extra))
                    .boxed()
            })
            .boxed()
    }
}

fn assemble<W>(
    n: usize,
    connected: bool,
    tree: Vec<(usize, W)>,
    extra: Vec<(usize, usize, W)>,
) -> GraphInput<W> {
    let nodes = (0..n).map(|v| Node::new(format!("v{v}"))).collect::<Vec<_>>();
    let mut pairs = FxHashSet::default();
    let mut edges = Vec::new();

    let tree = tree
        .into_iter()
        .enumerate()
        .filter(|_| connected)
        .map(|(i, (u, weight))| (u, i + 1, weight));

    for (u, v, weight) in tree.chain(extra) {
        if u == v || !pairs.insert((u.min(v), u.max(v))) {
            continue;
        }

        edges.push(Edge::new(
            nodes[u].name.clone(),
            nodes[v].name.clone(),
            weight,
        ));
    }

    GraphInput::new(nodes, edges)
}

impl<S> Strategy for GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: fmt::Debug + Clone,
{
    type Tree = Box<dyn ValueTree<Value = GraphInput<S::Value>>>;
    type Value = GraphInput<S::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}
