#![allow(dead_code)]

use fastrand::Rng;
use petgraph::graph::{NodeIndex, UnGraph};
use spanpath::{
    core::{Edge, Node},
    infra::testing::GraphInput,
};

pub const RANDOM_SEED: u64 = 0x5a17_c0de_9e3b_4a21;

/// Geometric skipping over the lower triangle of node pairs, so that each pair
/// is an edge with probability `p` without visiting all pairs.
pub struct RandomPairs {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomPairs {
    pub fn new(node_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_count,
            p,
        }
    }

    pub fn next_pair(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn random_input(node_count: usize, density: f32, rng: &mut Rng) -> GraphInput<f32> {
    let nodes = (0..node_count)
        .map(|v| Node::new(format!("v{v}")))
        .collect::<Vec<_>>();

    let mut edges = Vec::new();
    let mut pairs = RandomPairs::new(node_count, density);

    while let Some((u, v)) = pairs.next_pair(rng) {
        edges.push(Edge::new(
            nodes[u].name.clone(),
            nodes[v].name.clone(),
            rng.f32(),
        ));
    }

    GraphInput::new(nodes, edges)
}

pub fn petgraph_from_input(input: &GraphInput<f32>) -> UnGraph<(), f32> {
    let mut graph = UnGraph::with_capacity(input.nodes.len(), input.edges.len());

    for _ in &input.nodes {
        graph.add_node(());
    }

    for edge in &input.edges {
        let u = input.position(&edge.from).unwrap();
        let v = input.position(&edge.to).unwrap();
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), edge.weight);
    }

    graph
}
