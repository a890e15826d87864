mod common;

use common::{petgraph_from_input, random_input, RANDOM_SEED};
use fastrand::Rng;
use spanpath::{
    algo::{kruskal, prim},
    core::build_adjacency_matrix,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [10, 50, 100], args = [0.25, 0.75])]
fn spanpath_prim_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let input = random_input(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let matrix = build_adjacency_matrix(&input.nodes, &input.edges).unwrap();

    bencher.bench(|| prim(&matrix));
}

#[divan::bench(consts = [10, 50, 100], args = [0.25, 0.75])]
fn spanpath_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let input = random_input(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| kruskal(&input.nodes, &input.edges));
}

#[divan::bench(consts = [10, 50, 100], args = [0.25, 0.75])]
fn petgraph_min_spanning_tree_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let input = random_input(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = petgraph_from_input(&input);

    bencher.bench(|| petgraph::algo::min_spanning_tree(&graph).count());
}

#[divan::bench(consts = [10, 50, 100], args = [0.25, 0.75])]
fn spanpath_build_matrix_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let input = random_input(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| build_adjacency_matrix(&input.nodes, &input.edges));
}
