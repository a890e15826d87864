#![no_main]

use libfuzzer_sys::fuzz_target;

use spanpath::{
    algo::{kruskal, prim},
    core::build_adjacency_matrix,
    infra::testing::{check_spanning_tree, GraphInput},
};

fuzz_target!(|input: GraphInput<i16>| {
    let input = input.map_weights(i64::from);

    let matrix = build_adjacency_matrix(&input.nodes, &input.edges).unwrap();
    let tree_prim = prim(&matrix);
    let tree_kruskal = kruskal(&input.nodes, &input.edges).unwrap();

    check_spanning_tree(&input.nodes, &tree_prim)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    check_spanning_tree(&input.nodes, &tree_kruskal)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    // Parallel edges are resolved differently (last wins in the matrix), so
    // the weights can be compared only when both trees are complete and the
    // matrix agrees with the edge list.
    if tree_prim.is_complete() && matrix.edge_count() == input.edges.len() {
        assert!(tree_kruskal.is_complete());
        assert_eq!(tree_prim.total_weight(), tree_kruskal.total_weight());
    }
});
