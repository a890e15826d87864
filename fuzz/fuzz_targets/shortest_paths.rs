#![no_main]

use libfuzzer_sys::fuzz_target;

use spanpath::{
    algo::dijkstra,
    core::build_adjacency_matrix,
    infra::testing::{check_shortest_paths, GraphInput},
};

fuzz_target!(|input: GraphInput<u16>| {
    let input = input.map_weights(u32::from);
    let matrix = build_adjacency_matrix(&input.nodes, &input.edges).unwrap();

    for node in &input.nodes {
        let shortest_paths = dijkstra(&matrix, &node.name).unwrap();

        check_shortest_paths(&matrix, &shortest_paths)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
        assert_eq!(shortest_paths.routes().len(), input.nodes.len() - 1);
    }
});
