use spanpath::{
    algo::{dijkstra, SpanningTree},
    core::{build_adjacency_matrix, Edge, Node},
};

fn main() {
    let nodes = [
        "Prague",
        "Bratislava",
        "Vienna",
        "Munich",
        "Nuremberg",
        "Florence",
        "Rome",
        "Reykjavik",
    ]
    .map(Node::new);

    let edges = [
        Edge::new("Prague", "Bratislava", 328u32),
        Edge::new("Prague", "Nuremberg", 297),
        Edge::new("Prague", "Vienna", 293),
        Edge::new("Bratislava", "Vienna", 79),
        Edge::new("Nuremberg", "Munich", 170),
        Edge::new("Vienna", "Munich", 402),
        Edge::new("Vienna", "Florence", 863),
        Edge::new("Munich", "Florence", 646),
        Edge::new("Florence", "Rome", 278),
    ];

    let matrix = match build_adjacency_matrix(&nodes, &edges) {
        Ok(matrix) => matrix,
        Err(error) => {
            eprintln!("{error}");
            return;
        }
    };

    match dijkstra(&matrix, "Prague") {
        Ok(shortest_paths) => {
            for route in shortest_paths.routes() {
                match route.distance {
                    Some(distance) => {
                        let path = route
                            .path
                            .iter()
                            .map(|&v| matrix.node(v).name.as_str())
                            .collect::<Vec<_>>()
                            .join(" - ");
                        println!("{distance} km to {} through {path}", route.to);
                    }
                    None => println!("{} cannot be reached by road", route.to),
                }
            }
        }
        Err(error) => eprintln!("{error}"),
    }

    // Reykjavik is isolated, so only a spanning forest exists.
    let tree = SpanningTree::on(&nodes, &edges).run();
    match tree.map(|tree| tree.complete()) {
        Ok(Ok(edges)) => println!("road network of {} roads", edges.len()),
        Ok(Err(error)) => {
            let total = error.forest.iter().map(|edge| edge.weight).sum::<u32>();
            println!("{error}, total length {total} km");
        }
        Err(error) => eprintln!("{error}"),
    }
}
