pub mod shortest_paths;
pub mod spanning_tree;

pub use shortest_paths::{dijkstra, Route, ShortestPaths};
pub use spanning_tree::{kruskal, prim, SpanningTree};
