pub mod error;
pub mod matrix;
pub mod model;
pub mod name_index;
pub mod weight;

pub use error::{InvalidEdgeError, InvalidEdgeErrorKind};
pub use matrix::{build_adjacency_matrix, AdjacencyMatrix};
pub use model::{Edge, Node};
pub use name_index::NameIndex;
pub use weight::Weight;
