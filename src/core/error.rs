use std::fmt;

use thiserror::Error;

/// An edge that cannot be placed into the graph.
///
/// The `edge` field is the position of the offending edge in the edge list
/// given by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid edge #{edge} ({name}): {kind}")]
pub struct InvalidEdgeError {
    pub edge: usize,
    pub name: String,
    pub kind: InvalidEdgeErrorKind,
}

impl InvalidEdgeError {
    pub fn new(edge: usize, name: impl Into<String>, kind: InvalidEdgeErrorKind) -> Self {
        Self {
            edge,
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    IncomparableWeight,
    InfiniteWeight,
}

impl fmt::Display for InvalidEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidEdgeErrorKind::SourceAbsent => "source node does not exist",
            InvalidEdgeErrorKind::DestinationAbsent => "destination node does not exist",
            InvalidEdgeErrorKind::IncomparableWeight => {
                "the weight cannot be compared to other weights"
            }
            InvalidEdgeErrorKind::InfiniteWeight => "the weight is not finite",
        };
        f.write_str(reason)
    }
}
