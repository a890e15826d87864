use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use super::{
    error::{InvalidEdgeError, InvalidEdgeErrorKind},
    model::{Edge, Node},
    weight::Weight,
};

/// Mapping from node names to their positions in the node list.
///
/// If more nodes share the same name, the first one wins. The other nodes
/// still occupy their positions, but no edge can ever refer to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    map: FxHashMap<String, usize>,
}

impl NameIndex {
    pub fn new(nodes: &[Node]) -> Self {
        let mut map = FxHashMap::default();
        map.reserve(nodes.len());

        for (index, node) in nodes.iter().enumerate() {
            match map.entry(node.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(first) => {
                    log::debug!(
                        "node #{index} named `{}` is shadowed by node #{}",
                        node.name,
                        first.get()
                    );
                }
            }
        }

        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolves both endpoints of the edge at position `position` of the edge
    /// list, checking also that its weight is comparable and finite.
    pub fn resolve<W: Weight>(
        &self,
        position: usize,
        edge: &Edge<W>,
    ) -> Result<(usize, usize), InvalidEdgeError> {
        let from = self.get(&edge.from).ok_or_else(|| {
            InvalidEdgeError::new(position, &edge.from, InvalidEdgeErrorKind::SourceAbsent)
        })?;

        let to = self.get(&edge.to).ok_or_else(|| {
            InvalidEdgeError::new(position, &edge.to, InvalidEdgeErrorKind::DestinationAbsent)
        })?;

        let kind = if !edge.weight.is_comparable() {
            Some(InvalidEdgeErrorKind::IncomparableWeight)
        } else if !edge.weight.is_finite() {
            Some(InvalidEdgeErrorKind::InfiniteWeight)
        } else {
            None
        };

        match kind {
            Some(kind) => Err(InvalidEdgeError::new(
                position,
                format!("{} - {}", edge.from, edge.to),
                kind,
            )),
            None => Ok((from, to)),
        }
    }
}
