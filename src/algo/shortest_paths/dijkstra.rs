use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{matrix::AdjacencyMatrix, weight::Weight},
};

use super::{Error, ShortestPaths};

/// Single source shortest paths using dense Dijkstra's algorithm.
///
/// The start node is given by name (first match on duplicate names). In each
/// step, the unvisited node with the smallest tentative distance is selected
/// by a linear scan, ties going to the lowest index. Its neighbors are
/// relaxed only on strict improvement. Runs in O(N²).
///
/// An empty matrix gives an empty result for any start name. If a distance
/// does not fit into the weight type, [`Error::Overflow`] is returned.
pub fn dijkstra<W: Weight>(
    matrix: &AdjacencyMatrix<W>,
    start: &str,
) -> Result<ShortestPaths<W>, Error> {
    if matrix.is_empty() {
        return Ok(ShortestPaths::empty());
    }

    let source = matrix
        .index_of(start)
        .ok_or_else(|| Error::UnknownStart(start.to_owned()))?;

    dijkstra_from(matrix, source)
}

fn dijkstra_from<W: Weight>(
    matrix: &AdjacencyMatrix<W>,
    source: usize,
) -> Result<ShortestPaths<W>, Error> {
    let n = matrix.len();

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);

    dist[source] = Some(W::zero());

    while let Some((vertex, vertex_dist)) = closest_unvisited(&dist, &visited) {
        visited.visit(vertex);

        for (next, edge_dist) in matrix.neighbors(vertex) {
            if visited.is_visited(next) {
                continue;
            }

            if edge_dist.is_negative() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist
                .checked_add(edge_dist)
                .ok_or(Error::Overflow)?;

            // Relaxation operation, only strict improvement counts.
            let improves = match &dist[next] {
                Some(curr_dist) => next_dist < *curr_dist,
                None => true,
            };

            if improves {
                dist[next] = Some(next_dist);
                pred[next] = Some(vertex);
            }
        }
    }

    let unreachable = n - visited.visited_count();
    if unreachable > 0 {
        log::debug!("dijkstra from #{source} left {unreachable} of {n} nodes unreachable");
    }

    Ok(ShortestPaths {
        source: Some(source),
        nodes: matrix.nodes().to_vec(),
        dist,
        pred,
    })
}

// Linear scan over unvisited nodes with a known distance. The first node with
// the minimal distance wins.
fn closest_unvisited<W: Weight>(
    dist: &[Option<W>],
    visited: &FixedBitSet,
) -> Option<(usize, W)> {
    let mut closest: Option<(usize, &W)> = None;

    for (vertex, vertex_dist) in dist.iter().enumerate() {
        if visited.is_visited(vertex) {
            continue;
        }

        if let Some(vertex_dist) = vertex_dist {
            let closer = match closest {
                Some((_, closest_dist)) => vertex_dist < closest_dist,
                None => true,
            };

            if closer {
                closest = Some((vertex, vertex_dist));
            }
        }
    }

    closest.map(|(vertex, vertex_dist)| (vertex, vertex_dist.clone()))
}
