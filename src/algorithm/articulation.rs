use tracing::{debug, trace};

use crate::algorithm::connectivity::{component_count, connected_without};
use crate::graph::{EdgeRemoval, MatrixGraph};

/// Finds the articulation points by isolating each vertex in turn and
/// counting the components of what is left. The isolated vertex is a
/// component of its own, so the vertex is an articulation point when
/// more than two components remain. O(V³).
pub fn articulation_points_by_components(graph: &mut MatrixGraph) -> Vec<usize> {
    let mut points = Vec::new();
    for v in 0..graph.num_vertices() {
        let mut removal = EdgeRemoval::new(graph);
        if removal.isolate(v).is_err() {
            continue;
        }
        if component_count(&removal) > 2 {
            trace!(v, "articulation point");
            points.push(v);
        }
    }
    debug!(points = points.len(), "component scan finished");
    points
}

/// Finds the articulation points by checking, for each vertex,
/// whether the rest of the graph is still connected when traversal
/// never enters that vertex. The graph is not modified. O(V³) on the
/// dense representation, without the edge removals of
/// [`articulation_points_by_components`].
pub fn articulation_points(graph: &MatrixGraph) -> Vec<usize> {
    let points: Vec<usize> = (0..graph.num_vertices())
        .filter(|&v| !connected_without(graph, Some(v)))
        .collect();
    debug!(points = points.len(), "exclusion scan finished");
    points
}

impl MatrixGraph {
    pub fn articulation_points(&self) -> Vec<usize> {
        articulation_points(self)
    }

    pub fn articulation_points_by_components(&mut self) -> Vec<usize> {
        articulation_points_by_components(self)
    }
}
