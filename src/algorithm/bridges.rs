use tracing::{debug, trace};

use crate::algorithm::connectivity::{component_count, is_connected};
use crate::graph::{Edge, EdgeRemoval, MatrixGraph};

/// Finds every edge whose removal increases the number of connected
/// components, in row-major scan order.
///
/// Each candidate edge is removed in turn and connectivity is checked
/// from scratch, so this runs in O(E·V²) on the dense representation.
/// The graph is borrowed mutably for the duration of the scan but is
/// identical to its input state on return.
pub fn bridges(graph: &mut MatrixGraph) -> Vec<Edge> {
    let baseline = component_count(graph);
    let candidates: Vec<(usize, usize)> =
        graph.edges().map(|(i, j, _)| (i, j)).collect();

    let mut found = Vec::new();
    for (i, j) in candidates {
        let mut removal = EdgeRemoval::new(graph);
        if let Ok(None) | Err(_) = removal.remove(i, j) {
            continue;
        }

        let splits = if baseline == 1 {
            !is_connected(&removal)
        } else {
            component_count(&removal) > baseline
        };

        if splits {
            trace!(i, j, "bridge");
            found.push(Edge::new(i, j));
        }
    }

    debug!(bridges = found.len(), "bridge scan finished");
    found
}

impl MatrixGraph {
    pub fn bridges(&mut self) -> Vec<Edge> {
        bridges(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_graph_edges_are_all_bridges() {
        let mut graph =
            MatrixGraph::from_edges(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
        let before = graph.clone();

        assert_eq!(
            graph.bridges(),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn triangle_has_no_bridges() {
        let mut graph =
            MatrixGraph::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(graph.bridges().is_empty());
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn self_loops_are_never_bridges() {
        let mut graph =
            MatrixGraph::from_edges(2, vec![(0, 1), (1, 1)]).unwrap();
        assert_eq!(graph.bridges(), vec![Edge::new(0, 1)]);
    }

    #[test]
    fn disconnected_graph_only_reports_splitting_edges() {
        // triangle 0-1-2, separate edge 3-4, isolated vertex 5
        let mut graph = MatrixGraph::from_weighted_edges(
            6,
            vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (3, 4, 4.0)],
        )
        .unwrap();
        let before = graph.clone();

        assert_eq!(graph.bridges(), vec![Edge::new(3, 4)]);
        assert_eq!(graph, before);
    }
}
