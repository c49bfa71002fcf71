use std::collections::VecDeque;

use tracing::trace;

use crate::error::Result;
use crate::graph::MatrixGraph;
use crate::state::State;

#[derive(Debug)]
enum Inst {
    Visit(usize),
    Follow(usize, usize),
}

type InstStack = VecDeque<Inst>;

fn run_inst(
    inst: Inst,
    stack: &mut InstStack,
    state: &mut State,
    graph: &MatrixGraph,
) {
    match inst {
        Inst::Visit(w) => {
            if state.visit(w) {
                graph
                    .adjacent(w)
                    .rev()
                    .for_each(|u| stack.push_front(Inst::Follow(w, u)));
            }
        }
        Inst::Follow(w, u) => {
            // edges into the excluded vertex are treated as absent
            if !state.is_visited(u) && !state.is_excluded(u) {
                trace!(from = w, to = u, "tree edge");
                stack.push_front(Inst::Visit(u));
            }
        }
    }
}

/// Depth-first traversal from `start`, entering unvisited neighbors
/// in increasing index order. Equivalent to the recursive traversal,
/// but driven by an explicit stack.
pub fn traverse(graph: &MatrixGraph, state: &mut State, start: usize) {
    let mut stack: InstStack = VecDeque::new();
    stack.push_front(Inst::Visit(start));
    while let Some(inst) = stack.pop_front() {
        run_inst(inst, &mut stack, state, graph);
    }
}

/// Returns true if every vertex other than `excluded` can be reached
/// without passing through `excluded`. The traversal starts at the
/// lowest vertex that isn't excluded.
pub fn connected_without(graph: &MatrixGraph, excluded: Option<usize>) -> bool {
    let mut state = State::initialize(graph.num_vertices(), excluded);
    if let Some(start) = state.first_unvisited() {
        traverse(graph, &mut state, start);
    }
    state.all_visited()
}

pub fn is_connected(graph: &MatrixGraph) -> bool {
    connected_without(graph, None)
}

pub fn component_count(graph: &MatrixGraph) -> usize {
    let mut state = State::initialize(graph.num_vertices(), None);
    let mut count = 0;
    while let Some(start) = state.first_unvisited() {
        traverse(graph, &mut state, start);
        count += 1;
    }
    count
}

/// The connected components, each listed in visitation order,
/// ordered by their lowest vertex.
pub fn components(graph: &MatrixGraph) -> Vec<Vec<usize>> {
    let mut state = State::initialize(graph.num_vertices(), None);
    let mut comps = Vec::new();
    while let Some(start) = state.first_unvisited() {
        let seen = state.order().len();
        traverse(graph, &mut state, start);
        comps.push(state.order()[seen..].to_vec());
    }
    comps
}

impl MatrixGraph {
    /// True if every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }

    /// True if the graph stays connected when `excluded` and its
    /// incident edges are ignored. The graph is not modified.
    pub fn is_connected_excluding(&self, excluded: usize) -> Result<bool> {
        let excluded = self.check_vertex(excluded)?;
        Ok(connected_without(self, Some(excluded)))
    }

    pub fn component_count(&self) -> usize {
        component_count(self)
    }

    pub fn components(&self) -> Vec<Vec<usize>> {
        components(self)
    }

    /// The vertices reachable from `start`, in depth-first visitation
    /// order.
    pub fn dfs_order(&self, start: usize) -> Result<Vec<usize>> {
        let start = self.check_vertex(start)?;
        let mut state = State::initialize(self.num_vertices(), None);
        traverse(self, &mut state, start);
        Ok(state.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> MatrixGraph {
        MatrixGraph::from_edges(
            6,
            vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)],
        )
        .unwrap()
    }

    #[test]
    fn empty_and_single_vertex_graphs_are_connected() {
        assert!(MatrixGraph::new(0).is_connected());
        assert!(MatrixGraph::new(1).is_connected());
        assert_eq!(MatrixGraph::new(0).component_count(), 0);
        assert_eq!(MatrixGraph::new(1).component_count(), 1);
    }

    #[test]
    fn disconnected_graph() {
        let graph = two_triangles();
        assert!(!graph.is_connected());
        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.components(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn visitation_order_is_depth_first_lowest_index() {
        // 0 - 1 - 3
        // |       |
        // 2 ----- 4
        let graph =
            MatrixGraph::from_edges(5, vec![(0, 1), (0, 2), (1, 3), (3, 4), (2, 4)])
                .unwrap();
        assert_eq!(graph.dfs_order(0).unwrap(), vec![0, 1, 3, 4, 2]);
        assert_eq!(graph.dfs_order(2).unwrap(), vec![2, 0, 1, 3, 4]);
        assert!(graph.dfs_order(5).is_err());
    }

    #[test]
    fn excluding_a_cut_vertex() {
        // 1 - 0 - 2, vertex 0 is the only link
        let graph = MatrixGraph::from_edges(3, vec![(0, 1), (0, 2)]).unwrap();
        assert!(graph.is_connected());
        assert!(!graph.is_connected_excluding(0).unwrap());
        assert!(graph.is_connected_excluding(1).unwrap());
        assert!(graph.is_connected_excluding(2).unwrap());
        assert!(graph.is_connected_excluding(3).is_err());
    }

    #[test]
    fn excluding_leaves_graph_untouched() {
        let graph = two_triangles();
        let before = graph.clone();
        for v in 0..6 {
            assert!(!graph.is_connected_excluding(v).unwrap());
        }
        assert_eq!(graph, before);
    }
}
