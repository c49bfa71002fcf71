use tracing::debug;

use crate::algorithm::Path;
use crate::error::{Error, Result};
use crate::graph::{MatrixGraph, Weight, NO_EDGE};

/// Minimum costs and predecessors from a single origin, as computed
/// by [`dijkstra`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    origin: usize,
    cost: Vec<Weight>,
    predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Cost from the origin to each vertex, `NO_EDGE` when unreachable
    pub fn distances(&self) -> &[Weight] {
        &self.cost
    }

    /// Previous vertex on the shortest path to each vertex. `None` for
    /// the origin and for unreachable vertices.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    pub fn distance(&self, destination: usize) -> Result<Weight> {
        self.check_vertex(destination)?;
        Ok(self.cost[destination])
    }

    pub fn is_reachable(&self, destination: usize) -> Result<bool> {
        Ok(self.distance(destination)? != NO_EDGE)
    }

    /// Reconstructs the shortest path from the origin to
    /// `destination` by following predecessors backwards. Returns
    /// `None` if `destination` is unreachable.
    pub fn path_to(&self, destination: usize) -> Result<Option<Path>> {
        if !self.is_reachable(destination)? {
            return Ok(None);
        }

        let mut vertices = vec![destination];
        let mut current = destination;
        while let Some(prev) = self.predecessor[current] {
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();
        debug_assert_eq!(vertices.first(), Some(&self.origin));

        Ok(Some(Path {
            vertices,
            distance: self.cost[destination],
        }))
    }

    fn check_vertex(&self, vertex: usize) -> Result<usize> {
        if vertex < self.cost.len() {
            Ok(vertex)
        } else {
            Err(Error::InvalidVertex {
                vertex,
                num_vertices: self.cost.len(),
            })
        }
    }
}

/// The unvisited vertex with the lowest finite cost. Ties go to the
/// lowest index.
fn select_vertex(cost: &[Weight], visited: &[bool]) -> Option<usize> {
    let mut selected = None;
    let mut lowest = NO_EDGE;
    for (v, &c) in cost.iter().enumerate() {
        if !visited[v] && c < lowest {
            lowest = c;
            selected = Some(v);
        }
    }
    selected
}

/// Computes minimum costs from `origin` to every vertex with the
/// O(V²) label-setting algorithm. Edge weights must be non-negative,
/// which the graph enforces on insertion.
pub fn dijkstra(graph: &MatrixGraph, origin: usize) -> Result<ShortestPaths> {
    let origin = graph.check_vertex(origin)?;
    let n = graph.num_vertices();

    let mut visited = vec![false; n];
    let mut cost: Vec<Weight> = graph.row(origin).to_vec();
    let mut predecessor: Vec<Option<usize>> = cost
        .iter()
        .map(|&w| if w != NO_EDGE { Some(origin) } else { None })
        .collect();

    cost[origin] = 0.0;
    predecessor[origin] = None;
    visited[origin] = true;

    for _ in 1..n {
        let vertex = match select_vertex(&cost, &visited) {
            Some(v) => v,
            None => {
                debug!(origin, "no reachable vertices left");
                break;
            }
        };
        visited[vertex] = true;

        for (j, &w) in graph.row(vertex).iter().enumerate() {
            if !visited[j] && cost[vertex] + w < cost[j] {
                cost[j] = cost[vertex] + w;
                predecessor[j] = Some(vertex);
            }
        }
    }

    Ok(ShortestPaths {
        origin,
        cost,
        predecessor,
    })
}

impl MatrixGraph {
    pub fn shortest_paths(&self, origin: usize) -> Result<ShortestPaths> {
        dijkstra(self, origin)
    }

    /// The shortest path between `origin` and `destination` and its
    /// length, or `None` if they are not connected.
    pub fn shortest_path(
        &self,
        origin: usize,
        destination: usize,
    ) -> Result<Option<Path>> {
        self.check_vertex(destination)?;
        dijkstra(self, origin)?.path_to(destination)
    }
}
