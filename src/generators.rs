//! Unit weight graphs of well-known shapes.

use crate::graph::{MatrixGraph, DEFAULT_WEIGHT, NO_EDGE};

fn from_pairs<I>(n: usize, pairs: I) -> MatrixGraph
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut graph = MatrixGraph::new(n);
    for (a, b) in pairs {
        if graph.get(a, b) == NO_EDGE {
            graph.connect(a, b, DEFAULT_WEIGHT);
        }
    }
    graph
}

/// Edges of the complete graph on the vertices `offset..offset + n`
fn complete_edges(offset: usize, n: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();

    let start = offset;
    let end = offset + n;

    for i in start..end {
        for j in i..end {
            if i != j {
                edges.push((i, j));
            }
        }
    }

    edges
}

/// 0 - 1 - ... - (n-1)
pub fn path(n: usize) -> MatrixGraph {
    from_pairs(n, (1..n).map(|v| (v - 1, v)))
}

/// A path closed into a ring. Needs at least three vertices to differ
/// from a path.
pub fn cycle(n: usize) -> MatrixGraph {
    let mut graph = path(n);
    if n > 2 && graph.get(n - 1, 0) == NO_EDGE {
        graph.connect(n - 1, 0, DEFAULT_WEIGHT);
    }
    graph
}

/// Vertex 0 joined to every other vertex.
pub fn star(n: usize) -> MatrixGraph {
    from_pairs(n, (1..n).map(|v| (0, v)))
}

pub fn complete(n: usize) -> MatrixGraph {
    from_pairs(n, complete_edges(0, n))
}

/// The complete bipartite graph with parts `0..k` and `k..k + l`.
pub fn complete_bipartite(k: usize, l: usize) -> MatrixGraph {
    let edges = (0..k).flat_map(|a| (k..k + l).map(move |b| (a, b)));
    from_pairs(k + l, edges)
}

/// Two complete graphs, on `0..k_a` and `k_a..k_a + k_b`, joined by a
/// single edge between the last vertex of the first and the first
/// vertex of the second.
pub fn bridged_complete(k_a: usize, k_b: usize) -> MatrixGraph {
    let mut edges = complete_edges(0, k_a);
    edges.append(&mut complete_edges(k_a, k_b));
    if k_a > 0 && k_b > 0 {
        edges.push((k_a - 1, k_a));
    }
    from_pairs(k_a + k_b, edges)
}
