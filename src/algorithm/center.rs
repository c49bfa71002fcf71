use tracing::debug;

use crate::algorithm::floyd::{floyd_warshall, AllPairs};
use crate::graph::{MatrixGraph, Weight, NO_EDGE};

/// The radius of a graph and the vertices whose eccentricity equals
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct Center {
    pub radius: Weight,
    pub vertices: Vec<usize>,
}

/// The eccentricity of each vertex: its greatest shortest-path
/// distance to any vertex. Infinite if some vertex is unreachable.
pub fn eccentricities(all: &AllPairs) -> Vec<Weight> {
    let n = all.num_vertices();
    let mut ecc = vec![0.0; n];
    for u in 0..n {
        if let Ok(row) = all.row(u) {
            for (v, &d) in row.iter().enumerate() {
                if d > ecc[v] {
                    ecc[v] = d;
                }
            }
        }
    }
    ecc
}

/// The smallest non-zero eccentricity. Zero is only returned when it
/// is the only value present, i.e. for a graph with a single vertex.
/// An empty graph has an infinite radius.
pub fn radius(eccentricities: &[Weight]) -> Weight {
    let smallest = eccentricities
        .iter()
        .copied()
        .filter(|&e| e != 0.0)
        .fold(None, |min: Option<Weight>, e| match min {
            Some(m) if m <= e => Some(m),
            _ => Some(e),
        });

    match smallest {
        Some(r) => r,
        None if eccentricities.is_empty() => NO_EDGE,
        None => 0.0,
    }
}

/// Computes the radius and center vertices. In a disconnected graph
/// every eccentricity is infinite, so every vertex is reported.
pub fn center(graph: &MatrixGraph) -> Center {
    let ecc = eccentricities(&floyd_warshall(graph));
    let radius = radius(&ecc);
    let vertices: Vec<usize> = ecc
        .iter()
        .enumerate()
        .filter(|&(_, &e)| e == radius)
        .map(|(v, _)| v)
        .collect();

    debug!(radius, centers = vertices.len(), "graph center");
    Center { radius, vertices }
}

impl MatrixGraph {
    pub fn eccentricities(&self) -> Vec<Weight> {
        eccentricities(&floyd_warshall(self))
    }

    pub fn radius(&self) -> Weight {
        radius(&self.eccentricities())
    }

    pub fn center(&self) -> Center {
        center(self)
    }

    /// The vertices of minimum eccentricity
    pub fn centers(&self) -> Vec<usize> {
        center(self).vertices
    }
}
