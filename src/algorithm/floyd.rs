use crate::algorithm::Path;
use crate::error::{Error, Result};
use crate::graph::{MatrixGraph, Weight, NO_EDGE};

/// All-pairs shortest distances and, for each pair, one vertex known
/// to lie on a shortest path between them.
///
/// `intermediate(i, j) == Some(i)` means the shortest path is the
/// direct edge; any other `Some(k)` means the path runs through `k`
/// and can be expanded as `i..k` followed by `k..j`.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    num_vertices: usize,
    distance: Vec<Weight>,
    intermediate: Vec<Option<usize>>,
}

impl AllPairs {
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn distance(&self, i: usize, j: usize) -> Result<Weight> {
        let ix = self.index(i, j)?;
        Ok(self.distance[ix])
    }

    pub fn intermediate(&self, i: usize, j: usize) -> Result<Option<usize>> {
        let ix = self.index(i, j)?;
        Ok(self.intermediate[ix])
    }

    /// Shortest distances from `i` to every vertex
    pub fn row(&self, i: usize) -> Result<&[Weight]> {
        let start = self.index(i, 0)?;
        Ok(&self.distance[start..start + self.num_vertices])
    }

    /// Expands the intermediate matrix into the full vertex sequence
    /// from `i` to `j`. Returns `None` if `j` is unreachable from `i`.
    pub fn path(&self, i: usize, j: usize) -> Result<Option<Path>> {
        let distance = self.distance(i, j)?;
        if distance == NO_EDGE {
            return Ok(None);
        }

        let mut vertices = vec![i];
        let mut segments = vec![(i, j)];
        while let Some((a, b)) = segments.pop() {
            match self.at(a, b) {
                Some(k) if k != a => {
                    segments.push((k, b));
                    segments.push((a, k));
                }
                _ if a != b => vertices.push(b),
                _ => {}
            }
        }

        Ok(Some(Path { vertices, distance }))
    }

    fn at(&self, i: usize, j: usize) -> Option<usize> {
        self.intermediate[i * self.num_vertices + j]
    }

    fn index(&self, i: usize, j: usize) -> Result<usize> {
        for &vertex in &[i, j] {
            if vertex >= self.num_vertices {
                return Err(Error::InvalidVertex {
                    vertex,
                    num_vertices: self.num_vertices,
                });
            }
        }
        Ok(i * self.num_vertices + j)
    }
}

/// Computes shortest distances between every pair of vertices.
pub fn floyd_warshall(graph: &MatrixGraph) -> AllPairs {
    let n = graph.num_vertices();

    let mut distance = Vec::with_capacity(n * n);
    let mut intermediate = Vec::with_capacity(n * n);
    for i in 0..n {
        for (j, &w) in graph.row(i).iter().enumerate() {
            if i == j {
                distance.push(0.0);
                intermediate.push(None);
            } else {
                distance.push(w);
                intermediate.push(if w != NO_EDGE { Some(i) } else { None });
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = distance[i * n + k];
            if i == k || d_ik == NO_EDGE {
                continue;
            }
            for j in 0..n {
                let d_kj = distance[k * n + j];
                if j == k || d_kj == NO_EDGE {
                    continue;
                }
                if d_ik + d_kj < distance[i * n + j] {
                    distance[i * n + j] = d_ik + d_kj;
                    intermediate[i * n + j] = Some(k);
                }
            }
        }
    }

    AllPairs {
        num_vertices: n,
        distance,
        intermediate,
    }
}

impl MatrixGraph {
    pub fn all_pairs(&self) -> AllPairs {
        floyd_warshall(self)
    }
}
