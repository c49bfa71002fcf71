use std::ops::Deref;

use tracing::trace;

use crate::error::{Error, Result};

pub type Weight = f64;

/// Weight stored for vertex pairs without an edge. Compares greater
/// than every finite weight.
pub const NO_EDGE: Weight = f64::INFINITY;

pub const DEFAULT_WEIGHT: Weight = 1.0;

/// An unordered pair of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub origin: usize,
    pub destination: usize,
}

impl Edge {
    pub fn new(origin: usize, destination: usize) -> Edge {
        Edge {
            origin,
            destination,
        }
    }

    /// The same edge with the lower index first
    pub fn normalized(self) -> Edge {
        if self.origin <= self.destination {
            self
        } else {
            Edge::new(self.destination, self.origin)
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((origin, destination): (usize, usize)) -> Edge {
        Edge::new(origin, destination)
    }
}

/// An undirected weighted graph over the fixed vertex set 0..V,
/// stored as a dense, symmetric V×V weight matrix.
///
/// The matrix is kept symmetric after every mutation, and the edge
/// counter counts every unordered pair exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph {
    num_vertices: usize,
    num_edges: usize,
    weights: Vec<Weight>,
}

impl MatrixGraph {
    /// Constructs a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> MatrixGraph {
        MatrixGraph {
            num_vertices,
            num_edges: 0,
            weights: vec![NO_EDGE; num_vertices * num_vertices],
        }
    }

    /// Constructs a graph from a list of unit weight edges.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<MatrixGraph>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = MatrixGraph::new(num_vertices);
        for (a, b) in edges {
            graph.insert_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Constructs a graph from a list of `(a, b, weight)` triples.
    /// Repeated pairs keep the first weight.
    pub fn from_weighted_edges<I>(
        num_vertices: usize,
        edges: I,
    ) -> Result<MatrixGraph>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = MatrixGraph::new(num_vertices);
        for (a, b, w) in edges {
            graph.insert_weighted_edge(a, b, w)?;
        }
        Ok(graph)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `vertex` if it belongs to the graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<usize> {
        if vertex < self.num_vertices {
            Ok(vertex)
        } else {
            Err(Error::InvalidVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    pub fn edge_exists(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.weight(a, b)? != NO_EDGE)
    }

    /// Returns the weight of the edge between `a` and `b`, or
    /// `NO_EDGE` if they are not adjacent.
    pub fn weight(&self, a: usize, b: usize) -> Result<Weight> {
        let a = self.check_vertex(a)?;
        let b = self.check_vertex(b)?;
        Ok(self.get(a, b))
    }

    /// Inserts the edge between `a` and `b` with weight 1.
    pub fn insert_edge(&mut self, a: usize, b: usize) -> Result<bool> {
        self.insert_weighted_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Inserts the edge between `a` and `b`. Both directions of the
    /// matrix are set, but the edge is only counted once. If the edge
    /// already exists this has no effect and the stored weight is
    /// kept. Returns true if the edge was inserted.
    pub fn insert_weighted_edge(
        &mut self,
        a: usize,
        b: usize,
        weight: Weight,
    ) -> Result<bool> {
        let a = self.check_vertex(a)?;
        let b = self.check_vertex(b)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        if self.get(a, b) != NO_EDGE {
            trace!(a, b, "edge already present, insertion ignored");
            return Ok(false);
        }

        self.connect(a, b, weight);
        Ok(true)
    }

    /// The row of the weight matrix for `vertex`; index `i` holds the
    /// weight toward vertex `i`, `NO_EDGE` included.
    pub fn adjacency_row(&self, vertex: usize) -> Result<&[Weight]> {
        let vertex = self.check_vertex(vertex)?;
        Ok(self.row(vertex))
    }

    /// Iterates over the vertices adjacent to `vertex` in increasing
    /// index order.
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl DoubleEndedIterator<Item = usize> + '_> {
        let vertex = self.check_vertex(vertex)?;
        Ok(self.adjacent(vertex))
    }

    /// Iterates over every edge as `(i, j, weight)` with `i <= j`, in
    /// row-major scan order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let n = self.num_vertices;
        (0..n).flat_map(move |i| {
            (i..n).filter_map(move |j| {
                let w = self.get(i, j);
                if w != NO_EDGE {
                    Some((i, j, w))
                } else {
                    None
                }
            })
        })
    }

    pub(crate) fn get(&self, a: usize, b: usize) -> Weight {
        self.weights[a * self.num_vertices + b]
    }

    pub(crate) fn row(&self, vertex: usize) -> &[Weight] {
        let start = vertex * self.num_vertices;
        &self.weights[start..start + self.num_vertices]
    }

    pub(crate) fn adjacent(
        &self,
        vertex: usize,
    ) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != NO_EDGE)
            .map(|(ix, _)| ix)
    }

    /// Sets both directions of an absent edge and counts it. Indices
    /// and weight must already be validated.
    pub(crate) fn connect(&mut self, a: usize, b: usize, weight: Weight) {
        debug_assert!(a < self.num_vertices && b < self.num_vertices);
        debug_assert!(self.get(a, b) == NO_EDGE);
        let n = self.num_vertices;
        self.weights[a * n + b] = weight;
        self.weights[b * n + a] = weight;
        self.num_edges += 1;
    }

    fn disconnect(&mut self, a: usize, b: usize) -> Weight {
        let n = self.num_vertices;
        let weight = self.weights[a * n + b];
        debug_assert!(weight != NO_EDGE);
        self.weights[a * n + b] = NO_EDGE;
        self.weights[b * n + a] = NO_EDGE;
        self.num_edges -= 1;
        weight
    }
}

/// Temporarily removes edges from a graph. Every edge removed through
/// the guard is put back, with its original weight, when the guard is
/// dropped.
pub(crate) struct EdgeRemoval<'a> {
    graph: &'a mut MatrixGraph,
    removed: Vec<(usize, usize, Weight)>,
}

impl<'a> EdgeRemoval<'a> {
    pub fn new(graph: &'a mut MatrixGraph) -> EdgeRemoval<'a> {
        EdgeRemoval {
            graph,
            removed: Vec::new(),
        }
    }

    /// Removes the edge between `a` and `b`, returning its weight, or
    /// `None` if there was no such edge.
    pub fn remove(&mut self, a: usize, b: usize) -> Result<Option<Weight>> {
        let a = self.graph.check_vertex(a)?;
        let b = self.graph.check_vertex(b)?;
        if self.graph.get(a, b) == NO_EDGE {
            return Ok(None);
        }
        let weight = self.graph.disconnect(a, b);
        self.removed.push((a, b, weight));
        Ok(Some(weight))
    }

    /// Removes every edge incident to `vertex`, returning how many
    /// were removed.
    pub fn isolate(&mut self, vertex: usize) -> Result<usize> {
        let vertex = self.graph.check_vertex(vertex)?;
        let incident: Vec<usize> = self.graph.adjacent(vertex).collect();
        for &other in incident.iter() {
            let weight = self.graph.disconnect(vertex, other);
            self.removed.push((vertex, other, weight));
        }
        Ok(incident.len())
    }
}

impl<'a> Deref for EdgeRemoval<'a> {
    type Target = MatrixGraph;

    fn deref(&self) -> &MatrixGraph {
        self.graph
    }
}

impl<'a> Drop for EdgeRemoval<'a> {
    fn drop(&mut self) {
        while let Some((a, b, weight)) = self.removed.pop() {
            self.graph.connect(a, b, weight);
        }
    }
}
