pub mod articulation;
pub mod bridges;
pub mod center;
pub mod connectivity;
pub mod dijkstra;
pub mod floyd;

pub use articulation::{articulation_points, articulation_points_by_components};
pub use bridges::bridges;
pub use center::{center, Center};
pub use connectivity::{component_count, components, is_connected};
pub use dijkstra::{dijkstra, ShortestPaths};
pub use floyd::{floyd_warshall, AllPairs};

use crate::graph::Weight;

/// A walk through the graph together with its total weight. The
/// first vertex is the origin and the last the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub vertices: Vec<usize>,
    pub distance: Weight,
}
