pub mod algorithm;
pub mod error;
pub mod generators;
pub mod graph;
pub mod state;

pub use algorithm::{AllPairs, Center, Path, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{Edge, MatrixGraph, Weight, DEFAULT_WEIGHT, NO_EDGE};
