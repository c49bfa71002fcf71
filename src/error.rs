use thiserror::Error;

/// Errors raised by graph queries and mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid vertex {vertex}: graph has {num_vertices} vertices")]
    InvalidVertex { vertex: usize, num_vertices: usize },

    #[error("invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
