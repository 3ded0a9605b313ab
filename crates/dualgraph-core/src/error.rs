use thiserror::Error;

/// Errors raised by graph containers and graph type assertions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("loops not allowed: {0}")]
    LoopsNotAllowed(String),

    #[error("{0}")]
    InvalidGraphType(String),
}
