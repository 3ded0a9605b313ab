use dualgraph_core::GraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineGraphError {
    /// A required graph reference was not supplied.
    #[error("{0}")]
    NullArgument(&'static str),

    /// Source and target directedness disagree.
    #[error("invalid graph type: {0}")]
    InvalidGraphType(String),

    /// The target graph rejected an edge.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, LineGraphError>;
