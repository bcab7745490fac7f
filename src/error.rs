use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The label was never added to the graph.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
