use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no data: the contact graph has no edges")]
    EmptyGraph,

    #[error("no data: no node has a non-zero clustering coefficient")]
    NoClustering,
}

pub type GraphResult<T> = Result<T, GraphError>;
