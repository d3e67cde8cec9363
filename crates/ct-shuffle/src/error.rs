use ct_core::Node;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("unrecognized shuffle algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("shuffle algorithm {0:?} is not supported")]
    Unsupported(&'static str),

    #[error("configuration-model shuffle needs an even stub count, but node {0} contacts itself")]
    SelfContact(Node),
}

pub type ShuffleResult<T> = Result<T, ShuffleError>;
