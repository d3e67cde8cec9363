use thiserror::Error;

use ct_core::CtError;

#[derive(Debug, Error)]
pub enum DiffusionError {
    #[error("no data: diffusion needs at least one contact")]
    NoContacts,

    #[error(transparent)]
    Time(#[from] CtError),
}

pub type DiffusionResult<T> = Result<T, DiffusionError>;
