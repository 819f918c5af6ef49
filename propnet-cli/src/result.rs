use propnet_core::NetworkError;
use thiserror::Error;

pub(crate) type PropnetResult<T> = Result<T, PropnetError>;

#[derive(Error, Debug)]
pub(crate) enum PropnetError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The network failed: {0}")]
    Network(#[from] NetworkError),
}
