use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("submission rejected: {0}")]
    Backend(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("submission cancelled")]
    Cancelled,
}
