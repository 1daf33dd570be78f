use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("empty input")]
    EmptyInput,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
