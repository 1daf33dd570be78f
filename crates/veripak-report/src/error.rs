use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no data to export")]
    NoData,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
