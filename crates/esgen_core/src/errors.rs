use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsgenError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("membership probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

pub type Result<T> = std::result::Result<T, EsgenError>;
