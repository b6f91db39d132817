use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdgeLbError>;

#[derive(Error, Debug)]
pub enum EdgeLbError {
    #[error("malformed selector: {0}")]
    MalformedInput(serde_json::Error),

    #[error("failed to encode selector: {0}")]
    EncodeError(serde_json::Error),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    ConfigError(#[from] envy::Error),
}

impl EdgeLbError {
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, EdgeLbError::MalformedInput(_))
    }
}
