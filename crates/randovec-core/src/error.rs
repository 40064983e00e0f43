use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("required environment variable is not set: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("class already exists: {0}")]
    ClassExists(String),

    #[error("schema operation failed: {0}")]
    Schema(String),

    #[error("batch write failed: {0}")]
    BatchWrite(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Startup errors that end the process before any data is written.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MissingEnv(_) | Error::InvalidConfig(_) | Error::Connection(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
