use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for PlateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type PlateResult<T> = Result<T, PlateError>;
