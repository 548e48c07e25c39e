use thiserror::Error;

/// Errors raised by the shifter and the WAV collaborator.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive (or NaN) factor or sample rate.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Malformed or unsupported WAV container.
    #[error("Format error: {0}")]
    Format(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => Error::Io(e),
            other => Error::Format(other.to_string()),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
