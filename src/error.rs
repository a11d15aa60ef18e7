/// Custom error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] confy::ConfyError),
    #[error("notification service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("could not display notification: {0}")]
    DisplayFailure(String),
    #[error("'{0}' was not found")]
    OpenerNotFound(String),
    #[error("Invalid number of arguments called")]
    InvalidArguments,
    #[error("Could not split command '{0}' into shell words")]
    BadCmd(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
