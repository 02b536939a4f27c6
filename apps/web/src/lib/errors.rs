use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Storage(String),
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
            AppError::Dom(message) => write!(formatter, "Page error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for auth_forms::Error {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Storage(message) => Self::Storage(message),
            other => Self::Backend(other.to_string()),
        }
    }
}
