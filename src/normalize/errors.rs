//! Error normalization.

use crate::error::LogError;

/// One argument to [`Logger::error`](crate::Logger::error).
#[derive(Debug)]
pub enum ErrorArg {
    /// An error value; renders with its cause chain (and backtrace when
    /// one was captured).
    Error(anyhow::Error),
    /// A plain message.
    Text(String),
}

impl ErrorArg {
    pub fn error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ErrorArg::Error(anyhow::Error::new(error))
    }

    /// Display form: the full chain for errors, the text itself otherwise.
    pub fn render(&self) -> String {
        match self {
            ErrorArg::Error(e) => format!("{:?}", e),
            ErrorArg::Text(text) => text.clone(),
        }
    }
}

impl From<anyhow::Error> for ErrorArg {
    fn from(error: anyhow::Error) -> Self {
        ErrorArg::Error(error)
    }
}

impl From<LogError> for ErrorArg {
    fn from(error: LogError) -> Self {
        ErrorArg::error(error)
    }
}

impl From<std::io::Error> for ErrorArg {
    fn from(error: std::io::Error) -> Self {
        ErrorArg::error(error)
    }
}

impl From<&str> for ErrorArg {
    fn from(text: &str) -> Self {
        ErrorArg::Text(text.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(text: String) -> Self {
        ErrorArg::Text(text)
    }
}

/// Render each error, one string per input, in order.
pub fn normalize_errors(errors: &[ErrorArg]) -> Vec<String> {
    errors.iter().map(ErrorArg::render).collect()
}
