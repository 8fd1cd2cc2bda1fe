use std::fmt;

#[derive(Debug, Clone)]
pub enum AppError {
    Network(String),
    Parse(String),
    Session(String),
    Invalid(String),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(s) => write!(f, "network error: {s}"),
            AppError::Parse(s) => write!(f, "parse error: {s}"),
            AppError::Session(s) => write!(f, "session error: {s}"),
            AppError::Invalid(s) => write!(f, "invalid input: {s}"),
            AppError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for AppError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::Session(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
