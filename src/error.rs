use crate::config;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Request(reqwest::Error),
    Json(serde_json::Error),
    Config(config::Error),
    /// The browser could not be launched or driven.
    Driver(String),
    /// The page loaded but no menu could be read from it. Carries a message
    /// meant for the chat user.
    Extraction(String),
    Join(String),
    Slack(String),
}

impl Error {
    pub fn driver_error(msg: impl Display) -> Self {
        Self::Driver(msg.to_string())
    }

    pub fn extraction_error(msg: &str) -> Self {
        Self::Extraction(msg.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Error::Config(e)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::Join(e.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Json(e) => write!(f, "Json error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Driver(msg) => write!(f, "Browser error: {msg}"),
            Error::Extraction(msg) => write!(f, "{msg}"),
            Error::Join(msg) => write!(f, "Task error: {msg}"),
            Error::Slack(msg) => write!(f, "Slack error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
