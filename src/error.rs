// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Dataset(String),
    Fetch(FetchError),
}

/// Failure of a single request against the recipe API.
///
/// These never reach the user: the recipe store absorbs them and
/// contributes an empty result for the affected unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS or TLS failure before a response arrived
    Network(String),

    /// The server answered with a non-success status code
    Status(u16),

    /// The body could not be decoded as the expected JSON envelope
    Parse(String),
}

impl FetchError {
    /// Classifies a `reqwest` error into the matching variant.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            FetchError::Parse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Dataset(e) => write!(f, "Dataset Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Dataset(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
