use std::fmt;
use std::io;

/// Custom error type for the FontPak library
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Weight-table TOML parse errors
    Parse(toml::de::Error),
    /// Configuration errors
    Config(String),
    /// Collection assembly errors
    Collection(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Config(_) | Error::Collection(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(err) => write!(f, "Invalid weights config: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Collection(msg) => write!(f, "Collection error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}

/// Result type alias for FontPak operations
pub type Result<T> = std::result::Result<T, Error>;
