use crate::build::BuildError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServeError {
    Build(BuildError),
    Other(String),
    Watch(String),
}

impl Error for ServeError {}

impl Display for ServeError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Build(error) => write!(formatter, "{error}"),
            Self::Other(message) => write!(formatter, "{message}"),
            Self::Watch(message) => write!(formatter, "cannot watch files: {message}"),
        }
    }
}

impl From<BuildError> for ServeError {
    fn from(error: BuildError) -> Self {
        Self::Build(error)
    }
}

impl From<io::Error> for ServeError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<notify::Error> for ServeError {
    fn from(error: notify::Error) -> Self {
        Self::Watch(error.to_string())
    }
}
