use crate::infrastructure::FileSystemError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmitError {
    FileSystem(FileSystemError),
    InvalidOutputDirectory(PathBuf),
    InvalidTemplate(PathBuf),
    ModuleIdNotFound(PathBuf),
    Other(String),
}

impl Error for EmitError {}

impl Display for EmitError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::FileSystem(error) => write!(formatter, "{error}"),
            Self::InvalidOutputDirectory(path) => {
                write!(formatter, "invalid output directory {}", path.display())
            }
            Self::InvalidTemplate(path) => {
                write!(formatter, "template {} is not valid UTF-8", path.display())
            }
            Self::ModuleIdNotFound(path) => {
                write!(formatter, "module id not assigned to {}", path.display())
            }
            Self::Other(message) => write!(formatter, "{message}"),
        }
    }
}

impl From<FileSystemError> for EmitError {
    fn from(error: FileSystemError) -> Self {
        Self::FileSystem(error)
    }
}

impl From<io::Error> for EmitError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}
