use crate::{emit::EmitError, infrastructure::FileSystemError, transform::TransformError};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};
use tokio::{sync::AcquireError, task::JoinError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    Emit(EmitError),
    FileSystem(FileSystemError),
    Other(String),
    Resolution { importer: PathBuf, reference: String },
    Transform(TransformError),
    UnhandledFileType(PathBuf),
}

impl Error for BuildError {}

impl Display for BuildError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Emit(error) => write!(formatter, "{error}"),
            Self::FileSystem(error) => write!(formatter, "{error}"),
            Self::Other(message) => write!(formatter, "{message}"),
            Self::Resolution {
                importer,
                reference,
            } => write!(
                formatter,
                "cannot resolve \"{}\" imported by {}",
                reference,
                importer.display()
            ),
            Self::Transform(error) => write!(formatter, "{error}"),
            Self::UnhandledFileType(path) => {
                write!(formatter, "no rule handles file {}", path.display())
            }
        }
    }
}

impl From<AcquireError> for BuildError {
    fn from(error: AcquireError) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<EmitError> for BuildError {
    fn from(error: EmitError) -> Self {
        Self::Emit(error)
    }
}

impl From<FileSystemError> for BuildError {
    fn from(error: FileSystemError) -> Self {
        Self::FileSystem(error)
    }
}

impl From<io::Error> for BuildError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<JoinError> for BuildError {
    fn from(error: JoinError) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<TransformError> for BuildError {
    fn from(error: TransformError) -> Self {
        Self::Transform(error)
    }
}
