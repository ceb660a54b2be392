use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformError {
    path: PathBuf,
    transform: String,
    message: String,
}

impl TransformError {
    pub fn new(path: &Path, transform: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            transform: transform.into(),
            message: message.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn transform(&self) -> &str {
        &self.transform
    }
}

impl Error for TransformError {}

impl Display for TransformError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "transform \"{}\" failed on {}: {}",
            &self.transform,
            self.path.display(),
            &self.message
        )
    }
}
