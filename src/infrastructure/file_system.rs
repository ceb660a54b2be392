use async_trait::async_trait;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

#[async_trait]
pub trait FileSystem: Debug {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError>;
    async fn is_file(&self, path: &Path) -> bool;
    async fn exists(&self, path: &Path) -> bool;
    async fn canonicalize_path(&self, path: &Path) -> Result<PathBuf, FileSystemError>;
    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), FileSystemError>;
    async fn create_directory(&self, path: &Path) -> Result<(), FileSystemError>;
    async fn remove_directory(&self, path: &Path) -> Result<(), FileSystemError>;
    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem {}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path)
            .await
            .map_err(|error| FileSystemError::new(error, path))
    }

    async fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or_default()
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or_default()
    }

    async fn canonicalize_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        fs::canonicalize(path)
            .await
            .map_err(|error| FileSystemError::new(error, path))
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), FileSystemError> {
        if let Some(directory) = path.parent() {
            self.create_directory(directory).await?;
        }

        fs::write(path, content)
            .await
            .map_err(|error| FileSystemError::new(error, path))
    }

    async fn create_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path)
            .await
            .map_err(|error| FileSystemError::new(error, path))
    }

    async fn remove_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_dir_all(path)
            .await
            .map_err(|error| FileSystemError::new(error, path))
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        fs::rename(from, to)
            .await
            .map_err(|error| FileSystemError::new(error, from))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSystemError {
    kind: io::ErrorKind,
    message: String,
    path: PathBuf,
}

impl FileSystemError {
    pub fn new(error: io::Error, path: &Path) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            path: path.into(),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Error for FileSystemError {}

impl Display for FileSystemError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", &self.message, self.path.display())
    }
}
