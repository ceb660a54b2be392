use super::{BuildOutput, EmitError};
use crate::{context::Context, debug, infrastructure::FileSystem, ir::is_within};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};

const STAGING_SUFFIX: &str = "weft-staging";
const PREVIOUS_SUFFIX: &str = "weft-previous";

/// Replaces an output directory with build output. Files are written into a
/// staging directory first so that the output directory is either fully
/// updated or left untouched. A directory holding the project root is never
/// replaced.
pub async fn write_output(
    context: &Context,
    directory: &Path,
    root_directory: &Path,
    output: &BuildOutput,
) -> Result<(), EmitError> {
    if is_within(root_directory, directory) {
        return Err(EmitError::InvalidOutputDirectory(directory.into()));
    }

    let file_system = context.file_system();
    let staging = sibling(directory, STAGING_SUFFIX)?;
    let previous = sibling(directory, PREVIOUS_SUFFIX)?;

    for path in [&staging, &previous] {
        if file_system.exists(path).await {
            file_system.remove_directory(path).await?;
        }
    }

    if let Err(error) = write_files(file_system, &staging, output).await {
        remove_staging(file_system, &staging).await;
        return Err(error);
    }

    let exists = file_system.exists(directory).await;

    if exists {
        if let Err(error) = file_system.rename(directory, &previous).await {
            remove_staging(file_system, &staging).await;
            return Err(error.into());
        }
    }

    if let Err(error) = file_system.rename(&staging, directory).await {
        if exists {
            file_system.rename(&previous, directory).await?;
        }

        remove_staging(file_system, &staging).await;
        return Err(error.into());
    }

    if exists {
        file_system.remove_directory(&previous).await?;
    }

    debug!(
        context,
        "wrote {} files to {}",
        output.len(),
        directory.display()
    );

    Ok(())
}

async fn write_files(
    file_system: &(dyn FileSystem + Send + Sync),
    directory: &Path,
    output: &BuildOutput,
) -> Result<(), EmitError> {
    file_system.create_directory(directory).await?;

    try_join_all(
        output
            .files()
            .iter()
            .map(|(name, content)| async move {
                file_system.write_file(&directory.join(name), content).await
            }),
    )
    .await?;

    Ok(())
}

async fn remove_staging(file_system: &(dyn FileSystem + Send + Sync), staging: &Path) {
    // Cleanup errors are shadowed by the original one.
    if file_system.exists(staging).await {
        let _ = file_system.remove_directory(staging).await;
    }
}

fn sibling(directory: &Path, suffix: &str) -> Result<PathBuf, EmitError> {
    let name = directory
        .file_name()
        .ok_or_else(|| EmitError::InvalidOutputDirectory(directory.into()))?;

    Ok(directory.with_file_name(format!(".{}.{}", name.to_string_lossy(), suffix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        infrastructure::{FileSystemError, NullConsole, OsFileSystem},
        options::Options,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::{fs, io};
    use tempfile::tempdir;

    #[derive(Debug)]
    struct FailingFileSystem {
        name: &'static str,
        inner: OsFileSystem,
    }

    #[async_trait]
    impl FileSystem for FailingFileSystem {
        async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
            self.inner.read_file(path).await
        }

        async fn is_file(&self, path: &Path) -> bool {
            self.inner.is_file(path).await
        }

        async fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path).await
        }

        async fn canonicalize_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
            self.inner.canonicalize_path(path).await
        }

        async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), FileSystemError> {
            if path.ends_with(self.name) {
                Err(FileSystemError::new(
                    io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                    path,
                ))
            } else {
                self.inner.write_file(path, content).await
            }
        }

        async fn create_directory(&self, path: &Path) -> Result<(), FileSystemError> {
            self.inner.create_directory(path).await
        }

        async fn remove_directory(&self, path: &Path) -> Result<(), FileSystemError> {
            self.inner.remove_directory(path).await
        }

        async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
            self.inner.rename(from, to).await
        }
    }

    fn output(files: &[(&str, &str)]) -> BuildOutput {
        let mut output = BuildOutput::new();

        for (name, content) in files {
            output.insert(*name, content.as_bytes().to_vec());
        }

        output
    }

    fn list(directory: &Path) -> Vec<String> {
        let mut names = fs::read_dir(directory)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[tokio::test]
    async fn write_new_directory() {
        let root = tempdir().unwrap();
        let directory = root.path().join("dist");
        let context = Context::new(NullConsole, OsFileSystem::new(), Options::default());

        write_output(&context, &directory, root.path(), &output(&[("a.js", "a"), ("index.html", "")]))
            .await
            .unwrap();

        assert_eq!(list(&directory), ["a.js", "index.html"]);
        assert_eq!(list(root.path()), ["dist"]);
    }

    #[tokio::test]
    async fn replace_stale_files() {
        let root = tempdir().unwrap();
        let directory = root.path().join("dist");
        let context = Context::new(NullConsole, OsFileSystem::new(), Options::default());

        write_output(&context, &directory, root.path(), &output(&[("old.js", "")]))
            .await
            .unwrap();
        write_output(&context, &directory, root.path(), &output(&[("new.js", "")]))
            .await
            .unwrap();

        assert_eq!(list(&directory), ["new.js"]);
        assert_eq!(list(root.path()), ["dist"]);
    }

    #[tokio::test]
    async fn keep_previous_output_on_failure() {
        let root = tempdir().unwrap();
        let directory = root.path().join("dist");

        write_output(
            &Context::new(NullConsole, OsFileSystem::new(), Options::default()),
            &directory,
            root.path(),
            &output(&[("old.js", "old")]),
        )
        .await
        .unwrap();

        let result = write_output(
            &Context::new(
                NullConsole,
                FailingFileSystem {
                    name: "b.js",
                    inner: OsFileSystem::new(),
                },
                Options::default(),
            ),
            &directory,
            root.path(),
            &output(&[("a.js", ""), ("b.js", "")]),
        )
        .await;

        assert!(matches!(result, Err(EmitError::FileSystem(_))));
        assert_eq!(list(&directory), ["old.js"]);
        assert_eq!(list(root.path()), ["dist"]);
    }

    #[tokio::test]
    async fn leave_nothing_on_first_failure() {
        let root = tempdir().unwrap();
        let directory = root.path().join("dist");

        let result = write_output(
            &Context::new(
                NullConsole,
                FailingFileSystem {
                    name: "a.js",
                    inner: OsFileSystem::new(),
                },
                Options::default(),
            ),
            &directory,
            root.path(),
            &output(&[("a.js", "")]),
        )
        .await;

        assert!(result.is_err());
        assert!(list(root.path()).is_empty());
    }

    #[tokio::test]
    async fn refuse_to_replace_project_root() {
        let root = tempdir().unwrap();
        let source = root.path().join("src/index.js");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, "").unwrap();
        let context = Context::new(NullConsole, OsFileSystem::new(), Options::default());

        for directory in [root.path().to_owned(), root.path().join("src/..")] {
            assert_eq!(
                write_output(&context, &directory, root.path(), &output(&[("a.js", "")])).await,
                Err(EmitError::InvalidOutputDirectory(directory.clone()))
            );
        }

        assert!(source.exists());
    }

    #[test]
    fn reject_root_directory() {
        assert_eq!(
            sibling(Path::new("/"), STAGING_SUFFIX),
            Err(EmitError::InvalidOutputDirectory("/".into()))
        );
    }
}
