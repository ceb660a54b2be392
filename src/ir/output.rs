use std::path::{Component, Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    directory: PathBuf,
    template: Option<PathBuf>,
}

impl Output {
    pub fn new(directory: impl Into<PathBuf>, template: Option<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            template,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn template(&self) -> Option<&Path> {
        self.template.as_deref()
    }
}

/// Returns `true` if a path is a directory or inside it. Paths are compared
/// after resolving `.` and `..` lexically.
pub fn is_within(path: &Path, directory: &Path) -> bool {
    normalize(path).starts_with(normalize(directory))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            component => normalized.push(component),
        }
    }

    normalized
}
