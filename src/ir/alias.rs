use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    prefix: String,
    target: PathBuf,
}

impl Alias {
    pub fn new(prefix: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn apply(&self, reference: &str) -> Option<PathBuf> {
        let rest = reference.strip_prefix(&self.prefix)?;

        if rest.is_empty() {
            Some(self.target.clone())
        } else if let Some(rest) = rest
            .strip_prefix('/')
            .or_else(|| self.prefix.ends_with('/').then_some(rest))
        {
            Some(self.target.join(rest))
        } else {
            None
        }
    }
}
