use crate::{hash::hash_content, transform::Asset};
use itertools::Itertools;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    path: PathBuf,
    hash: String,
    content: Arc<str>,
    references: Vec<String>,
    assets: Vec<Asset>,
    transforms: Vec<Arc<str>>,
}

impl Module {
    pub fn new(
        path: impl Into<PathBuf>,
        content: impl Into<Arc<str>>,
        references: impl IntoIterator<Item = String>,
        assets: Vec<Asset>,
        transforms: Vec<Arc<str>>,
    ) -> Self {
        let content = content.into();

        Self {
            path: path.into(),
            hash: hash_content(content.as_bytes()),
            content,
            references: references.into_iter().unique().collect(),
            assets,
            transforms,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn transforms(&self) -> &[Arc<str>] {
        &self.transforms
    }
}
