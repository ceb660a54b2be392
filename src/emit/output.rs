use std::{collections::BTreeMap, sync::Arc};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildOutput {
    files: BTreeMap<String, Arc<[u8]>>,
    chunk_files: Vec<(Arc<str>, String)>,
    document: Option<String>,
}

impl BuildOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &BTreeMap<String, Arc<[u8]>> {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&Arc<[u8]>> {
        self.files.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Arc<[u8]>>) {
        self.files.insert(name.into(), content.into());
    }

    pub fn insert_chunk(
        &mut self,
        chunk: Arc<str>,
        name: impl Into<String>,
        content: impl Into<Arc<[u8]>>,
    ) {
        let name = name.into();

        self.chunk_files.push((chunk, name.clone()));
        self.insert(name, content);
    }

    pub fn insert_document(&mut self, name: impl Into<String>, content: impl Into<Arc<[u8]>>) {
        let name = name.into();

        self.document = Some(name.clone());
        self.insert(name, content);
    }

    pub fn chunk_file(&self, chunk: &str) -> Option<&str> {
        self.chunk_files
            .iter()
            .find(|(name, _)| name.as_ref() == chunk)
            .map(|(_, file)| file.as_str())
    }

    pub fn chunk_files(&self) -> impl Iterator<Item = &str> {
        self.chunk_files.iter().map(|(_, file)| file.as_str())
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
