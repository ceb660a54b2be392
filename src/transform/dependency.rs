use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dependency {
    Module(String),
    Asset(Asset),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    file_name: String,
    content: Arc<[u8]>,
}

impl Asset {
    pub fn new(file_name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn shared_content(&self) -> &Arc<[u8]> {
        &self.content
    }
}
