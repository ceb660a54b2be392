mod asset;
mod context;
mod dependency;
mod error;
mod inline;
mod registry;
mod scanner;
mod script;
mod style;
mod text;

pub use self::{
    asset::AssetTransform,
    context::TransformContext,
    dependency::{Asset, Dependency},
    error::TransformError,
    inline::InlineTransform,
    registry::TransformRegistry,
    scanner::scan_references,
    script::ScriptTransform,
    style::StyleTransform,
    text::TextTransform,
};
use std::{fmt::Debug, path::Path, sync::Arc};

const PASSTHROUGH_NAME: &str = "passthrough";
const INVALID_UTF8_MESSAGE: &str = "content is not valid UTF-8";

pub trait Transform: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn transform(
        &self,
        path: &Path,
        content: Vec<u8>,
        context: &TransformContext,
    ) -> Result<TransformOutput, String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformOutput {
    content: Vec<u8>,
    dependencies: Vec<Dependency>,
}

impl TransformOutput {
    pub fn new(content: Vec<u8>, dependencies: Vec<Dependency>) -> Self {
        Self {
            content,
            dependencies,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn into_parts(self) -> (Vec<u8>, Vec<Dependency>) {
        (self.content, self.dependencies)
    }
}

pub fn apply(
    transforms: &[Arc<dyn Transform>],
    path: &Path,
    content: &[u8],
    context: &TransformContext,
) -> Result<TransformOutput, TransformError> {
    let mut content = content.to_vec();
    let mut dependencies = vec![];

    for transform in transforms {
        let (next, references) = transform
            .transform(path, content, context)
            .map_err(|message| TransformError::new(path, transform.name(), message))?
            .into_parts();

        content = next;
        dependencies.extend(references);
    }

    Ok(TransformOutput::new(content, dependencies))
}

pub fn pass_module(path: &Path, content: &[u8]) -> Result<TransformOutput, TransformError> {
    let source = std::str::from_utf8(content)
        .map_err(|_| TransformError::new(path, PASSTHROUGH_NAME, INVALID_UTF8_MESSAGE))?;

    Ok(TransformOutput::new(
        content.to_vec(),
        scan_references(source)
            .into_iter()
            .map(|reference| Dependency::Module(reference.into()))
            .collect(),
    ))
}

pub fn pass_asset(
    path: &Path,
    content: &[u8],
    context: &TransformContext,
) -> Result<TransformOutput, TransformError> {
    AssetTransform
        .transform(path, content.to_vec(), context)
        .map_err(|message| TransformError::new(path, PASSTHROUGH_NAME, message))
}

fn decode(content: Vec<u8>) -> Result<String, String> {
    String::from_utf8(content).map_err(|_| INVALID_UTF8_MESSAGE.into())
}

fn export(value: &str) -> Result<Vec<u8>, String> {
    Ok(format!(
        "module.exports = {};",
        serde_json::to_string(value).map_err(|error| error.to_string())?
    )
    .into_bytes())
}
