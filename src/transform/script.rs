use super::{Dependency, Transform, TransformContext, TransformOutput, decode, scan_references};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptTransform;

impl Transform for ScriptTransform {
    fn name(&self) -> &str {
        "script"
    }

    fn transform(
        &self,
        _: &Path,
        content: Vec<u8>,
        context: &TransformContext,
    ) -> Result<TransformOutput, String> {
        let source = decode(content)?;
        let source = context.replace_definitions(&source).into_owned();
        let dependencies = scan_references(&source)
            .into_iter()
            .map(|reference| Dependency::Module(reference.into()))
            .collect();

        Ok(TransformOutput::new(source.into_bytes(), dependencies))
    }
}
