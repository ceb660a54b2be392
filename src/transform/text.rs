use super::{Transform, TransformContext, TransformOutput, decode, export};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct TextTransform;

impl Transform for TextTransform {
    fn name(&self) -> &str {
        "text"
    }

    fn transform(
        &self,
        _: &Path,
        content: Vec<u8>,
        _: &TransformContext,
    ) -> Result<TransformOutput, String> {
        Ok(TransformOutput::new(export(&decode(content)?)?, vec![]))
    }
}
