use super::{Transform, TransformContext, TransformOutput, export};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct InlineTransform;

impl Transform for InlineTransform {
    fn name(&self) -> &str {
        "inline"
    }

    fn transform(
        &self,
        path: &Path,
        content: Vec<u8>,
        _: &TransformContext,
    ) -> Result<TransformOutput, String> {
        Ok(TransformOutput::new(
            export(&format!(
                "data:{};base64,{}",
                mime_guess::from_path(path).first_or_octet_stream(),
                STANDARD.encode(content)
            ))?,
            vec![],
        ))
    }
}
