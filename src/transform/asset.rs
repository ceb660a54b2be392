use super::{Asset, Dependency, Transform, TransformContext, TransformOutput, export};
use crate::{hash::filename_hash, ir::Mode};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct AssetTransform;

impl Transform for AssetTransform {
    fn name(&self) -> &str {
        "asset"
    }

    fn transform(
        &self,
        path: &Path,
        content: Vec<u8>,
        context: &TransformContext,
    ) -> Result<TransformOutput, String> {
        let file_name = asset_file_name(path, &content, context.mode());

        Ok(TransformOutput::new(
            export(&format!("{}{}", context.public_path(), file_name))?,
            vec![Dependency::Asset(Asset::new(file_name, content))],
        ))
    }
}

pub fn asset_file_name(path: &Path, content: &[u8], mode: Mode) -> String {
    let hash = filename_hash(content);
    let extension = path
        .extension()
        .map(|extension| format!(".{}", extension.to_string_lossy()))
        .unwrap_or_default();

    match mode {
        Mode::Development => format!(
            "{}__{}{}",
            path.file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default(),
            hash,
            extension
        ),
        Mode::Production => format!("{hash}{extension}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_production_asset() {
        assert_eq!(
            asset_file_name(Path::new("/src/logo.png"), b"png", Mode::Production),
            format!("{}.png", filename_hash(b"png"))
        );
    }

    #[test]
    fn name_development_asset() {
        assert_eq!(
            asset_file_name(Path::new("/src/logo.png"), b"png", Mode::Development),
            format!("logo__{}.png", filename_hash(b"png"))
        );
    }

    #[test]
    fn name_asset_without_extension() {
        assert_eq!(
            asset_file_name(Path::new("/LICENSE"), b"MIT", Mode::Production),
            filename_hash(b"MIT")
        );
    }

    #[test]
    fn export_public_url() {
        let context = TransformContext::new(Mode::Production, "/static/", Default::default())
            .unwrap();
        let output = AssetTransform
            .transform(Path::new("/src/logo.png"), b"png".to_vec(), &context)
            .unwrap();
        let file_name = format!("{}.png", filename_hash(b"png"));

        assert_eq!(
            output.content(),
            format!("module.exports = \"/static/{file_name}\";").as_bytes()
        );
        assert_eq!(
            output.dependencies(),
            [Dependency::Asset(Asset::new(file_name, b"png".to_vec()))]
        );
    }
}
