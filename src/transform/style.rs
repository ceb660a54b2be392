use super::{Dependency, Transform, TransformContext, TransformOutput, decode};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@import\s+(?:url\(\s*)?["']([^"']+)["']\s*\)?[^;\n]*;?"#).unwrap()
});

#[derive(Clone, Copy, Debug, Default)]
pub struct StyleTransform;

impl Transform for StyleTransform {
    fn name(&self) -> &str {
        "style"
    }

    fn transform(
        &self,
        _: &Path,
        content: Vec<u8>,
        _: &TransformContext,
    ) -> Result<TransformOutput, String> {
        let source = decode(content)?;
        let references = IMPORT_PATTERN
            .captures_iter(&source)
            .map(|captures| captures[1].to_owned())
            .collect::<Vec<_>>();
        let style = IMPORT_PATTERN.replace_all(&source, "");
        let style = serde_json::to_string(style.trim()).map_err(|error| error.to_string())?;

        let mut module = references
            .iter()
            .map(|reference| {
                Ok(format!(
                    "require({});\n",
                    serde_json::to_string(reference).map_err(|error| error.to_string())?
                ))
            })
            .collect::<Result<String, String>>()?;

        module.push_str(&format!(
            concat!(
                "(function () {{\n",
                "  var style = document.createElement(\"style\");\n",
                "  style.textContent = {};\n",
                "  document.head.appendChild(style);\n",
                "}})();\n",
            ),
            style
        ));

        Ok(TransformOutput::new(
            module.into_bytes(),
            references.into_iter().map(Dependency::Module).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn transform_style() {
        let output = StyleTransform
            .transform(
                Path::new("/src/app.css"),
                b"body { color: red; }\n".to_vec(),
                &TransformContext::default(),
            )
            .unwrap();

        assert!(output.dependencies().is_empty());
        assert!(
            String::from_utf8(output.content().to_vec())
                .unwrap()
                .contains("style.textContent = \"body { color: red; }\";")
        );
    }

    #[test]
    fn transform_style_imports() {
        let output = StyleTransform
            .transform(
                Path::new("/src/app.css"),
                b"@import \"./reset.css\";\n@import url('./theme.css') screen;\nbody {}\n"
                    .to_vec(),
                &TransformContext::default(),
            )
            .unwrap();
        let module = String::from_utf8(output.content().to_vec()).unwrap();

        assert_eq!(
            output.dependencies(),
            [
                Dependency::Module("./reset.css".into()),
                Dependency::Module("./theme.css".into())
            ]
        );
        assert!(module.starts_with("require(\"./reset.css\");\nrequire(\"./theme.css\");\n"));
        assert!(module.contains("style.textContent = \"body {}\";"));
    }
}
