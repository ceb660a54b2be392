use crate::{build::BuildError, infrastructure::FileSystem, ir::Resolution};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const MODULE_DIRECTORY: &str = "node_modules";
const PACKAGE_MANIFEST: &str = "package.json";
const PACKAGE_ENTRY_FIELDS: &[&str] = &["module", "main"];
const INDEX_NAME: &str = "index";

pub async fn resolve(
    file_system: &(dyn FileSystem + Send + Sync),
    root_directory: &Path,
    resolution: &Resolution,
    importer: &Path,
    reference: &str,
) -> Result<PathBuf, BuildError> {
    let directory = importer.parent().unwrap_or(root_directory);

    for base in bases(root_directory, resolution, directory, reference) {
        if let Some(path) = find_file(file_system, &base, resolution.extensions()).await? {
            return Ok(file_system.canonicalize_path(&path).await?);
        }
    }

    Err(BuildError::Resolution {
        importer: importer.into(),
        reference: reference.into(),
    })
}

fn bases(
    root_directory: &Path,
    resolution: &Resolution,
    directory: &Path,
    reference: &str,
) -> Vec<PathBuf> {
    if let Some(path) = resolution
        .aliases()
        .iter()
        .find_map(|alias| alias.apply(reference))
    {
        vec![path]
    } else if reference.starts_with('.') || reference.starts_with('/') {
        vec![directory.join(reference)]
    } else {
        let mut bases = vec![];

        for directory in directory.ancestors() {
            bases.push(directory.join(MODULE_DIRECTORY).join(reference));

            if directory == root_directory {
                break;
            }
        }

        bases
    }
}

async fn find_file(
    file_system: &(dyn FileSystem + Send + Sync),
    base: &Path,
    extensions: &[String],
) -> Result<Option<PathBuf>, BuildError> {
    if let Some(path) = find_candidate(file_system, base, extensions, false).await {
        return Ok(Some(path));
    }

    let manifest = base.join(PACKAGE_MANIFEST);

    if file_system.is_file(&manifest).await {
        if let Some(entry) = package_entry(&file_system.read_file(&manifest).await?) {
            if let Some(path) = find_candidate(file_system, &base.join(entry), extensions, true).await
            {
                return Ok(Some(path));
            }
        }
    }

    Ok(find_candidate(file_system, &base.join(INDEX_NAME), extensions, false).await)
}

async fn find_candidate(
    file_system: &(dyn FileSystem + Send + Sync),
    base: &Path,
    extensions: &[String],
    index: bool,
) -> Option<PathBuf> {
    let mut candidates = vec![base.to_owned()];

    candidates.extend(extensions.iter().map(|extension| append(base, extension)));

    if index {
        candidates.extend(
            extensions
                .iter()
                .map(|extension| append(&base.join(INDEX_NAME), extension)),
        );
    }

    for candidate in candidates {
        if file_system.is_file(&candidate).await {
            return Some(candidate);
        }
    }

    None
}

fn append(path: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(path);
    path.push(extension);
    path.into()
}

fn package_entry(manifest: &[u8]) -> Option<String> {
    let manifest = serde_json::from_slice::<serde_json::Value>(manifest).ok()?;

    PACKAGE_ENTRY_FIELDS
        .iter()
        .find_map(|field| manifest.get(field)?.as_str().map(ToOwned::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infrastructure::OsFileSystem, ir::Alias};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn project(files: &[&str]) -> (TempDir, PathBuf) {
        let directory = tempdir().unwrap();
        let root = directory.path().canonicalize().unwrap();

        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        (directory, root)
    }

    fn resolution(aliases: Vec<Alias>) -> Resolution {
        Resolution::new(aliases, vec![".ts".into(), ".js".into()])
    }

    async fn resolve_in(
        root: &Path,
        resolution: &Resolution,
        importer: &str,
        reference: &str,
    ) -> Result<PathBuf, BuildError> {
        resolve(
            &OsFileSystem::new(),
            root,
            resolution,
            &root.join(importer),
            reference,
        )
        .await
    }

    #[tokio::test]
    async fn resolve_relative_path() {
        let (_directory, root) = project(&["src/index.js", "src/a.js"]);

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/index.js", "./a.js").await,
            Ok(root.join("src/a.js"))
        );
    }

    #[tokio::test]
    async fn resolve_extensions_in_order() {
        let (_directory, root) = project(&["src/index.js", "src/a.js", "src/a.ts"]);

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/index.js", "./a").await,
            Ok(root.join("src/a.ts"))
        );
    }

    #[tokio::test]
    async fn resolve_directory_index() {
        let (_directory, root) = project(&["src/index.js", "src/components/index.js"]);

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/index.js", "./components").await,
            Ok(root.join("src/components/index.js"))
        );
    }

    #[tokio::test]
    async fn resolve_alias_first() {
        let (_directory, root) = project(&["src/index.js", "src/lib/a.js", "node_modules/@/lib/a.js"]);

        assert_eq!(
            resolve_in(
                &root,
                &resolution(vec![Alias::new("@", root.join("src"))]),
                "src/index.js",
                "@/lib/a"
            )
            .await,
            Ok(root.join("src/lib/a.js"))
        );
    }

    #[tokio::test]
    async fn resolve_package_in_ancestor() {
        let (_directory, root) = project(&["src/app/index.js", "node_modules/lib/index.js"]);

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/app/index.js", "lib").await,
            Ok(root.join("node_modules/lib/index.js"))
        );
    }

    #[tokio::test]
    async fn resolve_package_manifest() {
        let (_directory, root) = project(&[
            "src/index.js",
            "node_modules/lib/index.js",
            "node_modules/lib/dist/lib.js",
        ]);
        fs::write(
            root.join("node_modules/lib/package.json"),
            r#"{"main": "dist/lib"}"#,
        )
        .unwrap();

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/index.js", "lib").await,
            Ok(root.join("node_modules/lib/dist/lib.js"))
        );
    }

    #[tokio::test]
    async fn fail_to_resolve_missing_file() {
        let (_directory, root) = project(&["src/index.js"]);

        assert_eq!(
            resolve_in(&root, &resolution(vec![]), "src/index.js", "./missing").await,
            Err(BuildError::Resolution {
                importer: root.join("src/index.js"),
                reference: "./missing".into()
            })
        );
    }

    #[tokio::test]
    async fn fail_to_resolve_package_outside_root() {
        let (_directory, root) = project(&["app/src/index.js", "node_modules/lib/index.js"]);
        let app = root.join("app");

        assert!(
            resolve_in(&app, &resolution(vec![]), "src/index.js", "lib")
                .await
                .is_err()
        );
    }
}
