use super::{Module, ModuleGraph, resolve};
use crate::{
    build::BuildError,
    context::Context,
    debug,
    ir::{Configuration, PassthroughKind},
    transform::{
        self, Dependency, TransformError, TransformOutput, TransformRegistry, pass_asset,
        pass_module,
    },
};
use dashmap::DashMap;
use futures::future::try_join_all;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{spawn, sync::Semaphore};

const PASSTHROUGH_NAME: &str = "passthrough";

pub type ModuleCache = DashMap<PathBuf, Arc<Module>>;

type LoadedModule = (Arc<Module>, Vec<(String, PathBuf)>);

/// Builds a module graph from entries by waves. Modules of a wave are
/// loaded concurrently and the graph is assembled between waves.
pub async fn build_graph(
    context: &Arc<Context>,
    configuration: &Arc<Configuration>,
    registry: &Arc<TransformRegistry>,
    cache: &Arc<ModuleCache>,
) -> Result<ModuleGraph, BuildError> {
    let semaphore = Arc::new(Semaphore::new(context.options().job_limit()));
    let mut graph = ModuleGraph::new();
    let mut queued = HashSet::new();
    let mut wave = vec![];
    let mut entries = vec![];
    let mut edges = vec![];

    for entry in configuration.entries() {
        let path = context
            .file_system()
            .canonicalize_path(entry.path())
            .await?;

        if queued.insert(path.clone()) {
            wave.push(path.clone());
        }

        entries.push((entry.name().clone(), path));
    }

    while !wave.is_empty() {
        let modules = try_join_all(wave.drain(..).map(|path| {
            let context = context.clone();
            let configuration = configuration.clone();
            let registry = registry.clone();
            let cache = cache.clone();
            let semaphore = semaphore.clone();

            let handle = spawn(async move {
                let _permit = semaphore.acquire().await?;

                load_module(&context, &configuration, &registry, &cache, &path).await
            });

            async move { handle.await? }
        }))
        .await?;

        for (module, dependencies) in modules {
            let index = graph.add_module(module);

            for (reference, path) in dependencies {
                if queued.insert(path.clone()) {
                    wave.push(path.clone());
                }

                edges.push((index, reference, path));
            }
        }
    }

    for (importer, reference, path) in edges {
        if let Some(target) = graph.index(&path) {
            graph.add_dependency(importer, target, &reference);
        }
    }

    for (name, path) in entries {
        if let Some(index) = graph.index(&path) {
            graph.add_entry(name, index);
        }
    }

    for cycle in graph.cycles() {
        debug!(
            context,
            "circular dependency: {}",
            cycle
                .iter()
                .map(|&index| graph.module(index).path().display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
    }

    Ok(graph)
}

async fn load_module(
    context: &Context,
    configuration: &Configuration,
    registry: &TransformRegistry,
    cache: &ModuleCache,
    path: &Path,
) -> Result<LoadedModule, BuildError> {
    let cached = cache.get(path).map(|module| module.value().clone());
    let module = if let Some(module) = cached {
        module
    } else {
        let module = Arc::new(transform_module(context, configuration, registry, path).await?);
        cache.insert(path.into(), module.clone());
        module
    };

    let mut dependencies = vec![];

    // References are resolved on every build as files may appear or vanish.
    for reference in module.references() {
        dependencies.push((
            reference.clone(),
            resolve(
                context.file_system(),
                configuration.root_directory(),
                configuration.resolution(),
                path,
                reference,
            )
            .await?,
        ));
    }

    Ok((module, dependencies))
}

async fn transform_module(
    context: &Context,
    configuration: &Configuration,
    registry: &TransformRegistry,
    path: &Path,
) -> Result<Module, BuildError> {
    let source = context.file_system().read_file(path).await?;
    let transform_context = configuration.transform_context();

    let (output, transforms) = if let Some(rule) = configuration.rules().find(path) {
        let transforms = rule
            .transforms()
            .iter()
            .map(|name| {
                registry.get(name).cloned().ok_or_else(|| {
                    TransformError::new(path, name, "transform not registered")
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        (
            transform::apply(&transforms, path, &source, transform_context)?,
            rule.transforms().to_vec(),
        )
    } else {
        (
            match configuration
                .passthrough()
                .classify(path, configuration.resolution().extensions())
            {
                Some(PassthroughKind::Module) => pass_module(path, &source)?,
                Some(PassthroughKind::Asset) => pass_asset(path, &source, transform_context)?,
                None => return Err(BuildError::UnhandledFileType(path.into())),
            },
            vec![],
        )
    };

    debug!(
        context,
        "transformed {} with [{}]",
        path.display(),
        transforms.join(" ")
    );

    let (content, dependencies) = TransformOutput::into_parts(output);
    let content = String::from_utf8(content).map_err(|_| {
        TransformError::new(
            path,
            transforms
                .last()
                .map(|name| &**name)
                .unwrap_or(PASSTHROUGH_NAME),
            "module content is not valid UTF-8",
        )
    })?;
    let mut references = vec![];
    let mut assets = vec![];

    for dependency in dependencies {
        match dependency {
            Dependency::Module(reference) => references.push(reference),
            Dependency::Asset(asset) => assets.push(asset),
        }
    }

    Ok(Module::new(path, content, references, assets, transforms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compile::{Overrides, compile},
        infrastructure::{NullConsole, OsFileSystem},
        options::Options,
        parse::parse,
    };
    use pretty_assertions::assert_eq;
    use std::{collections::HashMap, fs};
    use tempfile::{TempDir, tempdir};

    fn project(configuration: &str, files: &[(&str, &str)]) -> (TempDir, Arc<Configuration>) {
        let directory = tempdir().unwrap();
        let root = directory.path().canonicalize().unwrap();

        for (path, content) in files {
            let path = root.join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        let configuration = compile(
            &parse(configuration).unwrap(),
            &root,
            &HashMap::new(),
            &Overrides::default(),
            &TransformRegistry::default(),
        )
        .unwrap();

        (directory, configuration.into())
    }

    async fn build(configuration: &Arc<Configuration>) -> Result<ModuleGraph, BuildError> {
        build_graph(
            &Context::new(NullConsole, OsFileSystem::new(), Options::default()).into(),
            configuration,
            &TransformRegistry::default().into(),
            &Default::default(),
        )
        .await
    }

    #[tokio::test]
    async fn build_single_module() {
        let (_directory, configuration) =
            project("entry main = index.js\n", &[("index.js", "console.log(1);")]);

        let graph = build(&configuration).await.unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.entries().len(), 1);
        assert_eq!(
            graph.module(graph.entries()[0].1).content(),
            "console.log(1);"
        );
    }

    #[tokio::test]
    async fn collapse_diamond_dependencies() {
        let (_directory, configuration) = project(
            "entry main = index.js\n",
            &[
                ("index.js", "require('./a'); require('./b');"),
                ("a.js", "require('./c');"),
                ("b.js", "require('./c.js');"),
                ("c.js", ""),
            ],
        );

        let graph = build(&configuration).await.unwrap();
        let c = graph
            .index(&configuration.root_directory().join("c.js"))
            .unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(
            graph
                .modules()
                .filter(|(index, _)| graph
                    .dependencies(*index)
                    .iter()
                    .any(|(_, target)| *target == c))
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn build_cycle() {
        let (_directory, configuration) = project(
            "entry main = a.js\n",
            &[("a.js", "require('./b');"), ("b.js", "require('./a');")],
        );

        let graph = build(&configuration).await.unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.cycles().len(), 1);
    }

    #[tokio::test]
    async fn apply_matching_rule() {
        let (_directory, configuration) = project(
            "entry main = index.js\nrule text\n  test = \\.txt$\n  use = text\n",
            &[("index.js", "require('./a.txt');"), ("a.txt", "foo")],
        );

        let graph = build(&configuration).await.unwrap();
        let module = graph.module(
            graph
                .index(&configuration.root_directory().join("a.txt"))
                .unwrap(),
        );

        assert_eq!(module.content(), "module.exports = \"foo\";");
        assert_eq!(module.transforms(), [Arc::<str>::from("text")]);
    }

    #[tokio::test]
    async fn skip_excluded_file() {
        let (_directory, configuration) = project(
            "entry main = index.js\nrule script\n  test = \\.js$\n  exclude = vendor\n  use = script\n",
            &[
                ("index.js", "require('./vendor/lib.js');"),
                ("vendor/lib.js", "module.exports = 1;"),
            ],
        );

        let graph = build(&configuration).await.unwrap();
        let module = graph.module(
            graph
                .index(&configuration.root_directory().join("vendor/lib.js"))
                .unwrap(),
        );

        assert_eq!(module.content(), "module.exports = 1;");
        assert!(module.transforms().is_empty());
    }

    #[tokio::test]
    async fn fail_with_unhandled_file_type() {
        let (_directory, configuration) = project(
            "entry main = index.js\n",
            &[("index.js", "require('./logo.png');"), ("logo.png", "")],
        );

        assert_eq!(
            build(&configuration).await.unwrap_err(),
            BuildError::UnhandledFileType(configuration.root_directory().join("logo.png"))
        );
    }

    #[tokio::test]
    async fn reuse_cached_modules() {
        let (_directory, configuration) =
            project("entry main = index.js\n", &[("index.js", "1;")]);
        let context = Arc::new(Context::new(
            NullConsole,
            OsFileSystem::new(),
            Options::default(),
        ));
        let registry = Arc::new(TransformRegistry::default());
        let cache = Arc::new(ModuleCache::default());
        let path = configuration.root_directory().join("index.js");

        build_graph(&context, &configuration, &registry, &cache)
            .await
            .unwrap();
        fs::write(&path, "2;").unwrap();

        let graph = build_graph(&context, &configuration, &registry, &cache)
            .await
            .unwrap();

        assert_eq!(graph.module(graph.index(&path).unwrap()).content(), "1;");

        cache.remove(&path);

        let graph = build_graph(&context, &configuration, &registry, &cache)
            .await
            .unwrap();

        assert_eq!(graph.module(graph.index(&path).unwrap()).content(), "2;");
    }
}
