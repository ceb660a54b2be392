use crate::{graph::ModuleGraph, hash::hash_parts};
use petgraph::graph::NodeIndex;
use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path},
};

const MODULE_ID_LENGTH: usize = 8;
const MODULE_ID_EXTENSION: usize = 2;

/// Assigns an id to every module.
///
/// A deterministic id is a digest of a module's project-relative path and
/// transformed content, so it stays stable while neither changes. Digest
/// prefix collisions are resolved by lengthening ids in path order.
/// Otherwise, ids are project-relative paths.
pub fn module_ids(
    graph: &ModuleGraph,
    root_directory: &Path,
    deterministic: bool,
) -> HashMap<NodeIndex, String> {
    let mut modules = graph
        .modules()
        .map(|(index, module)| (relative_path(root_directory, module.path()), index))
        .collect::<Vec<_>>();
    modules.sort();

    if !deterministic {
        return modules
            .into_iter()
            .map(|(path, index)| (index, path))
            .collect();
    }

    let mut used = HashSet::new();
    let mut ids = HashMap::new();

    for (path, index) in modules {
        let hash = hash_parts([path.as_bytes(), graph.module(index).hash().as_bytes()]);
        let mut length = MODULE_ID_LENGTH;

        while used.contains(&hash[..length]) && length < hash.len() {
            length = (length + MODULE_ID_EXTENSION).min(hash.len());
        }

        let id = hash[..length].to_owned();
        used.insert(id.clone());
        ids.insert(index, id);
    }

    ids
}

pub fn relative_path(root_directory: &Path, path: &Path) -> String {
    path.strip_prefix(root_directory)
        .unwrap_or(path)
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Module;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn graph(modules: &[(&str, &str)]) -> ModuleGraph {
        let mut graph = ModuleGraph::new();

        for (path, content) in modules {
            graph.add_module(Arc::new(Module::new(
                *path,
                *content,
                [],
                vec![],
                vec![],
            )));
        }

        graph
    }

    #[test]
    fn format_relative_path() {
        assert_eq!(
            relative_path(Path::new("/project"), Path::new("/project/src/a.js")),
            "src/a.js"
        );
        assert_eq!(
            relative_path(Path::new("/project"), Path::new("/other/a.js")),
            "other/a.js"
        );
    }

    #[test]
    fn assign_path_ids() {
        let graph = graph(&[("/project/src/a.js", ""), ("/project/b.js", "")]);
        let ids = module_ids(&graph, Path::new("/project"), false);

        assert_eq!(
            ids.values().cloned().collect::<HashSet<_>>(),
            HashSet::from(["src/a.js".to_string(), "b.js".to_string()])
        );
    }

    #[test]
    fn assign_deterministic_ids() {
        let one = graph(&[("/project/a.js", "a"), ("/project/b.js", "b")]);
        let other = graph(&[("/project/b.js", "b"), ("/project/a.js", "a")]);
        let id = |graph: &ModuleGraph, path: &str| {
            module_ids(graph, Path::new("/project"), true)
                [&graph.index(Path::new(path)).unwrap()]
                .clone()
        };

        assert_eq!(id(&one, "/project/a.js"), id(&other, "/project/a.js"));
        assert_eq!(id(&one, "/project/a.js").len(), MODULE_ID_LENGTH);
        assert_ne!(id(&one, "/project/a.js"), id(&one, "/project/b.js"));
    }

    #[test]
    fn change_id_with_content() {
        let one = graph(&[("/project/a.js", "a")]);
        let other = graph(&[("/project/a.js", "b")]);

        assert_ne!(
            module_ids(&one, Path::new("/project"), true),
            module_ids(&other, Path::new("/project"), true)
        );
    }

    #[test]
    fn keep_ids_unique() {
        let paths = (0..1000)
            .map(|index| format!("/project/{index}.js"))
            .collect::<Vec<_>>();
        let graph = graph(&paths.iter().map(|path| (path.as_str(), "")).collect::<Vec<_>>());
        let ids = module_ids(&graph, Path::new("/project"), true);

        assert_eq!(
            ids.values().collect::<HashSet<_>>().len(),
            graph.len()
        );
    }
}
