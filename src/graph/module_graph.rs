use super::Module;
use petgraph::{
    algo::tarjan_scc,
    graph::{Graph, NodeIndex},
    visit::{Dfs, EdgeRef, Reversed},
};
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::Arc,
};

/// Modules of one build and their resolved references. It may contain
/// cycles.
#[derive(Clone, Debug, Default)]
pub struct ModuleGraph {
    graph: Graph<Arc<Module>, Arc<str>>,
    indexes: HashMap<PathBuf, NodeIndex>,
    entries: Vec<(Arc<str>, NodeIndex)>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: Arc<Module>) -> NodeIndex {
        if let Some(&index) = self.indexes.get(module.path()) {
            return index;
        }

        let path = module.path().to_owned();
        let index = self.graph.add_node(module);
        self.indexes.insert(path, index);

        index
    }

    pub fn add_dependency(&mut self, importer: NodeIndex, target: NodeIndex, reference: &str) {
        if !self
            .graph
            .edges(importer)
            .any(|edge| &**edge.weight() == reference)
        {
            self.graph.add_edge(importer, target, reference.into());
        }
    }

    pub fn add_entry(&mut self, name: Arc<str>, index: NodeIndex) {
        self.entries.push((name, index));
    }

    pub fn index(&self, path: &Path) -> Option<NodeIndex> {
        self.indexes.get(path).copied()
    }

    pub fn module(&self, index: NodeIndex) -> &Arc<Module> {
        &self.graph[index]
    }

    pub fn modules(&self) -> impl Iterator<Item = (NodeIndex, &Arc<Module>)> {
        self.graph
            .node_indices()
            .map(|index| (index, &self.graph[index]))
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn entries(&self) -> &[(Arc<str>, NodeIndex)] {
        &self.entries
    }

    pub fn dependencies(&self, index: NodeIndex) -> Vec<(&str, NodeIndex)> {
        let references = self.graph[index].references();
        let mut dependencies = self
            .graph
            .edges(index)
            .map(|edge| (&**edge.weight(), edge.target()))
            .collect::<Vec<_>>();

        dependencies.sort_by_key(|(reference, _)| {
            references
                .iter()
                .position(|other| other == reference)
                .unwrap_or(usize::MAX)
        });

        dependencies
    }

    pub fn reachable(&self, index: NodeIndex) -> HashSet<NodeIndex> {
        let mut dfs = Dfs::new(&self.graph, index);
        let mut indexes = HashSet::new();

        while let Some(index) = dfs.next(&self.graph) {
            indexes.insert(index);
        }

        indexes
    }

    pub fn affected_paths<'a>(
        &self,
        paths: impl IntoIterator<Item = &'a Path>,
    ) -> HashSet<PathBuf> {
        let reversed = Reversed(&self.graph);
        let mut affected = HashSet::new();

        for path in paths {
            affected.insert(path.to_owned());

            let Some(index) = self.index(path) else {
                continue;
            };
            let mut dfs = Dfs::new(reversed, index);

            while let Some(index) = dfs.next(reversed) {
                affected.insert(self.graph[index].path().to_owned());
            }
        }

        affected
    }

    pub fn cycles(&self) -> Vec<Vec<NodeIndex>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&index| self.graph.contains_edge(index, index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn module(path: &str, references: &[&str]) -> Arc<Module> {
        Module::new(
            path,
            "",
            references.iter().map(|reference| reference.to_string()),
            vec![],
            vec![],
        )
        .into()
    }

    #[test]
    fn deduplicate_modules_by_path() {
        let mut graph = ModuleGraph::new();

        let one = graph.add_module(module("/a.js", &[]));
        let other = graph.add_module(module("/a.js", &[]));

        assert_eq!(one, other);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn deduplicate_dependencies_by_reference() {
        let mut graph = ModuleGraph::new();
        let a = graph.add_module(module("/a.js", &["./b"]));
        let b = graph.add_module(module("/b.js", &[]));

        graph.add_dependency(a, b, "./b");
        graph.add_dependency(a, b, "./b");

        assert_eq!(graph.dependencies(a), [("./b", b)]);
    }

    #[test]
    fn sort_dependencies_in_source_order() {
        let mut graph = ModuleGraph::new();
        let a = graph.add_module(module("/a.js", &["./b", "./c", "./d"]));
        let b = graph.add_module(module("/b.js", &[]));
        let c = graph.add_module(module("/c.js", &[]));
        let d = graph.add_module(module("/d.js", &[]));

        graph.add_dependency(a, c, "./c");
        graph.add_dependency(a, d, "./d");
        graph.add_dependency(a, b, "./b");

        assert_eq!(
            graph.dependencies(a),
            [("./b", b), ("./c", c), ("./d", d)]
        );
    }

    #[test]
    fn find_reachable_modules_in_cycle() {
        let mut graph = ModuleGraph::new();
        let a = graph.add_module(module("/a.js", &["./b"]));
        let b = graph.add_module(module("/b.js", &["./a"]));
        let c = graph.add_module(module("/c.js", &[]));

        graph.add_dependency(a, b, "./b");
        graph.add_dependency(b, a, "./a");

        assert_eq!(graph.reachable(a), HashSet::from([a, b]));
        assert_eq!(graph.reachable(c), HashSet::from([c]));
        assert_eq!(graph.cycles().len(), 1);
    }

    #[test]
    fn find_affected_paths() {
        let mut graph = ModuleGraph::new();
        let index = graph.add_module(module("/index.js", &["./a", "./b"]));
        let a = graph.add_module(module("/a.js", &["./c"]));
        let b = graph.add_module(module("/b.js", &[]));
        let c = graph.add_module(module("/c.js", &[]));

        graph.add_dependency(index, a, "./a");
        graph.add_dependency(index, b, "./b");
        graph.add_dependency(a, c, "./c");

        assert_eq!(
            graph.affected_paths([Path::new("/c.js")]),
            HashSet::from(["/c.js", "/a.js", "/index.js"].map(PathBuf::from))
        );
        assert_eq!(
            graph.affected_paths([Path::new("/new.js")]),
            HashSet::from([PathBuf::from("/new.js")])
        );
    }
}
