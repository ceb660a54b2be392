use super::{module_ids, relative_path};
use crate::{graph::ModuleGraph, ir::Optimization};
use petgraph::graph::NodeIndex;
use std::{
    collections::{BTreeSet, HashMap},
    path::Path,
    sync::Arc,
};

pub const RUNTIME_CHUNK_NAME: &str = "runtime";
pub const VENDOR_CHUNK_NAME: &str = "vendors";
pub const COMMON_CHUNK_NAME: &str = "common";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkKind {
    Runtime,
    Vendor,
    Common,
    Entry,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chunk {
    name: Arc<str>,
    kind: ChunkKind,
    modules: Vec<NodeIndex>,
    entry: Option<NodeIndex>,
}

impl Chunk {
    pub fn new(
        name: impl Into<Arc<str>>,
        kind: ChunkKind,
        modules: Vec<NodeIndex>,
        entry: Option<NodeIndex>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            modules,
            entry,
        }
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    pub fn modules(&self) -> &[NodeIndex] {
        &self.modules
    }

    pub fn entry(&self) -> Option<NodeIndex> {
        self.entry
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
    module_ids: HashMap<NodeIndex, String>,
}

impl ChunkSet {
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn module_id(&self, index: NodeIndex) -> Option<&str> {
        self.module_ids.get(&index).map(String::as_str)
    }

    pub fn chunk(&self, name: &str) -> Option<&Chunk> {
        self.chunks
            .iter()
            .find(|chunk| chunk.name().as_ref() == name)
    }

    pub fn entry_chunks(&self, entry: &str) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |chunk| match chunk.kind() {
            ChunkKind::Entry => chunk.name().as_ref() == entry,
            _ => true,
        })
    }
}

/// Partitions modules into the runtime chunk, the vendor chunk, the common
/// chunk and one chunk per entry. Every module belongs to exactly one chunk.
///
/// Vendor modules go to the vendor chunk even if some entry reaches them
/// directly. Other modules reached by more than one entry go to the common
/// chunk.
pub fn assign_chunks(
    graph: &ModuleGraph,
    root_directory: &Path,
    optimization: &Optimization,
) -> ChunkSet {
    let module_ids = module_ids(graph, root_directory, optimization.deterministic_ids());
    let mut owners = HashMap::<NodeIndex, BTreeSet<usize>>::new();

    for (entry_index, (_, index)) in graph.entries().iter().enumerate() {
        for module in graph.reachable(*index) {
            owners.entry(module).or_default().insert(entry_index);
        }
    }

    let mut modules = owners.into_iter().collect::<Vec<_>>();
    modules.sort_by_cached_key(|(index, _)| relative_path(root_directory, graph.module(*index).path()));

    let mut vendor = vec![];
    let mut common = vec![];
    let mut entries = vec![vec![]; graph.entries().len()];

    for (index, owners) in modules {
        let path = graph.module(index).path().to_string_lossy();

        if optimization.split_vendor() && optimization.vendor().is_match(&path) {
            vendor.push(index);
        } else if let (Some(&owner), 1) = (owners.first(), owners.len()) {
            entries[owner].push(index);
        } else {
            common.push(index);
        }
    }

    let mut chunks = vec![Chunk::new(
        RUNTIME_CHUNK_NAME,
        ChunkKind::Runtime,
        vec![],
        None,
    )];

    if !vendor.is_empty() {
        chunks.push(Chunk::new(VENDOR_CHUNK_NAME, ChunkKind::Vendor, vendor, None));
    }

    if !common.is_empty() {
        chunks.push(Chunk::new(COMMON_CHUNK_NAME, ChunkKind::Common, common, None));
    }

    chunks.extend(
        graph
            .entries()
            .iter()
            .zip(entries)
            .map(|((name, index), modules)| {
                Chunk::new(name.clone(), ChunkKind::Entry, modules, Some(*index))
            }),
    );

    ChunkSet { chunks, module_ids }
}
