mod builder;
mod module;
mod module_graph;
mod resolver;

pub use self::{
    builder::{ModuleCache, build_graph},
    module::Module,
    module_graph::ModuleGraph,
    resolver::resolve,
};
