mod identity;
mod partition;
mod runtime;

pub use self::{
    identity::{module_ids, relative_path},
    partition::{Chunk, ChunkKind, ChunkSet, assign_chunks},
    runtime::{EVENTS_PATH, runtime_source},
};
