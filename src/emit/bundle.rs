use super::{BuildOutput, DOCUMENT_NAME, EmitError, render_document};
use crate::{
    chunk::{Chunk, ChunkKind, ChunkSet, runtime_source},
    graph::ModuleGraph,
    hash::filename_hash,
    ir::Configuration,
};
use serde_json::{Map, Value};
use std::fmt::Write;

pub fn emit(
    graph: &ModuleGraph,
    chunks: &ChunkSet,
    configuration: &Configuration,
    template: Option<&str>,
) -> Result<BuildOutput, EmitError> {
    let mut output = BuildOutput::new();

    for chunk in chunks.chunks() {
        let source = match chunk.kind() {
            ChunkKind::Runtime => runtime_source(configuration.mode()),
            ChunkKind::Vendor | ChunkKind::Common | ChunkKind::Entry => {
                serialize_chunk(graph, chunks, chunk)?
            }
        };

        output.insert_chunk(
            chunk.name().clone(),
            format!(
                "{}.{}.bundle.js",
                chunk.name(),
                filename_hash(source.as_bytes())
            ),
            source.into_bytes(),
        );
    }

    for (_, module) in graph.modules() {
        for asset in module.assets() {
            output.insert(asset.file_name(), asset.shared_content().clone());
        }
    }

    if let Some(entry) = configuration.html_entry() {
        let scripts = chunks
            .entry_chunks(entry.name())
            .filter_map(|chunk| output.chunk_file(chunk.name()))
            .map(ToOwned::to_owned)
            .collect::<Vec<_>>();

        output.insert_document(
            DOCUMENT_NAME,
            render_document(
                template,
                configuration.transform_context().public_path(),
                scripts.iter().map(String::as_str),
            )
            .into_bytes(),
        );
    }

    Ok(output)
}

fn serialize_chunk(
    graph: &ModuleGraph,
    chunks: &ChunkSet,
    chunk: &Chunk,
) -> Result<String, EmitError> {
    let module_id = |index| {
        chunks
            .module_id(index)
            .map(Value::from)
            .ok_or_else(|| EmitError::ModuleIdNotFound(graph.module(index).path().into()))
    };
    let mut source = "(self.weftChunks = self.weftChunks || []).push({\n  modules: [\n".to_owned();

    for &index in chunk.modules() {
        let dependencies = graph
            .dependencies(index)
            .into_iter()
            .map(|(reference, target)| Ok((reference.to_owned(), module_id(target)?)))
            .collect::<Result<Map<_, _>, EmitError>>()?;

        write!(
            source,
            "    [{}, {}, function (module, exports, require) {{\n{}\n}}],\n",
            module_id(index)?,
            Value::Object(dependencies),
            graph.module(index).content()
        )
        .map_err(|error| EmitError::Other(error.to_string()))?;
    }

    write!(
        source,
        "  ],\n  entries: {}\n}});\n",
        Value::Array(chunk.entry().map(module_id).transpose()?.into_iter().collect())
    )
    .map_err(|error| EmitError::Other(error.to_string()))?;

    Ok(source)
}
