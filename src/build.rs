mod error;

pub use self::error::BuildError;
use crate::{
    chunk::{ChunkSet, assign_chunks},
    context::Context,
    emit::{BuildOutput, EmitError, emit, write_output},
    graph::{ModuleCache, ModuleGraph, build_graph},
    ir::Configuration,
    optimize::compress,
    profile,
    transform::TransformRegistry,
};
use std::{sync::Arc, time::Instant};

#[derive(Debug)]
pub struct Build {
    graph: ModuleGraph,
    chunks: ChunkSet,
    output: BuildOutput,
}

impl Build {
    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn chunks(&self) -> &ChunkSet {
        &self.chunks
    }

    pub fn output(&self) -> &BuildOutput {
        &self.output
    }

    pub fn into_output(self) -> BuildOutput {
        self.output
    }

    pub fn into_parts(self) -> (ModuleGraph, BuildOutput) {
        (self.graph, self.output)
    }
}

pub async fn build(
    context: &Arc<Context>,
    configuration: &Arc<Configuration>,
    registry: &Arc<TransformRegistry>,
    cache: &Arc<ModuleCache>,
) -> Result<Build, BuildError> {
    let time = Instant::now();
    let graph = build_graph(context, configuration, registry, cache).await?;
    profile!(
        context,
        "built graph of {} modules in {}ms",
        graph.len(),
        time.elapsed().as_millis()
    );

    let time = Instant::now();
    let chunks = assign_chunks(
        &graph,
        configuration.root_directory(),
        configuration.optimization(),
    );
    profile!(
        context,
        "assigned {} chunks in {}ms",
        chunks.chunks().len(),
        time.elapsed().as_millis()
    );

    let time = Instant::now();
    let template = if let Some(path) = configuration.output().template() {
        Some(
            String::from_utf8(context.file_system().read_file(path).await?)
                .map_err(|_| EmitError::InvalidTemplate(path.into()))?,
        )
    } else {
        None
    };
    let mut output = emit(&graph, &chunks, configuration, template.as_deref())?;
    profile!(
        context,
        "emitted {} files in {}ms",
        output.len(),
        time.elapsed().as_millis()
    );

    if configuration.mode().is_production() {
        let time = Instant::now();
        let count = compress(&mut output, configuration.optimization().compression())?;
        profile!(
            context,
            "compressed {} files in {}ms",
            count,
            time.elapsed().as_millis()
        );
    }

    Ok(Build {
        graph,
        chunks,
        output,
    })
}

pub async fn run(
    context: &Arc<Context>,
    configuration: &Arc<Configuration>,
    registry: &Arc<TransformRegistry>,
) -> Result<BuildOutput, BuildError> {
    let output = build(context, configuration, registry, &Default::default())
        .await?
        .into_output();

    let time = Instant::now();
    write_output(
        context,
        configuration.output().directory(),
        configuration.root_directory(),
        &output,
    )
    .await?;
    profile!(
        context,
        "wrote output in {}ms",
        time.elapsed().as_millis()
    );

    Ok(output)
}
