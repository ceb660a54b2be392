use super::{LiveUpdate, ServeError, ServerState, Snapshot};
use crate::{
    build::build,
    context::Context,
    debug,
    emit::BuildOutput,
    graph::{ModuleCache, ModuleGraph},
    ir::Configuration,
    log, profile,
    transform::TransformRegistry,
};
use std::{
    collections::HashSet,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{
    sync::{broadcast, mpsc::UnboundedReceiver, watch},
    time::sleep,
};

const COALESCING_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub struct DevLoop {
    context: Arc<Context>,
    configuration: Arc<Configuration>,
    registry: Arc<TransformRegistry>,
    cache: Arc<ModuleCache>,
    graph: ModuleGraph,
    output: Arc<BuildOutput>,
    state: watch::Sender<ServerState>,
    updates: broadcast::Sender<LiveUpdate>,
}

impl DevLoop {
    pub fn new(
        context: Arc<Context>,
        configuration: Arc<Configuration>,
        registry: Arc<TransformRegistry>,
        state: watch::Sender<ServerState>,
        updates: broadcast::Sender<LiveUpdate>,
    ) -> Self {
        Self {
            context,
            configuration,
            registry,
            cache: Default::default(),
            graph: Default::default(),
            output: Default::default(),
            state,
            updates,
        }
    }

    pub async fn run(mut self, mut changes: UnboundedReceiver<PathBuf>) -> Result<(), ServeError> {
        self.rebuild().await?;

        while let Some(path) = changes.recv().await {
            let mut paths = HashSet::from([path]);

            sleep(COALESCING_DELAY).await;

            while let Ok(path) = changes.try_recv() {
                paths.insert(path);
            }

            self.update(&paths).await?;
        }

        Ok(())
    }

    pub async fn update(&mut self, paths: &HashSet<PathBuf>) -> Result<(), ServeError> {
        let affected = self
            .graph
            .affected_paths(paths.iter().map(PathBuf::as_path));

        for path in &affected {
            self.cache.remove(path);
        }

        debug!(
            self.context,
            "{} files changed, {} modules invalidated",
            paths.len(),
            affected.len()
        );

        self.rebuild().await
    }

    pub async fn rebuild(&mut self) -> Result<(), ServeError> {
        self.state.send_replace(ServerState::Building);

        let time = Instant::now();

        match build(&self.context, &self.configuration, &self.registry, &self.cache).await {
            Ok(build) => {
                let (graph, output) = build.into_parts();

                self.graph = graph;
                self.output = output.into();

                profile!(self.context, "rebuilt in {}ms", time.elapsed().as_millis());
                log!(self.context, "built {} files", self.output.len());

                self.publish(None, LiveUpdate::Reload);
            }
            Err(error) => {
                let message = error.to_string();

                log!(self.context, "{}", message);

                self.publish(Some(message.clone()), LiveUpdate::Error(message));
            }
        }

        Ok(())
    }

    fn publish(&self, error: Option<String>, update: LiveUpdate) {
        self.state.send_replace(ServerState::Serving(
            Snapshot::new(self.output.clone(), error).into(),
        ));
        // Sending fails only when no client is connected.
        let _ = self.updates.send(update);
    }
}
