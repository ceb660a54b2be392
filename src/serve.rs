mod dev_loop;
mod error;
mod router;
mod state;
mod update;
mod watcher;

pub use self::{
    dev_loop::DevLoop,
    error::ServeError,
    router::{RouterState, router},
    state::{ServerState, Snapshot},
    update::LiveUpdate,
    watcher::Subscription,
};
use crate::{context::Context, ir::Configuration, log, transform::TransformRegistry};
use std::{net::Ipv4Addr, sync::Arc};
use tokio::{
    net::TcpListener,
    select, signal,
    sync::{broadcast, mpsc::unbounded_channel, watch},
};

const UPDATE_CAPACITY: usize = 16;

pub async fn serve(
    context: &Arc<Context>,
    configuration: &Arc<Configuration>,
    registry: &Arc<TransformRegistry>,
) -> Result<(), ServeError> {
    let (state_sender, state_receiver) = watch::channel(ServerState::Idle);
    let (update_sender, _) = broadcast::channel(UPDATE_CAPACITY);
    let (change_sender, change_receiver) = unbounded_channel();

    let _subscription = Subscription::new(
        configuration.root_directory(),
        configuration.output().directory(),
        change_sender,
    )?;

    let listener =
        TcpListener::bind((Ipv4Addr::LOCALHOST, configuration.server().port())).await?;
    log!(context, "serving on http://{}", listener.local_addr()?);

    let router = router(RouterState::new(
        state_receiver,
        update_sender.clone(),
        configuration.transform_context().public_path(),
        configuration.server().history_fallback(),
    ));
    let dev_loop = DevLoop::new(
        context.clone(),
        configuration.clone(),
        registry.clone(),
        state_sender,
        update_sender,
    );

    select! {
        result = async move { axum::serve(listener, router).await } => result?,
        result = dev_loop.run(change_receiver) => result?,
        result = signal::ctrl_c() => {
            result?;
            log!(context, "shutting down");
        }
    }

    Ok(())
}
