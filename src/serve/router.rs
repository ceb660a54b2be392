use super::{LiveUpdate, ServerState, Snapshot};
use crate::chunk::EVENTS_PATH;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use futures::{Stream, stream};
use std::{convert::Infallible, sync::Arc};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    watch,
};
use tower_http::compression::CompressionLayer;

#[derive(Clone, Debug)]
pub struct RouterState {
    state: watch::Receiver<ServerState>,
    updates: broadcast::Sender<LiveUpdate>,
    public_path: Arc<str>,
    history_fallback: bool,
}

impl RouterState {
    pub fn new(
        state: watch::Receiver<ServerState>,
        updates: broadcast::Sender<LiveUpdate>,
        public_path: &str,
        history_fallback: bool,
    ) -> Self {
        Self {
            state,
            updates,
            public_path: public_path.into(),
            history_fallback,
        }
    }
}

pub fn router(state: RouterState) -> Router {
    Router::new()
        .route(EVENTS_PATH, get(events))
        .fallback(serve_file)
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn events(
    State(state): State<RouterState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = stream::unfold(state.updates.subscribe(), |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(update) => return Some((Ok(update.to_event()), receiver)),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn serve_file(State(state): State<RouterState>, uri: Uri) -> Response {
    let Some(snapshot) = wait_snapshot(&state).await else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    let output = snapshot.output();
    let name = match file_name(uri.path(), &state.public_path) {
        "" => output.document(),
        name => Some(name),
    }
    .filter(|name| output.file(name).is_some())
    .or_else(|| {
        state
            .history_fallback
            .then(|| output.document())
            .flatten()
    });

    if let Some(name) = name {
        return file_response(&snapshot, name);
    }

    if let Some(error) = snapshot.error() {
        (StatusCode::INTERNAL_SERVER_ERROR, error.to_owned()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

// Requests wait while a build is in progress.
async fn wait_snapshot(state: &RouterState) -> Option<Arc<Snapshot>> {
    let mut receiver = state.state.clone();
    let state = receiver
        .wait_for(|state| matches!(state, ServerState::Serving(_)))
        .await
        .ok()?;

    state.snapshot().cloned()
}

fn file_response(snapshot: &Snapshot, name: &str) -> Response {
    let Some(content) = snapshot.output().file(name) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [(
            header::CONTENT_TYPE,
            mime_guess::from_path(name)
                .first_or_octet_stream()
                .to_string(),
        )],
        content.to_vec(),
    )
        .into_response()
}

fn file_name<'a>(path: &'a str, public_path: &str) -> &'a str {
    path.strip_prefix(public_path)
        .unwrap_or(path)
        .trim_start_matches('/')
}
