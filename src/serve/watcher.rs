use super::ServeError;
use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, event::ModifyKind,
};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;

pub struct Subscription {
    _watcher: RecommendedWatcher,
}

impl Subscription {
    pub fn new(
        directory: &Path,
        ignored_directory: &Path,
        sender: UnboundedSender<PathBuf>,
    ) -> Result<Self, ServeError> {
        let ignored_directory = ignored_directory.to_owned();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let Ok(event) = result else {
                return;
            };

            for path in changed_paths(&event, &ignored_directory) {
                // The receiver is gone on shutdown.
                let _ = sender.send(path);
            }
        })?;

        watcher.watch(directory, RecursiveMode::Recursive)?;

        Ok(Self { _watcher: watcher })
    }
}

fn changed_paths(event: &Event, ignored_directory: &Path) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Modify(ModifyKind::Metadata(_)) => vec![],
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => event
            .paths
            .iter()
            .filter(|path| !path.starts_with(ignored_directory))
            .cloned()
            .collect(),
        _ => vec![],
    }
}
