use crate::emit::BuildOutput;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub enum ServerState {
    #[default]
    Idle,
    Building,
    Serving(Arc<Snapshot>),
}

impl ServerState {
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        if let Self::Serving(snapshot) = self {
            Some(snapshot)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct Snapshot {
    output: Arc<BuildOutput>,
    error: Option<String>,
}

impl Snapshot {
    pub fn new(output: Arc<BuildOutput>, error: Option<String>) -> Self {
        Self { output, error }
    }

    pub fn output(&self) -> &BuildOutput {
        &self.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
