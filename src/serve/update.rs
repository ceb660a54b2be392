use axum::response::sse::Event;

const RELOAD_EVENT: &str = "reload";
const ERROR_EVENT: &str = "build-error";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LiveUpdate {
    Reload,
    Error(String),
}

impl LiveUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reload => RELOAD_EVENT,
            Self::Error(_) => ERROR_EVENT,
        }
    }

    // Browsers drop events with empty data.
    pub fn data(&self) -> String {
        match self {
            Self::Reload => RELOAD_EVENT.into(),
            Self::Error(message) => message.replace('\r', ""),
        }
    }

    pub fn to_event(&self) -> Event {
        Event::default().event(self.name()).data(self.data())
    }
}
