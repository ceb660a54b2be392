#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfiguration {
    port: u16,
    history_fallback: bool,
}

impl ServerConfiguration {
    pub fn new(port: u16, history_fallback: bool) -> Self {
        Self {
            port,
            history_fallback,
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn history_fallback(&self) -> bool {
        self.history_fallback
    }
}
