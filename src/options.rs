#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub job_limit: Option<usize>,
    pub profile: bool,
}

impl Options {
    pub fn job_limit(&self) -> usize {
        self.job_limit.unwrap_or_else(num_cpus::get).max(1)
    }
}
