#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias<'a> {
    prefix: &'a str,
    path: &'a str,
}

impl<'a> Alias<'a> {
    pub fn new(prefix: &'a str, path: &'a str) -> Self {
        Self { prefix, path }
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    pub fn path(&self) -> &'a str {
        self.path
    }
}
