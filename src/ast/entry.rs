#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    name: &'a str,
    path: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(name: &'a str, path: &'a str) -> Self {
        Self { name, path }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn path(&self) -> &'a str {
        self.path
    }
}
