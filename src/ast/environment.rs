#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment<'a> {
    name: &'a str,
    default: Option<&'a str>,
}

impl<'a> Environment<'a> {
    pub fn new(name: &'a str, default: Option<&'a str>) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn default(&self) -> Option<&'a str> {
        self.default
    }
}
