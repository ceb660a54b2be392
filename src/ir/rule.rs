use super::Pattern;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    name: Arc<str>,
    test: Pattern,
    exclude: Option<Pattern>,
    transforms: Vec<Arc<str>>,
}

impl Rule {
    pub fn new(
        name: impl Into<Arc<str>>,
        test: Pattern,
        exclude: Option<Pattern>,
        transforms: Vec<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            test,
            exclude,
            transforms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transforms(&self) -> &[Arc<str>] {
        &self.transforms
    }

    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }
}
