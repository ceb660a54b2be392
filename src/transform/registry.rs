use super::{
    AssetTransform, InlineTransform, ScriptTransform, StyleTransform, TextTransform, Transform,
};
use std::{collections::BTreeMap, sync::Arc};

#[derive(Clone, Debug)]
pub struct TransformRegistry {
    transforms: BTreeMap<String, Arc<dyn Transform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: Default::default(),
        }
    }

    pub fn register(&mut self, transform: impl Transform + 'static) {
        self.transforms
            .insert(transform.name().into(), Arc::new(transform));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Transform>> {
        self.transforms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(ScriptTransform);
        registry.register(StyleTransform);
        registry.register(AssetTransform);
        registry.register(InlineTransform);
        registry.register(TextTransform);

        registry
    }
}
