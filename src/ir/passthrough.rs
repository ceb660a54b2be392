use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnhandledPolicy {
    Copy,
    #[default]
    Error,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PassthroughKind {
    Module,
    Asset,
}

const NATIVE_EXTENSIONS: &[&str] = &[".mjs", ".cjs"];

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Passthrough {
    static_extensions: Vec<String>,
    policy: UnhandledPolicy,
}

impl Passthrough {
    pub fn new(static_extensions: Vec<String>, policy: UnhandledPolicy) -> Self {
        Self {
            static_extensions,
            policy,
        }
    }

    pub fn classify(&self, path: &Path, module_extensions: &[String]) -> Option<PassthroughKind> {
        let extension = path
            .extension()
            .map(|extension| format!(".{}", extension.to_string_lossy().to_lowercase()));
        let is_listed = |extensions: &[String]| {
            extension
                .as_ref()
                .is_some_and(|extension| extensions.contains(extension))
        };

        if is_listed(module_extensions)
            || extension
                .as_deref()
                .is_some_and(|extension| NATIVE_EXTENSIONS.contains(&extension))
        {
            Some(PassthroughKind::Module)
        } else if is_listed(&self.static_extensions) || self.policy == UnhandledPolicy::Copy {
            Some(PassthroughKind::Asset)
        } else {
            None
        }
    }
}
