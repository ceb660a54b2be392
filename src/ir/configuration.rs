use super::{
    Entry, Mode, Optimization, Output, Passthrough, Resolution, RuleSet, ServerConfiguration,
};
use crate::transform::TransformContext;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

pub const MAIN_ENTRY_NAME: &str = "main";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    root_directory: PathBuf,
    entries: Vec<Entry>,
    resolution: Resolution,
    rules: RuleSet,
    passthrough: Passthrough,
    output: Output,
    optimization: Optimization,
    server: ServerConfiguration,
    transform_context: Arc<TransformContext>,
}

impl Configuration {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root_directory: impl Into<PathBuf>,
        entries: Vec<Entry>,
        resolution: Resolution,
        rules: RuleSet,
        passthrough: Passthrough,
        output: Output,
        optimization: Optimization,
        server: ServerConfiguration,
        transform_context: TransformContext,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            entries,
            resolution,
            rules,
            passthrough,
            output,
            optimization,
            server,
            transform_context: transform_context.into(),
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn mode(&self) -> Mode {
        self.transform_context.mode()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn html_entry(&self) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.name().as_ref() == MAIN_ENTRY_NAME)
            .or_else(|| self.entries.first())
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn passthrough(&self) -> &Passthrough {
        &self.passthrough
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn optimization(&self) -> &Optimization {
        &self.optimization
    }

    pub fn server(&self) -> &ServerConfiguration {
        &self.server
    }

    pub fn transform_context(&self) -> &Arc<TransformContext> {
        &self.transform_context
    }
}
