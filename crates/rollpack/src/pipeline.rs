//! Phase-ordered plugin pipeline builder.

use crate::plugin::PluginSpec;

/// Ordered list of plugin stages
///
/// Stages are kept sorted by [`PluginPhase`](crate::PluginPhase); stages
/// within the same phase keep insertion order. Sorting happens on insert, so
/// the pipeline is valid after every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<PluginSpec>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stage at the end of its phase
    pub fn push(&mut self, spec: PluginSpec) -> &mut Self {
        let phase = spec.phase();
        let index = self.stages.partition_point(|stage| stage.phase() <= phase);
        self.stages.insert(index, spec);
        self
    }

    /// Add a stage only when `gate` holds
    pub fn push_if(&mut self, gate: bool, spec: impl FnOnce() -> PluginSpec) -> &mut Self {
        if gate {
            self.push(spec());
        }
        self
    }

    /// Copy of this pipeline with extra stages
    pub fn extended(&self, specs: impl IntoIterator<Item = PluginSpec>) -> Pipeline {
        let mut pipeline = self.clone();
        for spec in specs {
            pipeline.push(spec);
        }
        pipeline
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginSpec> {
        self.stages.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(PluginSpec::name).collect()
    }

    pub fn into_plugins(self) -> Vec<PluginSpec> {
        self.stages
    }
}
