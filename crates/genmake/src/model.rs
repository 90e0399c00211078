//! The target model the expression engine evaluates against.
//!
//! Properties are plain strings and may themselves contain generator
//! expressions; nothing here evaluates anything. The model's only coupling
//! to the engine is the [`TargetProvider`] implementation at the bottom.

use genmake_genex::TargetProvider;
use genmake_util::split::split_list;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Executable,
    StaticLibrary,
    SharedLibrary,
    /// Header-only / usage-requirement carrier; produces no artifact.
    Interface,
}

#[derive(Debug, Clone)]
pub struct Target {
    name: String,
    kind: TargetKind,
    properties: IndexMap<String, String>,
}

impl Target {
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Target {
            name: name.into(),
            kind,
            properties: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("a target named `{0}` is already defined")]
    DuplicateTarget(String),
}

/// An insertion-ordered collection of targets; generation walks it in
/// declaration order so output is deterministic.
#[derive(Debug, Default)]
pub struct Project {
    targets: IndexMap<String, Target>,
}

impl Project {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_target(&mut self, target: Target) -> Result<(), ModelError> {
        if self.targets.contains_key(target.name()) {
            return Err(ModelError::DuplicateTarget(target.name().to_owned()));
        }
        self.targets.insert(target.name().to_owned(), target);
        Ok(())
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn target_mut(&mut self, name: &str) -> Option<&mut Target> {
        self.targets.get_mut(name)
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }
}

impl TargetProvider for Project {
    fn target_exists(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    fn target_property(&self, target: &str, property: &str) -> Option<String> {
        self.target(target)?.property(property).map(str::to_owned)
    }

    fn link_interface(&self, target: &str) -> Vec<String> {
        self.target_property(target, "INTERFACE_LINK_LIBRARIES")
            .map(|value| split_list(&value).into_iter().map(String::from).collect())
            .unwrap_or_default()
    }
}
