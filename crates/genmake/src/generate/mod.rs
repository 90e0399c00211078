//! The generation pass: one [`GenerationRun`] per project, owning the
//! expression engine (and with it the per-run caches) and the accumulated
//! diagnostics.
//!
//! The writers below are deliberately thin — they assemble strings from
//! evaluated property values and know nothing about expression syntax. All
//! engine failures are collected here and turned into one hard error at the
//! end of the pass; a single bad property never aborts the walk itself.

use anyhow::bail;
use genmake_genex::{Diagnostic, EvalRequest, GenexEngine, Severity};
use genmake_util::split::split_list;
use tracing::{debug, warn};

use crate::model::{Project, Target, TargetKind};

pub mod install;
pub mod ninja;

/// The string artifacts of one pass. Persisting them to disk is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub build_ninja: String,
    pub install_script: String,
}

pub struct GenerationRun<'p> {
    project: &'p Project,
    engine: GenexEngine<'p>,
    configs: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> GenerationRun<'p> {
    pub fn new(project: &'p Project, configs: &[&str]) -> Self {
        GenerationRun {
            project,
            engine: GenexEngine::new(project),
            configs: configs.iter().map(|c| (*c).to_owned()).collect(),
            diagnostics: Vec::new(),
        }
    }

    pub fn generate(mut self) -> anyhow::Result<GeneratedFiles> {
        debug!(configs = ?self.configs, "starting generation pass");
        let build_ninja = ninja::write_build_statements(&mut self)?;
        let install_script = install::write_install_script(&mut self)?;
        self.finish()?;
        Ok(GeneratedFiles {
            build_ninja,
            install_script,
        })
    }

    /// Resolves one property of `target` under `config`, on that target's
    /// behalf. Diagnostics are collected for the end-of-pass check rather
    /// than surfaced per call.
    fn resolve(&mut self, target: &Target, property: &str, config: &str) -> String {
        let Some(raw) = target.property(property) else {
            return String::new();
        };
        let evaluation = self.engine.evaluate(
            raw,
            &EvalRequest {
                head_target: Some(target.name()),
                config,
                language: None,
            },
        );
        for diagnostic in &evaluation.diagnostics {
            warn!(%diagnostic, target = target.name(), config, "generation diagnostic");
        }
        self.diagnostics.extend(evaluation.diagnostics);
        evaluation.value
    }

    /// Like [`resolve`](Self::resolve), then split as a `;`-separated list.
    fn resolve_list(&mut self, target: &Target, property: &str, config: &str) -> Vec<String> {
        let value = self.resolve(target, property, config);
        split_list(&value).into_iter().map(String::from).collect()
    }

    /// File name of the target's artifact for one configuration, honoring an
    /// `OUTPUT_NAME` override (which may itself be config-conditional).
    fn artifact_name(&mut self, target: &Target, config: &str) -> String {
        let mut name = self.resolve(target, "OUTPUT_NAME", config);
        if name.is_empty() {
            name = target.name().to_owned();
        }
        match target.kind() {
            TargetKind::Executable | TargetKind::Interface => name,
            TargetKind::StaticLibrary => format!("lib{name}.a"),
            TargetKind::SharedLibrary => format!("lib{name}.so"),
        }
    }

    /// End-of-pass escalation: recorded warnings stay warnings, but any
    /// error-severity diagnostic fails the run.
    fn finish(&self) -> anyhow::Result<()> {
        let errors: Vec<&Diagnostic> = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect();
        if errors.is_empty() {
            return Ok(());
        }
        bail!(
            "generation failed with {} error diagnostic(s); first: {}",
            errors.len(),
            errors[0]
        );
    }
}
