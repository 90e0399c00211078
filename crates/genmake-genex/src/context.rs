use derive_more::Display;
use indexmap::IndexSet;
use std::fmt;

/// Read-only view of the project model the engine evaluates against. The
/// host crate's target collection implements this; the engine itself never
/// owns targets.
pub trait TargetProvider {
    fn target_exists(&self, name: &str) -> bool;

    /// Raw (unevaluated) value of a target property, if set. Values may
    /// themselves contain generator expressions.
    fn target_property(&self, target: &str, property: &str) -> Option<String>;

    /// Direct interface link dependencies of a target, used by transitive
    /// `INTERFACE_*` property queries.
    fn link_interface(&self, target: &str) -> Vec<String>;
}

/// A provider with no targets at all, for evaluating expressions that do not
/// touch the target graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProject;

impl TargetProvider for NoProject {
    fn target_exists(&self, _name: &str) -> bool {
        false
    }

    fn target_property(&self, _target: &str, _property: &str) -> Option<String> {
        None
    }

    fn link_interface(&self, _target: &str) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

/// One recorded complaint. Never fatal by itself — the caller decides after
/// a batch of evaluations whether any recorded error should fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Original text of the offending (sub-)expression, when known.
    pub expression: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => {
                write!(f, "{}: {} (in `{}`)", self.severity, self.message, expression)
            }
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Per-evaluation ambient state: who is asking (head target), for which
/// configuration and language, plus the diagnostics sink and the set of
/// targets already expanded by transitive queries.
///
/// A context lives for exactly one top-level evaluation. Two evaluations
/// never share one, which is what makes differently-configured evaluations
/// of the same expression text fully independent.
pub struct EvaluationContext<'p> {
    project: &'p dyn TargetProvider,
    head_target: Option<String>,
    config: String,
    language: Option<String>,
    /// Targets already expanded by transitive `INTERFACE_*` queries; shared
    /// dependency subgraphs (diamonds) are expanded once per evaluation.
    pub(crate) seen_targets: IndexSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> EvaluationContext<'p> {
    pub fn new(
        project: &'p dyn TargetProvider,
        head_target: Option<&str>,
        config: &str,
        language: Option<&str>,
    ) -> Self {
        EvaluationContext {
            project,
            head_target: head_target.map(str::to_owned),
            config: config.to_owned(),
            language: language.map(str::to_owned),
            seen_targets: IndexSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn project(&self) -> &'p dyn TargetProvider {
        self.project
    }

    pub fn head_target(&self) -> Option<&str> {
        self.head_target.as_deref()
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn report_error(&mut self, expression: Option<&str>, message: impl Into<String>) {
        self.report(Severity::Error, expression, message);
    }

    pub fn report_warning(&mut self, expression: Option<&str>, message: impl Into<String>) {
        self.report(Severity::Warning, expression, message);
    }

    fn report(&mut self, severity: Severity, expression: Option<&str>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            severity,
            message: message.into(),
            expression: expression.map(str::to_owned),
        };
        tracing::debug!(%diagnostic, "recorded diagnostic");
        self.diagnostics.push(diagnostic);
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
