use thiserror::Error;

use crate::context::Diagnostic;

/// A property reference chain that closed back on itself, as detected by the
/// [`DagChecker`](crate::dag::DagChecker). The chain lists the in-flight
/// `target[PROPERTY]` frames outermost first, ending with the repeated entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("self-referencing property chain: {}", .chain.join(" -> "))]
pub struct CycleError {
    pub chain: Vec<String>,
}

/// Returned by [`GenexEngine::evaluate_checked`](crate::engine::GenexEngine::evaluate_checked)
/// when an evaluation recorded error-severity diagnostics and the caller
/// asked for a hard failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EvaluationFailed {
    pub message: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub type GenexResult<T> = anyhow::Result<T>;
