//!
//! ## Introduction
//! This crate implements the `$<...>` generator-expression language used in
//! genmake build descriptions: parsing, the node registry, cycle detection,
//! and evaluation. Expressions are embedded in target-property values and
//! resolved at generation time, once per (head target, configuration,
//! language) combination, which is what lets a single property carry
//! per-configuration content:
//!
//! ```text
//! COMPILE_DEFINITIONS = "$<$<CONFIG:Debug>:TRACE_ENABLED>"
//! ```
//!
//! ## Terminology
//!
//! - **Head target** — the target on whose behalf a top-level evaluation was
//!   requested. Distinct from targets *referenced inside* the expression,
//!   e.g. via `$<TARGET_PROPERTY:other,PROP>`.
//! - **Configuration** — the named build variant (`Debug`, `Release`, ...)
//!   that config-sensitive nodes test against.
//! - **Node** — one parsed unit: literal text, or a `$<...>` invocation with
//!   an identifier and comma-separated parameters, each position itself
//!   allowing nested expressions.
//!
//! ## Error philosophy
//! Nothing in this crate aborts a generation pass. Parse problems degrade to
//! literal text, evaluation problems degrade the offending sub-expression to
//! the empty string, and every degradation is recorded as a [`Diagnostic`].
//! Whether any of that should fail the run is the caller's decision, made
//! after the batch — see [`Evaluation::had_error`] and
//! [`GenexEngine::evaluate_checked`].

pub mod context;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod evaluate;
pub mod handlers;
pub mod macros;
pub mod nodes;
pub mod parser;

#[cfg(test)]
mod tests;

pub use context::{Diagnostic, EvaluationContext, NoProject, Severity, TargetProvider};
pub use engine::{EvalRequest, Evaluation, GenexEngine};
pub use parser::ParsedExpression;
