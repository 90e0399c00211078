//! The node registry: identifier string to handler, fixed at compile time.
//!
//! Handlers are plain data plus a function pointer; the table is a perfect
//! hash built by `phf`, so lookup needs no initialization and the whole
//! registry is read-only for the lifetime of the process. That is what makes
//! it safe to share between concurrently evaluating workers.

use phf::phf_map;

use crate::context::EvaluationContext;
use crate::dag::DagChecker;

pub mod boolean;
pub mod comparison;
pub mod config;
pub mod literal;
pub mod strings;
pub mod target;

/// Everything a handler sees for one invocation, beyond its resolved
/// parameters.
pub struct NodeCall<'a, 'p> {
    /// The resolved identifier that selected this handler.
    pub identifier: &'a str,
    /// Original `$<...>` text of the node, for diagnostics.
    pub content: &'a str,
    pub ctx: &'a mut EvaluationContext<'p>,
    /// Innermost in-flight property frame, if this node is being evaluated
    /// inside a `$<TARGET_PROPERTY:...>` expansion.
    pub dag: Option<&'a DagChecker<'a>>,
}

pub type EvalFn = fn(&mut NodeCall<'_, '_>, &[String]) -> String;

/// One registered node kind. Immutable; arity is validated by the evaluator
/// before `eval` runs, so handlers may index their parameters directly.
pub struct NodeHandler {
    pub min_params: usize,
    /// `None` means unbounded.
    pub max_params: Option<usize>,
    /// Content nodes (`$<0:...>`, `$<1:...>`): commas in parameter position
    /// are literal, so the evaluated parameters are re-joined with `,` into a
    /// single content string before the handler runs.
    pub arbitrary_content: bool,
    /// When false the parameter subtrees are not evaluated at all; the
    /// handler runs with an empty parameter list (`$<0:...>` must not
    /// evaluate — or report on — its swallowed content).
    pub evaluates_params: bool,
    pub eval: EvalFn,
}

static NODE_REGISTRY: phf::Map<&'static str, NodeHandler> = phf_map! {
    // Literal escapes for the characters the expression syntax reserves.
    "ANGLE-R" => NodeHandler { min_params: 0, max_params: Some(0), arbitrary_content: false, evaluates_params: true, eval: literal::angle_r },
    "COMMA" => NodeHandler { min_params: 0, max_params: Some(0), arbitrary_content: false, evaluates_params: true, eval: literal::comma },
    "SEMICOLON" => NodeHandler { min_params: 0, max_params: Some(0), arbitrary_content: false, evaluates_params: true, eval: literal::semicolon },

    // Literal conditionals; also what a nested condition resolves into.
    "0" => NodeHandler { min_params: 1, max_params: None, arbitrary_content: true, evaluates_params: false, eval: literal::zero },
    "1" => NodeHandler { min_params: 1, max_params: None, arbitrary_content: true, evaluates_params: true, eval: literal::one },

    "BOOL" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: boolean::bool_node },
    "AND" => NodeHandler { min_params: 1, max_params: None, arbitrary_content: false, evaluates_params: true, eval: boolean::and_node },
    "OR" => NodeHandler { min_params: 1, max_params: None, arbitrary_content: false, evaluates_params: true, eval: boolean::or_node },
    "NOT" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: boolean::not_node },
    "IF" => NodeHandler { min_params: 3, max_params: Some(3), arbitrary_content: false, evaluates_params: true, eval: boolean::if_node },

    "STREQUAL" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::strequal },
    "EQUAL" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::equal },
    "VERSION_LESS" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::version_less },
    "VERSION_GREATER" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::version_greater },
    "VERSION_EQUAL" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::version_equal },
    "VERSION_LESS_EQUAL" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::version_less_equal },
    "VERSION_GREATER_EQUAL" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: comparison::version_greater_equal },

    "LOWER_CASE" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: strings::lower_case },
    "UPPER_CASE" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: strings::upper_case },
    "JOIN" => NodeHandler { min_params: 2, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: strings::join },

    "CONFIG" => NodeHandler { min_params: 0, max_params: None, arbitrary_content: false, evaluates_params: true, eval: config::config_node },
    "CONFIGURATION" => NodeHandler { min_params: 0, max_params: Some(0), arbitrary_content: false, evaluates_params: true, eval: config::configuration_node },
    "COMPILE_LANGUAGE" => NodeHandler { min_params: 0, max_params: None, arbitrary_content: false, evaluates_params: true, eval: config::compile_language },

    "TARGET_EXISTS" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: target::target_exists },
    "TARGET_NAME_IF_EXISTS" => NodeHandler { min_params: 1, max_params: Some(1), arbitrary_content: false, evaluates_params: true, eval: target::target_name_if_exists },
    "TARGET_PROPERTY" => NodeHandler { min_params: 1, max_params: Some(2), arbitrary_content: false, evaluates_params: true, eval: target::target_property },
};

pub fn lookup(identifier: &str) -> Option<&'static NodeHandler> {
    NODE_REGISTRY.get(identifier)
}
