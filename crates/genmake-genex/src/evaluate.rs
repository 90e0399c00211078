//! Tree-walking evaluation of parsed expressions.
//!
//! Text nodes append verbatim. Generator nodes resolve their identifier
//! child list first — the identifier position may itself contain nested
//! expressions, which is how `$<$<CONFIG:Debug>:A>` works — then dispatch
//! through the registry. Failures of any kind degrade the offending node to
//! the empty string and record a diagnostic; sibling nodes are unaffected.

use crate::context::EvaluationContext;
use crate::dag::DagChecker;
use crate::handlers::{self, NodeCall, NodeHandler};
use crate::nodes::{GenexNode, GeneratorNode};
use crate::parser::ParsedExpression;

/// Evaluates a raw expression string outside the engine's caches. This is
/// the path property values take when `$<TARGET_PROPERTY:...>` recurses into
/// them, carrying the in-flight DAG frame along.
pub fn evaluate_raw(
    text: &str,
    ctx: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> String {
    if !text.contains("$<") {
        return text.to_owned();
    }
    let parsed = ParsedExpression::parse(text);
    evaluate_parsed(&parsed, ctx, dag)
}

pub fn evaluate_parsed(
    parsed: &ParsedExpression,
    ctx: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> String {
    for warning in parsed.warnings() {
        ctx.report_warning(Some(parsed.source()), warning.message.as_str());
    }
    evaluate_nodes(parsed.nodes(), parsed.source(), ctx, dag)
}

pub(crate) fn evaluate_nodes(
    nodes: &[GenexNode],
    source: &str,
    ctx: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            GenexNode::Text(span) => out.push_str(span.text(source)),
            GenexNode::Generator(gx) => out.push_str(&evaluate_generator(gx, source, ctx, dag)),
        }
    }
    out
}

fn evaluate_generator(
    gx: &GeneratorNode,
    source: &str,
    ctx: &mut EvaluationContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> String {
    let content = gx.original_text(source);
    let identifier = evaluate_nodes(gx.identifier(), source, ctx, dag);

    if identifier.is_empty() {
        // A nested condition that resolved to the inactive value swallows
        // its content, e.g. `$<$<CONFIG:Debug>:A>` on a config mismatch.
        if gx.parameters().is_some() {
            return String::new();
        }
        ctx.report_error(Some(content), "expression is missing a node identifier");
        return String::new();
    }

    let Some(handler) = handlers::lookup(&identifier) else {
        ctx.report_error(
            Some(content),
            format!("`{identifier}` is not a known generator expression"),
        );
        return String::new();
    };

    let given = gx.parameters().map_or(0, |p| p.len());
    if given < handler.min_params || handler.max_params.is_some_and(|max| given > max) {
        ctx.report_error(Some(content), arity_message(&identifier, handler, given));
        return String::new();
    }

    let params: Vec<String> = match gx.parameters() {
        Some(lists) if handler.evaluates_params => {
            let evaluated: Vec<String> = lists
                .iter()
                .map(|list| evaluate_nodes(list, source, ctx, dag))
                .collect();
            if handler.arbitrary_content {
                // Commas inside arbitrary content are literal; the parser
                // split on them not knowing better, so stitch them back.
                vec![evaluated.join(",")]
            } else {
                evaluated
            }
        }
        // Content deliberately left unevaluated ($<0:...>).
        Some(_) => Vec::new(),
        None => Vec::new(),
    };

    tracing::trace!(identifier = %identifier, params = ?params, "dispatching node");

    let mut call = NodeCall {
        identifier: &identifier,
        content,
        ctx,
        dag,
    };
    (handler.eval)(&mut call, &params)
}

fn arity_message(identifier: &str, handler: &NodeHandler, given: usize) -> String {
    let expected = match (handler.min_params, handler.max_params) {
        (min, Some(max)) if min == max => format!("exactly {min} parameter(s)"),
        (min, Some(max)) => format!("between {min} and {max} parameters"),
        (min, None) => format!("at least {min} parameter(s)"),
    };
    format!("$<{identifier}> requires {expected}, got {given}")
}
