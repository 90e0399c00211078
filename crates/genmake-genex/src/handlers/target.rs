use once_cell::sync::Lazy;
use regex::Regex;

use crate::dag::DagChecker;
use crate::evaluate::evaluate_raw;
use crate::handlers::NodeCall;
use crate::handlers::boolean::bool_output;

static TARGET_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.+-]+$").unwrap());
static PROPERTY_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

pub(crate) fn target_exists(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    let name = &params[0];
    if !TARGET_NAME_REGEX.is_match(name) {
        call.ctx.report_error(
            Some(call.content),
            format!("`{name}` is not a valid target name"),
        );
        return String::new();
    }
    bool_output(call.ctx.project().target_exists(name))
}

pub(crate) fn target_name_if_exists(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    let name = &params[0];
    if !TARGET_NAME_REGEX.is_match(name) {
        call.ctx.report_error(
            Some(call.content),
            format!("`{name}` is not a valid target name"),
        );
        return String::new();
    }
    if call.ctx.project().target_exists(name) {
        name.clone()
    } else {
        String::new()
    }
}

/// `$<TARGET_PROPERTY:prop>` (head target) or
/// `$<TARGET_PROPERTY:tgt,prop>`. The property value is itself evaluated as
/// a nested expression in the consumer's context, guarded by a DAG frame;
/// `INTERFACE_*` properties additionally gather over the target's link
/// interface, transitively.
pub(crate) fn target_property(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    let (target, property) = match params.len() {
        1 => {
            let Some(head) = call.ctx.head_target().map(str::to_owned) else {
                call.ctx.report_error(
                    Some(call.content),
                    "$<TARGET_PROPERTY:prop> may only be used while evaluating on behalf of a target",
                );
                return String::new();
            };
            (head, params[0].clone())
        }
        _ => (params[0].clone(), params[1].clone()),
    };

    if !TARGET_NAME_REGEX.is_match(&target) {
        call.ctx.report_error(
            Some(call.content),
            format!("`{target}` is not a valid target name"),
        );
        return String::new();
    }
    if !PROPERTY_NAME_REGEX.is_match(&property) {
        call.ctx.report_error(
            Some(call.content),
            format!("`{property}` is not a valid property name"),
        );
        return String::new();
    }
    if !call.ctx.project().target_exists(&target) {
        call.ctx.report_error(
            Some(call.content),
            format!("no target named `{target}`"),
        );
        return String::new();
    }

    let parent = call.dag;
    resolve_property(call, &target, &property, parent)
}

/// Resolves one (target, property) pair under a fresh DAG frame, recursing
/// over the link interface for `INTERFACE_*` properties. The seen-targets
/// set on the context keeps diamond-shaped dependency graphs from being
/// expanded more than once per evaluation.
fn resolve_property(
    call: &mut NodeCall<'_, '_>,
    target: &str,
    property: &str,
    parent: Option<&DagChecker<'_>>,
) -> String {
    let frame = match DagChecker::check(target, property, parent) {
        Ok(frame) => frame,
        Err(cycle) => {
            call.ctx.report_error(Some(call.content), cycle.to_string());
            return String::new();
        }
    };

    let mut pieces: Vec<String> = Vec::new();
    if let Some(raw) = call.ctx.project().target_property(target, property) {
        let value = evaluate_raw(&raw, call.ctx, Some(&frame));
        if !value.is_empty() {
            pieces.push(value);
        }
    }

    if property.starts_with("INTERFACE_") {
        for dep in call.ctx.project().link_interface(target) {
            if !call.ctx.seen_targets.insert(dep.clone()) {
                continue;
            }
            if !call.ctx.project().target_exists(&dep) {
                continue;
            }
            let value = resolve_property(call, &dep, property, Some(&frame));
            if !value.is_empty() {
                pieces.push(value);
            }
        }
    }

    pieces.join(";")
}
