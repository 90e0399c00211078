use std::sync::LazyLock;

use regex::Regex;

use crate::handlers::NodeCall;
use crate::handlers::boolean::bool_output;

static CONFIG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_]*$").unwrap());

/// `$<CONFIG>` names the current configuration; `$<CONFIG:cfgs...>` tests it
/// against the listed names, case-insensitively — configuration names are
/// not case-sensitive on every platform the output feeds.
pub(crate) fn config_node(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    if params.is_empty() {
        return call.ctx.config().to_owned();
    }

    for param in params {
        if !CONFIG_NAME_REGEX.is_match(param) {
            call.ctx.report_error(
                Some(call.content),
                format!("`{param}` is not a valid configuration name"),
            );
            return String::new();
        }
    }
    bool_output(
        params
            .iter()
            .any(|param| param.eq_ignore_ascii_case(call.ctx.config())),
    )
}

pub(crate) fn configuration_node(call: &mut NodeCall<'_, '_>, _params: &[String]) -> String {
    call.ctx.config().to_owned()
}

/// `$<COMPILE_LANGUAGE>` / `$<COMPILE_LANGUAGE:langs...>`. Evaluations
/// without a language dimension resolve to the empty string; the language is
/// an optional part of the request, not an error.
pub(crate) fn compile_language(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    let Some(language) = call.ctx.language() else {
        return String::new();
    };

    if params.is_empty() {
        language.to_owned()
    } else {
        bool_output(params.iter().any(|param| param == language))
    }
}
