use std::cmp::Ordering;

use genmake_util::version::VersionTuple;

use crate::handlers::NodeCall;
use crate::handlers::boolean::bool_output;

pub(crate) fn strequal(_call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    bool_output(params[0] == params[1])
}

pub(crate) fn equal(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    let (Some(lhs), Some(rhs)) = (parse_integer(&params[0]), parse_integer(&params[1])) else {
        call.ctx.report_error(
            Some(call.content),
            format!(
                "$<EQUAL> parameters `{}` and `{}` must both be integers",
                params[0], params[1]
            ),
        );
        return String::new();
    };
    bool_output(lhs == rhs)
}

/// Accepts an optional sign followed by decimal or `0x`/`0X` hexadecimal
/// digits, matching the integer syntax the rest of the build tool accepts.
fn parse_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let magnitude = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.is_empty() {
        return None;
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

pub(crate) fn version_less(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    version_test(call, params, |ordering| ordering == Ordering::Less)
}

pub(crate) fn version_greater(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    version_test(call, params, |ordering| ordering == Ordering::Greater)
}

pub(crate) fn version_equal(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    version_test(call, params, |ordering| ordering == Ordering::Equal)
}

pub(crate) fn version_less_equal(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    version_test(call, params, |ordering| ordering != Ordering::Greater)
}

pub(crate) fn version_greater_equal(call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    version_test(call, params, |ordering| ordering != Ordering::Less)
}

fn version_test(
    call: &mut NodeCall<'_, '_>,
    params: &[String],
    test: impl Fn(Ordering) -> bool,
) -> String {
    let versions: Result<Vec<VersionTuple>, _> = params.iter().map(|p| p.parse()).collect();
    match versions {
        Ok(versions) => bool_output(test(versions[0].compare(&versions[1]))),
        Err(invalid) => {
            call.ctx.report_error(
                Some(call.content),
                format!("$<{}> comparison failed: {invalid}", call.identifier),
            );
            String::new()
        }
    }
}
