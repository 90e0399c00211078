use crate::handlers::NodeCall;

pub(crate) fn angle_r(_call: &mut NodeCall<'_, '_>, _params: &[String]) -> String {
    ">".to_owned()
}

pub(crate) fn comma(_call: &mut NodeCall<'_, '_>, _params: &[String]) -> String {
    ",".to_owned()
}

pub(crate) fn semicolon(_call: &mut NodeCall<'_, '_>, _params: &[String]) -> String {
    ";".to_owned()
}

/// `$<0:...>` — the inactive conditional. Its content was never evaluated
/// (the registry entry opts out), so errors inside swallowed content stay
/// silent.
pub(crate) fn zero(_call: &mut NodeCall<'_, '_>, _params: &[String]) -> String {
    String::new()
}

/// `$<1:...>` — the active conditional: content passes through. The
/// evaluator already re-joined the comma-split content into one parameter.
pub(crate) fn one(_call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    params[0].clone()
}
