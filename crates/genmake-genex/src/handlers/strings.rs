use genmake_util::split::split_filter_empty;
use itertools::Itertools;

use crate::handlers::NodeCall;

pub(crate) fn lower_case(_call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    params[0].to_lowercase()
}

pub(crate) fn upper_case(_call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    params[0].to_uppercase()
}

/// `$<JOIN:list,glue>` — re-joins a `;`-separated build list with the given
/// glue string. Empty list entries are dropped, as everywhere else build
/// lists are consumed.
pub(crate) fn join(_call: &mut NodeCall<'_, '_>, params: &[String]) -> String {
    split_filter_empty(&params[0], ";").join(&params[1])
}
