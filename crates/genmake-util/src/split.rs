/// Splits at the given separator, dropping empty segments.
///
/// # Example
///
/// ```
/// use genmake_util::split::split_filter_empty;
/// let items: Vec<_> = split_filter_empty("a;;b;c;", ";").collect();
/// assert_eq!(items, vec!["a", "b", "c"]);
/// ```
pub fn split_filter_empty<'a>(input: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    input.split(separator).filter(|v| !v.is_empty())
}

/// Splits a `;`-separated build list into its entries. Empty entries carry no
/// meaning in build lists and are dropped.
pub fn split_list(input: &str) -> Vec<&str> {
    split_filter_empty(input, ";").collect()
}

/// Joins entries back into a `;`-separated build list.
pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    use itertools::Itertools;
    items.into_iter().map(|s| s.as_ref().to_owned()).join(";")
}
