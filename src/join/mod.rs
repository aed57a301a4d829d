//! Terminal string joining.

use std::fmt::Display;

/// Concatenate the stringified elements of `source`, inserting
/// `separator` between consecutive elements but not before the first or
/// after the last.
///
/// This is a terminal consumer: the source is drained in a single forward
/// pass into one output buffer. An empty source produces the empty
/// string; a zero-length separator is permitted.
pub fn join_with<S, F>(source: S, separator: &str, mut stringify: F) -> String
where
    S: IntoIterator,
    F: FnMut(S::Item) -> String,
{
    let mut result = String::new();
    let mut first = true;
    for item in source {
        if !first {
            result.push_str(separator);
        }
        result.push_str(&stringify(item));
        first = false;
    }
    result
}

/// [`join_with`] using each element's [`Display`] implementation.
pub fn join_display<S>(source: S, separator: &str) -> String
where
    S: IntoIterator,
    S::Item: Display,
{
    join_with(source, separator, |item| item.to_string())
}
