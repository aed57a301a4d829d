//! All-pairs traversal.

/// Invoke `action` once for every unordered pair of elements in `source`.
///
/// For the i-th element (0-indexed) the action is called with it and each
/// of the previous i elements, in the order those were seen: the current
/// element first, the earlier element second. A source of length `L`
/// therefore produces exactly `L * (L - 1) / 2` invocations.
///
/// Arbitrary pairwise comparison cannot be done in one forward pass
/// without retaining history, so this operator buffers every element seen
/// so far: O(L) auxiliary memory and O(L²) invocations are part of the
/// contract. It is a terminal consumer; the source is fully drained.
pub fn for_each_pair<S, A>(source: S, mut action: A)
where
    S: IntoIterator,
    A: FnMut(&S::Item, &S::Item),
{
    let mut history: Vec<S::Item> = Vec::new();
    for item in source {
        for earlier in &history {
            action(&item, earlier);
        }
        history.push(item);
    }
}
