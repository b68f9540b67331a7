// Top-N ranking by a floating-point score.

use tracing::debug;

/// An item paired with the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub value: f64,
}

/// Rank pre-scored items and keep the best `n`.
///
/// Ordering is descending by value. The sort is stable, so items with equal
/// values keep the order in which they were supplied. Returns
/// `min(n, count)` entries; empty input or `n == 0` yields an empty list.
pub fn top_n<'a, T, I>(scored: I, n: usize) -> Vec<Ranked<'a, T>>
where
    I: IntoIterator<Item = (&'a T, f64)>,
{
    let mut ranked: Vec<Ranked<'a, T>> = scored
        .into_iter()
        .map(|(item, value)| Ranked { item, value })
        .collect();
    let total = ranked.len();

    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(n);

    debug!("ranked {} items, kept {}", total, ranked.len());
    ranked
}

/// Rank `items` by `key` and keep the best `n`. See [`top_n`].
pub fn top_n_by<T, F>(items: &[T], n: usize, key: F) -> Vec<Ranked<'_, T>>
where
    F: Fn(&T) -> f64,
{
    top_n(items.iter().map(|item| (item, key(item))), n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
