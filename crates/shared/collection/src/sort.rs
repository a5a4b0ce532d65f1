//! Multi-key sorting.

use std::cmp::Ordering;

/// A borrowed comparator, as accepted by [`sort_by_all`].
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

/// Sorts `list` in place by `comparators`, each one breaking the ties of the previous.
///
/// Returns `None` and leaves `list` untouched when no comparator is given.
///
/// ```rust
/// use satchel_collection::sort::sort_by_all;
///
/// type Row = (&'static str, i32);
///
/// let mut rows: Vec<Row> = vec![("b", 2), ("a", 2), ("c", 1)];
/// let by_num = |x: &Row, y: &Row| x.1.cmp(&y.1);
/// let by_name = |x: &Row, y: &Row| x.0.cmp(y.0);
/// sort_by_all(&mut rows, &[&by_num, &by_name]);
/// assert_eq!(rows, [("c", 1), ("a", 2), ("b", 2)]);
/// ```
pub fn sort_by_all<'l, T>(
    list: &'l mut [T],
    comparators: &[Comparator<'_, T>],
) -> Option<&'l mut [T]> {
    if comparators.is_empty() {
        return None;
    }
    list.sort_by(|a, b| {
        comparators.iter().fold(Ordering::Equal, |order, cmp| order.then_with(|| cmp(a, b)))
    });
    Some(list)
}
