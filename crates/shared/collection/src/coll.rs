use indexmap::{IndexMap, IndexSet};
use satchel_convert::page_util::trans_to_start_end;
use satchel_kernel::UtilError;
use std::collections::{HashSet, LinkedList};
use std::fmt::Debug;
use std::hash::Hash;

/// Whether the two collections share at least one element. Empty input never does.
#[must_use]
pub fn contains_any<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (small, large) = if a.len() < b.len() { (a, b) } else { (b, a) };
    small.iter().any(|item| large.contains(item))
}

fn initial_capacity(len: usize) -> usize {
    ((len as f32 / 0.75) as usize + 1).max(16)
}

pub fn new_hash_set<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> HashSet<T> {
    let items = items.into_iter();
    let mut set = HashSet::with_capacity(initial_capacity(items.size_hint().0));
    set.extend(items);
    set
}

/// Insertion-ordered set.
pub fn new_linked_hash_set<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> IndexSet<T> {
    let items = items.into_iter();
    let mut set = IndexSet::with_capacity(initial_capacity(items.size_hint().0));
    set.extend(items);
    set
}

pub fn new_list<T>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect()
}

pub fn new_linked_list<T>(items: impl IntoIterator<Item = T>) -> LinkedList<T> {
    items.into_iter().collect()
}

/// Copy of `list[start..end]`, with `end` clamped to the length.
///
/// `start > end` or `start > len` gives an empty list.
#[must_use]
pub fn sub<T: Clone>(list: &[T], start: usize, end: usize) -> Vec<T> {
    if start > end || start > list.len() {
        return Vec::new();
    }
    list[start..end.min(list.len())].to_vec()
}

/// Splits `items` into chunks of `size`. The last chunk is always present, so empty input
/// yields one empty chunk.
///
/// # Errors
/// Returns [`UtilError::IllegalArgument`] when `size` is zero.
pub fn split<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, UtilError> {
    if size == 0 {
        return Err(UtilError::illegal_argument("Split size must be greater than zero"));
    }
    if items.is_empty() {
        return Ok(vec![Vec::new()]);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Keeps the elements matching `predicate`, collecting into the same container type.
pub fn filter<C, T>(collection: C, predicate: impl Fn(&T) -> bool) -> C
where
    C: IntoIterator<Item = T> + FromIterator<T>,
{
    collection.into_iter().filter(|item| predicate(item)).collect()
}

/// Maps every element through `editor`. With `ignore_none`, `None` results are dropped.
pub fn extract<'a, T: 'a, R>(
    items: impl IntoIterator<Item = &'a T>,
    editor: impl Fn(&T) -> Option<R>,
    ignore_none: bool,
) -> Vec<Option<R>> {
    items.into_iter().map(editor).filter(|v| !ignore_none || v.is_some()).collect()
}

/// Number of elements matching `predicate`; every element when it is `None`.
pub fn count<T, P>(items: impl IntoIterator<Item = T>, predicate: Option<P>) -> usize
where
    P: Fn(&T) -> bool,
{
    match predicate {
        Some(p) => items.into_iter().filter(|item| p(item)).count(),
        None => items.into_iter().count(),
    }
}

/// Rows of 1-based page `page_no`.
///
/// A list that fits on one page is returned whole for pages up to 1 and empty for later pages.
/// Otherwise the window is clamped to the list.
#[must_use]
pub fn page<T: Clone>(page_no: i32, page_size: i32, list: &[T]) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    let len = list.len();
    if len <= usize::try_from(page_size).unwrap_or(0) {
        return if page_no <= 1 { list.to_vec() } else { Vec::new() };
    }
    let [start, end] = trans_to_start_end(page_no, page_size);
    let start = usize::try_from(start).unwrap_or(0).min(len);
    let end = usize::try_from(end).unwrap_or(0).min(len);
    list[start..end.max(start)].to_vec()
}

/// Groups `items` by key, keeping first-seen key order.
///
/// `value_process` maps an item to the stored value. When it yields `None` the value is
/// skipped; with `ignore_none` set the item does not even create its group.
pub fn group<T, K, V>(
    items: impl IntoIterator<Item = T>,
    group_by: impl Fn(&T) -> K,
    value_process: impl Fn(&T) -> Option<V>,
    ignore_none: bool,
) -> IndexMap<K, Vec<V>>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in items {
        let value = value_process(&item);
        if value.is_none() && ignore_none {
            continue;
        }
        let bucket = groups.entry(group_by(&item)).or_default();
        bucket.extend(value);
    }
    groups
}

#[must_use]
pub const fn is_empty<T>(collection: Option<&[T]>) -> bool {
    crate::array::is_empty(collection)
}

/// Indexes `items` by `key`.
///
/// # Errors
/// Returns [`UtilError::IllegalArgument`] when two items share a key.
pub fn list_to_map<K, V>(
    items: impl IntoIterator<Item = V>,
    key: impl Fn(&V) -> K,
) -> Result<IndexMap<K, V>, UtilError>
where
    K: Hash + Eq + Debug,
{
    let mut map = IndexMap::new();
    for item in items {
        let k = key(&item);
        if map.contains_key(&k) {
            return Err(UtilError::illegal_argument(format!("Duplicate key {k:?}")));
        }
        map.insert(k, item);
    }
    Ok(map)
}

/// Indexes `items` by `key`, resolving collisions with `merge(existing, new)`.
pub fn list_to_map_with<K, V>(
    items: impl IntoIterator<Item = V>,
    key: impl Fn(&V) -> K,
    merge: impl Fn(V, V) -> V,
) -> IndexMap<K, V>
where
    K: Hash + Eq,
{
    let mut map: IndexMap<K, Option<V>> = IndexMap::new();
    for item in items {
        let slot = map.entry(key(&item)).or_default();
        *slot = Some(match slot.take() {
            Some(existing) => merge(existing, item),
            None => item,
        });
    }
    map.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any(&[1, 2, 3], &[9, 3]));
        assert!(!contains_any(&[1, 2], &[3]));
        assert!(!contains_any::<i32>(&[], &[1]));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(new_hash_set([1, 1, 2]).len(), 2);
        let ordered = new_linked_hash_set(["b", "a", "b"]);
        assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(new_list([1, 2]), vec![1, 2]);
        assert_eq!(new_linked_list([1, 2]).back(), Some(&2));
    }

    #[test]
    fn test_sub_bounds() {
        let list = [1, 2, 3, 4];
        assert_eq!(sub(&list, 1, 3), vec![2, 3]);
        assert_eq!(sub(&list, 2, 100), vec![3, 4]);
        assert!(sub(&list, 3, 1).is_empty());
        assert!(sub(&list, 5, 9).is_empty());
        assert!(sub(&list, 4, 9).is_empty());
    }

    #[test]
    fn test_split() {
        assert_eq!(split(&[1, 2, 3], 3).unwrap(), vec![vec![1, 2, 3]]);
        assert_eq!(split::<i32>(&[], 2).unwrap(), vec![Vec::<i32>::new()]);
        assert!(matches!(split(&[1], 0), Err(UtilError::IllegalArgument { .. })));
    }

    #[test]
    fn test_filter_extract_count() {
        let evens: Vec<i32> = filter(vec![1, 2, 3, 4], |n| n % 2 == 0);
        assert_eq!(evens, vec![2, 4]);
        let set: HashSet<i32> = filter(HashSet::from([1, 2, 3]), |n| *n > 1);
        assert_eq!(set.len(), 2);

        let words = ["a", "", "b"];
        let firsts = extract(&words, |w| w.chars().next(), true);
        assert_eq!(firsts, vec![Some('a'), Some('b')]);
        assert_eq!(extract(&words, |w| w.chars().next(), false).len(), 3);

        assert_eq!(count([1, 2, 3], Some(|n: &i32| *n > 1)), 2);
        assert_eq!(count([1, 2, 3], None::<fn(&i32) -> bool>), 3);
    }

    #[test]
    fn test_page_windows() {
        let list: Vec<i32> = (1..=10).collect();
        assert_eq!(page(1, 3, &list), vec![1, 2, 3]);
        assert_eq!(page(4, 3, &list), vec![10]);
        assert!(page(5, 3, &list).is_empty());
        assert_eq!(page(0, 3, &list), vec![1, 2, 3]);

        let short = [1, 2];
        assert_eq!(page(1, 5, &short), vec![1, 2]);
        assert!(page(2, 5, &short).is_empty());
        assert!(page::<i32>(1, 5, &[]).is_empty());
        assert!(page(i32::MAX, 3, &list).is_empty());
        assert_eq!(page(1, i32::MAX, &list), list);
    }

    #[test]
    fn test_group_keeps_order() {
        let words = ["apple", "bob", "avocado", "", "banana"];
        let groups = group(words, |w| w.chars().next(), |w| Some(w.len()), false);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [Some('a'), Some('b'), None]);
        assert_eq!(groups[&Some('a')], vec![5, 7]);

        let skipped = group(words, |w| w.is_empty(), |w| (!w.is_empty()).then_some(*w), true);
        assert!(!skipped.contains_key(&true));
        let kept = group(words, |w| w.is_empty(), |w| (!w.is_empty()).then_some(*w), false);
        assert_eq!(kept[&true], Vec::<&str>::new());
        assert_eq!(kept[&false].len(), 4);
    }

    #[test]
    fn test_list_to_map() {
        let map = list_to_map(["ann", "bob"], |s| s.len()).unwrap_err();
        assert!(map.to_string().contains("Duplicate key 3"));

        let map = list_to_map(["ann", "carl"], |s| s.len()).unwrap();
        assert_eq!(map[&4], "carl");

        let merged = list_to_map_with(["a1", "b1", "a2"], |s| s.as_bytes()[0], |x, y| {
            if y > x { y } else { x }
        });
        assert_eq!(merged.values().copied().collect::<Vec<_>>(), ["a2", "b1"]);
    }
}
