use indexmap::IndexMap;
use std::hash::Hash;

pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Keeps the entries matching `predicate`, collecting into the same map type.
pub fn filter<M, K, V>(map: M, predicate: impl Fn(&K, &V) -> bool) -> M
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
{
    map.into_iter().filter(|(k, v)| predicate(k, v)).collect()
}

/// Copies the entries whose key is in `keys`, in the order of `keys`. Missing keys are skipped.
pub fn filter_keys<K, V, Q>(map: &IndexMap<K, V>, keys: &[Q]) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone + std::borrow::Borrow<Q>,
    Q: Hash + Eq,
    V: Clone,
{
    keys.iter()
        .filter_map(|key| map.get_key_value(key))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Any map-like container that can report its size.
pub trait MapLike {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> MapLike for std::collections::HashMap<K, V, S> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<K, V> MapLike for std::collections::BTreeMap<K, V> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<K, V, S> MapLike for IndexMap<K, V, S> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// `None` counts as empty.
pub fn is_empty<M: MapLike>(map: Option<&M>) -> bool {
    map.is_none_or(MapLike::is_empty)
}

pub fn is_not_empty<M: MapLike>(map: Option<&M>) -> bool {
    !is_empty(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_filter_keeps_container() {
        let scores: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 5), ("c", 9)]);
        let high = filter(scores, |_, v| *v > 2);
        assert_eq!(high.len(), 2);

        let ordered: BTreeMap<i32, char> = BTreeMap::from([(1, 'x'), (2, 'y')]);
        assert_eq!(filter(ordered, |k, _| *k == 2).into_values().collect::<String>(), "y");
    }

    #[test]
    fn test_filter_keys_follows_requested_order() {
        let map: IndexMap<String, i32> =
            [("a", 1), ("b", 2), ("c", 3)].into_iter().map(|(k, v)| (k.to_owned(), v)).collect();
        let picked = filter_keys(&map, &["c".to_owned(), "zz".to_owned(), "a".to_owned()]);
        assert_eq!(picked.keys().map(String::as_str).collect::<Vec<_>>(), ["c", "a"]);
    }

    #[test]
    fn test_emptiness() {
        assert!(is_empty::<HashMap<i32, i32>>(None));
        assert!(is_empty(Some(&BTreeMap::<i32, i32>::new())));
        assert!(is_not_empty(Some(&IndexMap::<_, _>::from([(1, 2)]))));
    }
}
