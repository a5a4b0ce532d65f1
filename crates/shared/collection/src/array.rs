use std::fmt::{Display, Write};

#[must_use]
pub const fn is_empty<T>(array: Option<&[T]>) -> bool {
    match array {
        Some(a) => a.is_empty(),
        None => true,
    }
}

#[must_use]
pub const fn is_not_empty<T>(array: Option<&[T]>) -> bool {
    !is_empty(array)
}

/// Length of `array`; `None` counts as empty.
#[must_use]
pub const fn length<T>(array: Option<&[T]>) -> usize {
    match array {
        Some(a) => a.len(),
        None => 0,
    }
}

#[must_use]
pub fn clone<T: Clone>(array: Option<&[T]>) -> Option<Vec<T>> {
    array.map(<[T]>::to_vec)
}

/// `array` followed by `elems`.
#[must_use]
pub fn append<T: Clone + Default>(array: &[T], elems: &[T]) -> Vec<T> {
    if array.is_empty() {
        return elems.to_vec();
    }
    insert(array, array.len() as isize, elems)
}

/// Inserts `elems` at `index`.
///
/// A negative index counts from the end (`-1` inserts before the last element). An index past
/// the end leaves a gap filled with `T::default()`.
///
/// ```rust
/// use satchel_collection::array::insert;
///
/// assert_eq!(insert(&[1, 2, 3], 1, &[9]), vec![1, 9, 2, 3]);
/// assert_eq!(insert(&[1, 2, 3], -1, &[9]), vec![1, 2, 9, 3]);
/// assert_eq!(insert(&[1, 2], 4, &[9]), vec![1, 2, 0, 0, 9]);
/// ```
#[must_use]
pub fn insert<T: Clone + Default>(array: &[T], index: isize, elems: &[T]) -> Vec<T> {
    if elems.is_empty() {
        return array.to_vec();
    }
    if array.is_empty() {
        return elems.to_vec();
    }

    let len = array.len();
    let index = if index < 0 {
        (index % len as isize + len as isize) as usize
    } else {
        index as usize
    };

    let mut result = vec![T::default(); len.max(index) + elems.len()];
    let head = len.min(index);
    result[..head].clone_from_slice(&array[..head]);
    result[index..index + elems.len()].clone_from_slice(elems);
    if index < len {
        result[index + elems.len()..].clone_from_slice(&array[index..]);
    }
    result
}

/// Renders `[a, b, c]`.
#[must_use]
pub fn to_string<T: Display>(array: &[T]) -> String {
    let mut out = String::from("[");
    for (i, item) in array.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

#[must_use]
pub fn contains<T: PartialEq>(array: &[T], value: &T) -> bool {
    array.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(is_empty::<i32>(None));
        assert!(is_empty::<i32>(Some(&[])));
        assert!(is_not_empty(Some(&[1])));
        assert_eq!(length::<u8>(None), 0);
        assert_eq!(length(Some(&[1, 2])), 2);
        assert_eq!(clone(Some(&[1, 2][..])), Some(vec![1, 2]));
    }

    #[test]
    fn test_insert_edges() {
        assert_eq!(insert::<i32>(&[], 3, &[1]), vec![1]);
        assert_eq!(insert(&[1, 2], 0, &[]), vec![1, 2]);
        assert_eq!(insert(&[1, 2, 3], 0, &[7, 8]), vec![7, 8, 1, 2, 3]);
        assert_eq!(insert(&[1, 2, 3], -3, &[7]), vec![1, 2, 3, 7]);
        assert_eq!(insert(&[1, 2, 3], -5, &[7]), vec![1, 7, 2, 3]);
        assert_eq!(append(&["a".to_owned()], &["b".to_owned()]), vec!["a", "b"]);
        assert_eq!(append(&[], &[1]), vec![1]);
    }

    #[test]
    fn test_to_string_and_contains() {
        assert_eq!(to_string(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(to_string::<i32>(&[]), "[]");
        assert!(contains(&["a", "b"], &"b"));
    }
}
