//! String similarity based on the longest common subsequence (LCS).

/// Share of `b` covered by the longest common subsequence of `a` and `b`, in `[0, 1]`.
///
/// Two missing strings are identical (`1.0`); a single missing string shares nothing (`0.0`).
/// The measure is not symmetric: it is normalised by the length of `b`.
///
/// ```rust
/// use satchel_text::similarity::similarity;
///
/// assert_eq!(similarity(Some("abc"), Some("abc")), 1.0);
/// assert_eq!(similarity(Some("abcd"), Some("ad")), 1.0);
/// assert_eq!(similarity(Some("ad"), Some("abcd")), 0.5);
/// assert_eq!(similarity(None, None), 1.0);
/// assert_eq!(similarity(Some("x"), None), 0.0);
/// ```
#[must_use]
pub fn similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (a, b) {
        (None, None) => return 1.0,
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };
    let b_len = b.chars().count();
    if b_len == 0 {
        // The LCS with an empty string is always empty.
        return 1.0;
    }
    let common = longest_common_subsequence(a, b).chars().count();
    common as f64 / b_len as f64
}

/// Reconstructs one longest common subsequence of `left` and `right`.
#[must_use]
pub fn longest_common_subsequence(left: &str, right: &str) -> String {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    let table = lcs_table(&left, &right);

    let mut i = left.len();
    let mut j = right.len();
    let mut reversed = Vec::with_capacity(table[i][j]);
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            reversed.push(left[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i][j - 1] < table[i - 1][j] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    reversed.into_iter().rev().collect()
}

/// `table[i][j]` is the LCS length of `left[..i]` and `right[..j]`.
fn lcs_table(left: &[char], right: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; right.len() + 1]; left.len() + 1];
    for (i, l) in left.iter().enumerate() {
        for (j, r) in right.iter().enumerate() {
            table[i + 1][j + 1] =
                if l == r { table[i][j] + 1 } else { table[i + 1][j].max(table[i][j + 1]) };
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_examples() {
        assert_eq!(longest_common_subsequence("ABCBDAB", "BDCABA").chars().count(), 4);
        assert_eq!(longest_common_subsequence("abc", "xyz"), "");
        assert_eq!(longest_common_subsequence("", "abc"), "");
        assert_eq!(longest_common_subsequence("上海市浦东", "浦东新区"), "浦东");
    }

    #[test]
    fn test_empty_second_string() {
        assert!((similarity(Some("abc"), Some("")) - 1.0).abs() < f64::EPSILON);
        assert!((similarity(Some(""), Some("abc"))).abs() < f64::EPSILON);
    }
}
