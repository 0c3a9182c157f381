//! Levenshtein edit distance.
//!
//! Strings are compared byte by byte, the same unit `str::len` counts. The
//! built-in reference domains are ASCII, where bytes and characters coincide;
//! for non-ASCII input every byte of a multi-byte character is a separate
//! edit unit.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-byte edits (insertions, deletions, or substitutions)
/// required to change one string into the other.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a = s1.as_bytes();
    let b = s2.as_bytes();
    let len1 = a.len();
    let len2 = b.len();

    // Row 0 and column 0 hold the cost of building from / reducing to the empty string
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Calculate Levenshtein distance with a ceiling for early termination.
/// Returns None if the distance exceeds `max_distance`. The result, when
/// present, always equals [`levenshtein_distance`].
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_within(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    let a = s1.as_bytes();
    let b = s2.as_bytes();
    let len1 = a.len();
    let len2 = b.len();

    if len1.abs_diff(len2) > max_distance {
        return None;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so nothing below can come back under the ceiling
        if min_in_row > max_distance {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= max_distance {
        Some(distance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "gmail.com",
        "gmial.com",
        "gmal.com",
        "yahoo.com",
        "yaho.com",
        "hotmail.co.uk",
        "mail.ru",
        "qq.com",
    ];

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("yaho.com", "yahoo.com"), 1);
    }

    #[test]
    fn test_transposition_counts_twice() {
        assert_eq!(levenshtein_distance("gmial.com", "gmail.com"), 2);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_empty_string_distance_is_length() {
        for s in SAMPLES {
            assert_eq!(levenshtein_distance("", s), s.len());
            assert_eq!(levenshtein_distance(s, ""), s.len());
        }
    }

    #[test]
    fn test_metric_properties() {
        for a in SAMPLES {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in SAMPLES {
                let ab = levenshtein_distance(a, b);
                assert_eq!(ab, levenshtein_distance(b, a), "{a:?} vs {b:?}");
                assert_eq!(ab == 0, a == b);
                for c in SAMPLES {
                    let ac = levenshtein_distance(a, c);
                    let bc = levenshtein_distance(b, c);
                    assert!(ac <= ab + bc, "triangle fails for {a:?} {b:?} {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_byte_wise_comparison() {
        // 'é' is two bytes in UTF-8, so replacing it with 'e' costs two edits
        assert_eq!(levenshtein_distance("café", "cafe"), 2);
        assert_eq!(levenshtein_distance("", "é"), 2);
    }

    #[test]
    fn test_levenshtein_distance_within() {
        assert_eq!(levenshtein_distance_within("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_within("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_within("gmail.com", "gmail.com", 0), Some(0));
        assert_eq!(levenshtein_distance_within("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_within("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_within("", "", 0), Some(0));
        assert_eq!(levenshtein_distance_within("", "ab", 2), Some(2));
    }

    #[test]
    fn test_within_agrees_with_full_matrix() {
        for a in SAMPLES {
            for b in SAMPLES {
                let full = levenshtein_distance(a, b);
                for max in 0..=12 {
                    let expected = if full <= max { Some(full) } else { None };
                    assert_eq!(
                        levenshtein_distance_within(a, b, max),
                        expected,
                        "{a:?} vs {b:?} within {max}"
                    );
                }
            }
        }
    }
}
