//! Edit distance implementations.
//!
//! Two interchangeable implementations of the standard Levenshtein distance
//! (insertions, deletions, substitutions, each with cost 1):
//!
//! - **Iterative**: dynamic programming over a `(n+1) × (m+1)` table, kept as
//!   two rolling rows. `O(n·m)` time.
//! - **Recursive**: naive top-down recursion with no memoization. `O(3^n)`
//!   time; it exists as the scaling contrast for the benchmark harness.
//!
//! Both operate on Unicode scalar values (`char`), so they agree on every
//! input, including multi-byte text. A character outside the Basic
//! Multilingual Plane is one unit: `"😀"` is at distance 1 from `""`.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Longest probe prefix the benchmark harness feeds to the recursive variant.
///
/// The recursive variant is exponential in input length; beyond this length a
/// full dictionary scan stops being interactive.
pub const RECURSIVE_LENGTH_CUTOFF: usize = 8;

/// Compute the Levenshtein distance with the dynamic-programming variant.
///
/// Row `i` of the table holds the distances between the first `i` characters
/// of `target` and every prefix of `source`. Only the previous row is needed
/// to fill the current one.
///
/// # Example
///
/// ```rust
/// use nearword::distance::iterative_distance;
///
/// assert_eq!(iterative_distance("kucing", "kucang"), 1);
/// assert_eq!(iterative_distance("kitten", "sitting"), 3);
/// assert_eq!(iterative_distance("", "abc"), 3);
/// ```
pub fn iterative_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Row 0 is 0..=m
    let mut prev_row: Vec<usize> = (0..=m).collect();
    let mut curr_row = vec![0; m + 1];

    for i in 1..=n {
        // Column 0 is 0..=n
        curr_row[0] = i;

        for j in 1..=m {
            curr_row[j] = if target_chars[i - 1] == source_chars[j - 1] {
                prev_row[j - 1]
            } else {
                1 + prev_row[j - 1] // substitution
                    .min(curr_row[j - 1]) // insertion
                    .min(prev_row[j]) // deletion
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[m]
}

/// Compute the Levenshtein distance with the naive recursive variant.
///
/// Every mismatch branches into deletion, insertion and substitution
/// subproblems, none of which are cached. Runtime grows as `O(3^n)` and the
/// recursion depth is `len(source) + len(target)`, so callers must keep
/// inputs short (see [`RECURSIVE_LENGTH_CUTOFF`]).
///
/// # Example
///
/// ```rust
/// use nearword::distance::recursive_distance;
///
/// assert_eq!(recursive_distance("kucing", "kucang"), 1);
/// assert_eq!(recursive_distance("abc", ""), 3);
/// ```
pub fn recursive_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    recurse(&source_chars, &target_chars)
}

fn recurse(source: &[char], target: &[char]) -> usize {
    match (source.split_first(), target.split_first()) {
        (None, _) => target.len(),
        (_, None) => source.len(),
        (Some((a, source_tail)), Some((b, target_tail))) => {
            if a == b {
                return recurse(source_tail, target_tail);
            }

            1 + recurse(source_tail, target) // deletion
                .min(recurse(source, target_tail)) // insertion
                .min(recurse(source_tail, target_tail)) // substitution
        }
    }
}

/// A function that scores two strings by edit distance.
///
/// Implemented by [`DistanceVariant`] and by any `Fn(&str, &str) -> usize`,
/// which lets a search be driven by an instrumented metric.
pub trait DistanceMetric {
    /// Edit distance between `source` and `target`.
    fn distance(&self, source: &str, target: &str) -> usize;
}

impl<F> DistanceMetric for F
where
    F: Fn(&str, &str) -> usize,
{
    #[inline]
    fn distance(&self, source: &str, target: &str) -> usize {
        self(source, target)
    }
}

/// Selects one of the two distance implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceVariant {
    /// Naive recursion, exponential time.
    Recursive,
    /// Dynamic programming, quadratic time.
    #[default]
    Iterative,
}

impl DistanceVariant {
    /// Both variants, in the order the benchmark runs them by default.
    pub const ALL: [DistanceVariant; 2] = [DistanceVariant::Recursive, DistanceVariant::Iterative];

    /// Display label used for timing series.
    pub fn label(self) -> &'static str {
        match self {
            DistanceVariant::Recursive => "Recursive",
            DistanceVariant::Iterative => "Iterative",
        }
    }

    /// Longest input this variant is benchmarked on, if bounded.
    pub fn length_cutoff(self) -> Option<usize> {
        match self {
            DistanceVariant::Recursive => Some(RECURSIVE_LENGTH_CUTOFF),
            DistanceVariant::Iterative => None,
        }
    }
}

impl DistanceMetric for DistanceVariant {
    #[inline]
    fn distance(&self, source: &str, target: &str) -> usize {
        match self {
            DistanceVariant::Recursive => recursive_distance(source, target),
            DistanceVariant::Iterative => iterative_distance(source, target),
        }
    }
}

impl fmt::Display for DistanceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive" | "rec" | "naive" => Ok(DistanceVariant::Recursive),
            "iterative" | "iter" | "dp" => Ok(DistanceVariant::Iterative),
            _ => Err(format!(
                "Unknown distance variant: {}. Valid options: recursive, iterative",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterative_identical() {
        assert_eq!(iterative_distance("test", "test"), 0);
        assert_eq!(iterative_distance("", ""), 0);
    }

    #[test]
    fn test_iterative_empty() {
        assert_eq!(iterative_distance("", "test"), 4);
        assert_eq!(iterative_distance("test", ""), 4);
    }

    #[test]
    fn test_iterative_basic() {
        assert_eq!(iterative_distance("kitten", "sitting"), 3);
        assert_eq!(iterative_distance("saturday", "sunday"), 3);
        assert_eq!(iterative_distance("kucing", "kucang"), 1);
        assert_eq!(iterative_distance("test", "tset"), 2);
    }

    #[test]
    fn test_recursive_basic() {
        assert_eq!(recursive_distance("kitten", "sitting"), 3);
        assert_eq!(recursive_distance("saturday", "sunday"), 3);
        assert_eq!(recursive_distance("kucing", "kucang"), 1);
        assert_eq!(recursive_distance("", "abc"), 3);
        assert_eq!(recursive_distance("abc", ""), 3);
    }

    #[test]
    fn test_recursive_matches_iterative() {
        let cases = [
            ("", ""),
            ("a", "b"),
            ("abc", "abc"),
            ("rumah", "ramah"),
            ("makan", "minum"),
            ("buku", "bukuku"),
            ("algoritm", "altruist"),
        ];

        for (a, b) in cases {
            assert_eq!(
                recursive_distance(a, b),
                iterative_distance(a, b),
                "Mismatch for '{}' vs '{}'",
                a,
                b
            );
        }
    }

    #[test]
    fn test_unicode_is_char_level() {
        assert_eq!(iterative_distance("café", "cafe"), 1);
        assert_eq!(recursive_distance("café", "cafe"), 1);
        assert_eq!(iterative_distance("日本", "日本"), 0);
        assert_eq!(iterative_distance("", "¡"), 1);
        assert_eq!(recursive_distance("", "¡"), 1);
    }

    #[test]
    fn test_astral_character_is_one_unit() {
        assert_eq!(iterative_distance("😀", ""), 1);
        assert_eq!(recursive_distance("😀", ""), 1);
        assert_eq!(iterative_distance("a😀b", "ab"), 1);
        assert_eq!(recursive_distance("😀😁", "😁"), 1);
    }

    #[test]
    fn test_variant_dispatch() {
        assert_eq!(DistanceVariant::Recursive.distance("test", "best"), 1);
        assert_eq!(DistanceVariant::Iterative.distance("test", "best"), 1);
        assert_eq!(DistanceVariant::Recursive.length_cutoff(), Some(8));
        assert_eq!(DistanceVariant::Iterative.length_cutoff(), None);
    }

    #[test]
    fn test_variant_parse_and_label() {
        assert_eq!("dp".parse::<DistanceVariant>(), Ok(DistanceVariant::Iterative));
        assert_eq!(
            "Recursive".parse::<DistanceVariant>(),
            Ok(DistanceVariant::Recursive)
        );
        assert!("memo".parse::<DistanceVariant>().is_err());
        assert_eq!(DistanceVariant::Iterative.to_string(), "Iterative");
    }

    #[test]
    fn test_closure_metric() {
        let constant = |_: &str, _: &str| 7;
        assert_eq!(constant.distance("a", "b"), 7);
    }
}
