//! Weighted Levenshtein distance for identifier similarity.

use std::cmp::min;

/// Cost of replacing one character with another.
pub const SUBSTITUTION_COST: u32 = 10;
/// Cost of inserting a character (relative to transforming `from` into `to`).
pub const INSERTION_COST: u32 = 11;
/// Cost of deleting a character.
pub const DELETION_COST: u32 = 10;

/// Calculate the weighted edit distance transforming `from` into `to`.
///
/// The insertion cost is deliberately higher than substitution and deletion
/// so that a candidate missing a character ranks slightly worse than one
/// with a wrong character. The costs are asymmetric, so the direction of the
/// arguments matters.
#[allow(clippy::needless_range_loop)]
pub fn weighted_distance(from: &str, to: &str) -> u32 {
    let from_chars: Vec<char> = from.chars().collect();
    let to_chars: Vec<char> = to.chars().collect();
    let len_from = from_chars.len();
    let len_to = to_chars.len();

    if len_from == 0 {
        return len_to as u32 * INSERTION_COST;
    }
    if len_to == 0 {
        return len_from as u32 * DELETION_COST;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<u32> = (0..=len_to).map(|j| j as u32 * INSERTION_COST).collect();
    let mut curr_row = vec![0u32; len_to + 1];

    for i in 1..=len_from {
        curr_row[0] = i as u32 * DELETION_COST;

        for j in 1..=len_to {
            let cost = if from_chars[i - 1] == to_chars[j - 1] {
                0
            } else {
                SUBSTITUTION_COST
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + DELETION_COST,
                    curr_row[j - 1] + INSERTION_COST,
                ),
                prev_row[j - 1] + cost,
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_to]
}

/// Calculate the weighted edit distance with a maximum cost for early
/// termination. Returns None if the distance exceeds `max_cost`, which is
/// cheaper when filtering candidates against a tightening bound.
#[allow(clippy::needless_range_loop)]
pub fn weighted_distance_within(from: &str, to: &str, max_cost: u32) -> Option<u32> {
    let from_chars: Vec<char> = from.chars().collect();
    let to_chars: Vec<char> = to.chars().collect();
    let len_from = from_chars.len();
    let len_to = to_chars.len();

    // A length difference can only be bridged by insertions or deletions.
    let floor = if len_to > len_from {
        (len_to - len_from) as u32 * INSERTION_COST
    } else {
        (len_from - len_to) as u32 * DELETION_COST
    };
    if floor > max_cost {
        return None;
    }

    if len_from == 0 || len_to == 0 {
        return Some(floor);
    }

    let mut prev_row: Vec<u32> = (0..=len_to).map(|j| j as u32 * INSERTION_COST).collect();
    let mut curr_row = vec![0u32; len_to + 1];

    for i in 1..=len_from {
        curr_row[0] = i as u32 * DELETION_COST;
        let mut min_in_row = curr_row[0];

        for j in 1..=len_to {
            let cost = if from_chars[i - 1] == to_chars[j - 1] {
                0
            } else {
                SUBSTITUTION_COST
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + DELETION_COST,
                    curr_row[j - 1] + INSERTION_COST,
                ),
                prev_row[j - 1] + cost,
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Every path through this row can only get more expensive.
        if min_in_row > max_cost {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len_to];
    if distance <= max_cost {
        Some(distance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_distance_trivial() {
        assert_eq!(weighted_distance("", ""), 0);
        assert_eq!(weighted_distance("", "a"), INSERTION_COST);
        assert_eq!(weighted_distance("a", ""), DELETION_COST);
        assert_eq!(weighted_distance("a", "a"), 0);
    }

    #[test]
    fn test_weighted_distance_single_edits() {
        // substitution
        assert_eq!(weighted_distance("ab", "ac"), SUBSTITUTION_COST);
        // insertion into the candidate
        assert_eq!(weighted_distance("getFoo", "gettFoo"), INSERTION_COST);
        // deletion from the candidate
        assert_eq!(weighted_distance("gettFoo", "getFoo"), DELETION_COST);
    }

    #[test]
    fn test_weighted_distance_asymmetry() {
        // One direction is an insertion, the other a deletion, and the
        // weights differ on purpose.
        assert_ne!(weighted_distance("abc", "abcd"), weighted_distance("abcd", "abc"));
        assert_eq!(weighted_distance("abc", "abcd"), INSERTION_COST);
        assert_eq!(weighted_distance("abcd", "abc"), DELETION_COST);
    }

    #[test]
    fn test_weighted_distance_mixed() {
        // kitten -> sitting: 2 substitutions + 1 insertion
        assert_eq!(
            weighted_distance("kitten", "sitting"),
            2 * SUBSTITUTION_COST + INSERTION_COST
        );
        // completely unrelated strings cost a substitution per character
        assert_eq!(weighted_distance("abc", "def"), 3 * SUBSTITUTION_COST);
    }

    #[test]
    fn test_weighted_distance_within() {
        assert_eq!(
            weighted_distance_within("getFoo", "gettFoo", 20),
            Some(INSERTION_COST)
        );
        assert_eq!(weighted_distance_within("getFoo", "gettFoo", 10), None);
        assert_eq!(weighted_distance_within("abc", "abc", 0), Some(0));
        // length difference alone already exceeds the cap
        assert_eq!(weighted_distance_within("a", "abcd", 20), None);
        assert_eq!(weighted_distance_within("bar", "getFoo", 40), None);
    }

    #[test]
    fn test_within_agrees_with_exact() {
        let pairs = [
            ("title", "titel"),
            ("getTitle", "getTitel"),
            ("onSave", "onSvae"),
            ("setName", "setNmae"),
        ];

        for (from, to) in pairs {
            let exact = weighted_distance(from, to);
            assert_eq!(weighted_distance_within(from, to, exact), Some(exact));
            assert_eq!(weighted_distance_within(from, to, exact - 1), None);
        }
    }
}
