//! Spelling suggestion generation for member names.
//!
//! Given the set of names a class actually exposes and a name a caller got
//! wrong, [`suggest`] finds the closest match under an acceptance bound so
//! error messages can offer a "did you mean" hint.

use ahash::AHashSet;

use crate::spelling::levenshtein::weighted_distance_within;

/// Accessor prefixes stripped before comparing normalized roots.
pub const ACCESSOR_PREFIXES: [&str; 5] = ["get", "set", "has", "is", "add"];

/// Penalty added to a match between prefix-stripped roots, so `getFoo` still
/// suggests `addFoo` while an exact-string near miss is preferred.
pub const NORMALIZED_ROOT_PENALTY: u32 = 20;

/// Strip a single accessor prefix when it is followed by an uppercase
/// letter, producing the normalized root of an accessor-style name.
///
/// `getTitle` becomes `Title`, while `getting` is left alone.
pub fn strip_accessor_prefix(name: &str) -> &str {
    for prefix in ACCESSOR_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                return rest;
            }
        }
    }
    name
}

/// The initial acceptance bound for a target name: longer names tolerate
/// proportionally more edit cost.
pub fn acceptance_bound(target: &str) -> f64 {
    (target.len() as f64 / 4.0 + 1.0) * 10.0 + 0.1
}

/// Find the best spelling suggestion for `target` among `candidates`.
///
/// Candidates are scored by weighted edit distance against the target, and
/// again by the distance between prefix-stripped roots plus a fixed penalty.
/// The lowest score strictly under the acceptance bound wins; the bound
/// tightens as better candidates are found, so ties keep the candidate seen
/// first. Iteration order is the caller-supplied order with duplicates
/// removed.
pub fn suggest<I, S>(candidates: I, target: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates: Vec<S> = candidates.into_iter().collect();
    let normalized_target = strip_accessor_prefix(target);

    let mut best: Option<&str> = None;
    let mut bound = acceptance_bound(target);
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(candidates.len());

    for candidate in &candidates {
        let candidate = candidate.as_ref();
        if !seen.insert(candidate) || candidate == target {
            continue;
        }

        // Largest integer cost still strictly below the current bound.
        let max_cost = bound.ceil() as u32 - 1;

        let score = match weighted_distance_within(candidate, target, max_cost) {
            Some(distance) => distance,
            None => {
                if max_cost < NORMALIZED_ROOT_PENALTY {
                    continue;
                }
                match weighted_distance_within(
                    strip_accessor_prefix(candidate),
                    normalized_target,
                    max_cost - NORMALIZED_ROOT_PENALTY,
                ) {
                    Some(distance) => distance + NORMALIZED_ROOT_PENALTY,
                    None => continue,
                }
            }
        };

        bound = score as f64;
        best = Some(candidate);
    }

    best.map(|name| name.to_string())
}
