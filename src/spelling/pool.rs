//! Candidate name pools for suggestion lookups.

use ahash::AHashSet;

/// An ordered, duplicate-free collection of member names.
///
/// Dispatch assembles one of these from several sources (declared fields,
/// annotated virtual properties, method tables, caller-supplied extras)
/// before asking for a spelling suggestion. Insertion order is preserved,
/// which is what makes tie-breaking in the suggester deterministic.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    names: Vec<String>,
    seen: AHashSet<String>,
}

impl CandidatePool {
    /// Create a new empty pool.
    pub fn new() -> Self {
        CandidatePool {
            names: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    /// Add a name to the pool. Returns false if it was already present.
    pub fn push<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    /// Add every name from an iterator, keeping first occurrences.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.push(name);
        }
    }

    /// Check whether a name is in the pool.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Iterate names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Get the number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_preserves_order_and_dedupes() {
        let mut pool = CandidatePool::new();
        assert!(pool.push("title"));
        assert!(pool.push("body"));
        assert!(!pool.push("title"));
        pool.extend(["body", "author"]);

        let names: Vec<&str> = pool.iter().collect();
        assert_eq!(names, vec!["title", "body", "author"]);
        assert_eq!(pool.len(), 3);
        assert!(pool.contains("author"));
        assert!(!pool.contains("missing"));
    }

    #[test]
    fn test_empty_pool() {
        let pool = CandidatePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
    }
}
