//! Text matching for the search filter.
//!
//! The matching strategy is host-supplied so applications can plug in their
//! localisation-aware or fuzzy matcher; [`SubstringMatch`] is the stock
//! predicate used when nothing is injected.

/// Predicate deciding whether an item label stays visible for a query.
pub trait TextMatch {
    fn matches(&self, candidate: &str, query: &str) -> bool;
}

/// Case-insensitive substring matching. An empty query matches everything.
#[derive(Debug, Default)]
pub struct SubstringMatch;

impl TextMatch for SubstringMatch {
    fn matches(&self, candidate: &str, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        candidate.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        let matcher = SubstringMatch;
        assert!(matcher.matches("Apple", ""));
        assert!(matcher.matches("", ""));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let matcher = SubstringMatch;
        assert!(matcher.matches("Grape", "AP"));
        assert!(matcher.matches("Apple", "ap"));
        assert!(!matcher.matches("Banana", "ap"));
    }
}
