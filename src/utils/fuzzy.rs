//! Fuzzy matching utilities
//!
//! Normalized Levenshtein similarity on a 0.0..=1.0 scale, where 1.0 is an
//! exact match.

use strsim::normalized_levenshtein;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Calculate similarity score between two strings
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Find the best match at or above `cutoff`
///
/// Candidates are scanned in order and only a strictly better score replaces
/// the current best, so ties go to the earliest candidate.
pub fn find_best_match<'a, I>(search_term: &str, candidates: I, cutoff: f64) -> Option<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let search_lower = search_term.to_lowercase();
    let mut best: Option<FuzzyMatch> = None;

    for candidate in candidates {
        let score = normalized_levenshtein(&search_lower, &candidate.to_lowercase());
        if score < cutoff {
            continue;
        }
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(FuzzyMatch {
                value: candidate.to_string(),
                score,
            });
        }
    }

    best
}
