//! Intent Classifier
//!
//! Exact phrase containment first, then fuzzy per-word matching against the
//! flattened catalog.

use crate::utils::fuzzy::find_best_match;
use tracing::debug;

use super::catalog::{Intent, IntentCatalog};

/// Default similarity a word needs to accept a fuzzy match (inclusive)
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Words shorter than this are never fuzzy matched
pub const DEFAULT_MIN_FUZZY_WORD_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct IntentClassifier {
    catalog: IntentCatalog,
    fuzzy_threshold: f64,
    min_word_len: usize,
}

impl IntentClassifier {
    pub fn new(catalog: IntentCatalog, fuzzy_threshold: f64, min_word_len: usize) -> Self {
        Self {
            catalog,
            fuzzy_threshold,
            min_word_len,
        }
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Classify text into an intent, or `Intent::Unknown`
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return Intent::Unknown;
        }

        // Catalog order is priority order
        for (phrase, intent) in self.catalog.lookup() {
            if text.contains(phrase.as_str()) {
                debug!("Exact intent match: '{}' -> {}", phrase, intent);
                return *intent;
            }
        }

        for word in text.split_whitespace() {
            if word.chars().count() < self.min_word_len {
                continue;
            }
            let phrases = self.catalog.lookup().iter().map(|(p, _)| p.as_str());
            if let Some(best) = find_best_match(word, phrases, self.fuzzy_threshold) {
                if let Some(intent) = self.catalog.intent_of(&best.value) {
                    debug!(
                        "Fuzzy intent match: '{}' ~ '{}' ({:.2}) -> {}",
                        word, best.value, best.score, intent
                    );
                    return intent;
                }
            }
        }

        debug!("No intent for: '{}'", text);
        Intent::Unknown
    }
}
