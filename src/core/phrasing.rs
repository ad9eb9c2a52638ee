//! Phrasing Normalization
//!
//! Rewrites navigation and click commands into one canonical phrasing so the
//! dispatcher only has to understand `go to <target>` and `click <element>`.

use tracing::debug;

use super::catalog::Intent;
use super::classifier::IntentClassifier;

/// Strip a click `phrase` from the front of `text` when it ends at a word
/// boundary, so "clicking" is never split into "click ing"
fn strip_phrase<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(phrase)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Rewrite `text` for an already classified `intent`
pub fn normalize_for_intent(classifier: &IntentClassifier, text: &str, intent: Intent) -> String {
    let text_lower = text.to_lowercase();
    let catalog = classifier.catalog();

    match intent {
        Intent::Navigation => {
            let already_canonical = catalog
                .phrases(Intent::Navigation)
                .iter()
                .any(|p| text_lower.starts_with(p.as_str()));
            if already_canonical {
                return text.to_string();
            }
            match text_lower.split_whitespace().last() {
                Some(target) => {
                    debug!("Standardized navigation target: '{}'", target);
                    format!("go to {}", target)
                }
                None => text.to_string(),
            }
        }
        Intent::Click => {
            for phrase in catalog.phrases(Intent::Click) {
                if let Some(rest) = strip_phrase(&text_lower, phrase) {
                    let element = rest.trim();
                    if element.is_empty() {
                        return text.to_string();
                    }
                    debug!("Standardized click element: '{}'", element);
                    return format!("click {}", element);
                }
            }
            text.to_string()
        }
        _ => text.to_string(),
    }
}

/// Classify `text` and rewrite it into canonical phrasing
pub fn normalize(classifier: &IntentClassifier, text: &str) -> String {
    let intent = classifier.classify(&text.to_lowercase());
    normalize_for_intent(classifier, text, intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::IntentCatalog;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(IntentCatalog::builtin().unwrap(), 0.6, 3)
    }

    #[test]
    fn test_navigation_already_canonical() {
        let c = classifier();
        assert_eq!(normalize(&c, "go to redbus.in"), "go to redbus.in");
        assert_eq!(normalize(&c, "Take me to Google.com"), "Take me to Google.com");
        assert_eq!(normalize(&c, "open settings"), "open settings");
    }

    #[test]
    fn test_navigation_rewritten_to_go_to() {
        let c = classifier();
        assert_eq!(normalize(&c, "please visit example.com"), "go to example.com");
        assert_eq!(normalize(&c, "I want to Launch Gmail"), "go to gmail");
    }

    #[test]
    fn test_navigation_prefix_is_plain_starts_with() {
        let c = classifier();
        assert_eq!(normalize(&c, "opened example.com"), "opened example.com");
        assert_eq!(normalize(&c, "getting started"), "getting started");
        assert_eq!(normalize(&c, "viewing the page"), "viewing the page");
    }

    #[test]
    fn test_click_prefix_needs_word_boundary() {
        let c = classifier();
        assert_eq!(normalize(&c, "clicking the button"), "clicking the button");
        assert_eq!(normalize(&c, "pressure gauge"), "pressure gauge");
        assert_eq!(normalize(&c, "press on the gauge"), "click on the gauge");
    }

    #[test]
    fn test_click_rewritten() {
        let c = classifier();
        assert_eq!(normalize(&c, "press the blue button"), "click the blue button");
        assert_eq!(normalize(&c, "Tap on Continue"), "click on continue");
        assert_eq!(normalize(&c, "click the login button"), "click the login button");
    }

    #[test]
    fn test_click_not_at_start_unchanged() {
        let c = classifier();
        assert_eq!(normalize(&c, "now click it"), "now click it");
    }

    #[test]
    fn test_bare_click_unchanged() {
        let c = classifier();
        assert_eq!(normalize(&c, "click"), "click");
    }

    #[test]
    fn test_other_intents_unchanged() {
        let c = classifier();
        assert_eq!(normalize(&c, "Enter my Email"), "Enter my Email");
        assert_eq!(normalize(&c, "search for flights"), "search for flights");
        assert_eq!(normalize(&c, "blorp zzz"), "blorp zzz");
        assert_eq!(normalize(&c, ""), "");
    }
}
