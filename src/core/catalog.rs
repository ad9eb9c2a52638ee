//! Intent Phrase Catalog
//!
//! Named intent categories, each holding an ordered set of trigger phrases,
//! flattened into an ordered phrase → intent lookup.

use crate::error::{VoxError, VoxResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::tables::INTENT_PHRASES;

/// Coarse semantic category of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Navigation,
    FormFilling,
    Click,
    Login,
    Search,
    Help,
    Exit,
    /// No catalog phrase matched
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Navigation => "navigation",
            Intent::FormFilling => "form_filling",
            Intent::Click => "click",
            Intent::Login => "login",
            Intent::Search => "search",
            Intent::Help => "help",
            Intent::Exit => "exit",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered intent → phrases mapping with its flattened reverse lookup
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    categories: Vec<(Intent, Vec<String>)>,
    /// Every phrase exactly once, in category order then phrase order
    lookup: Vec<(String, Intent)>,
}

impl IntentCatalog {
    /// Build a catalog, rejecting empty phrases and any phrase assigned twice
    pub fn new(categories: Vec<(Intent, Vec<String>)>) -> VoxResult<Self> {
        let mut seen: HashMap<String, Intent> = HashMap::new();
        let mut lookup = Vec::new();
        let mut normalized = Vec::with_capacity(categories.len());

        for (intent, phrases) in categories {
            let mut cleaned = Vec::with_capacity(phrases.len());
            for phrase in phrases {
                let phrase = phrase.trim().to_lowercase();
                if phrase.is_empty() {
                    return Err(VoxError::InvalidPhrase(intent.to_string()));
                }
                if let Some(first) = seen.get(&phrase) {
                    return Err(VoxError::DuplicatePhrase {
                        phrase,
                        first: first.to_string(),
                        second: intent.to_string(),
                    });
                }
                seen.insert(phrase.clone(), intent);
                lookup.push((phrase.clone(), intent));
                cleaned.push(phrase);
            }
            normalized.push((intent, cleaned));
        }

        Ok(Self {
            categories: normalized,
            lookup,
        })
    }

    /// Catalog built from the compiled-in phrase table
    pub fn builtin() -> VoxResult<Self> {
        Self::new(
            INTENT_PHRASES
                .iter()
                .map(|(intent, phrases)| {
                    (*intent, phrases.iter().map(|p| p.to_string()).collect())
                })
                .collect(),
        )
    }

    /// Phrases of one category, in their defined order
    pub fn phrases(&self, intent: Intent) -> &[String] {
        self.categories
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }

    /// Flattened phrase → intent pairs in priority order
    pub fn lookup(&self) -> &[(String, Intent)] {
        &self.lookup
    }

    pub fn intent_of(&self, phrase: &str) -> Option<Intent> {
        self.lookup
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, intent)| *intent)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
