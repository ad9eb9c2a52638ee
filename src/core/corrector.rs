//! Pattern Corrector
//!
//! Repairs known transcription errors before any matching happens.

use crate::error::{VoxError, VoxResult};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::tables::{DOMAIN_CORRECTIONS, WORD_CORRECTIONS};

/// How a table's keys are matched against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring, used for domain names
    Literal,
    /// Whole words only, so longer tokens are never split
    WordBoundary,
}

/// Diagnostic record of one substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCorrection {
    pub table: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
struct CorrectionRule {
    from: String,
    to: String,
    pattern: Regex,
}

/// Ordered mapping of misheard token → canonical replacement
#[derive(Debug, Clone)]
pub struct CorrectionTable {
    name: String,
    mode: MatchMode,
    rules: Vec<CorrectionRule>,
}

impl CorrectionTable {
    /// Build a table; patterns are compiled once here
    pub fn new<I, F, T>(name: &str, mode: MatchMode, entries: I) -> VoxResult<Self>
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: Into<String>,
    {
        let mut rules = Vec::new();
        for (from, to) in entries {
            let from = from.as_ref().trim().to_lowercase();
            if from.is_empty() {
                return Err(VoxError::InvalidCorrection(format!(
                    "empty key in {} table",
                    name
                )));
            }
            let escaped = regex::escape(&from);
            let source = match mode {
                MatchMode::Literal => format!("(?i){}", escaped),
                MatchMode::WordBoundary => format!(r"(?i)\b{}\b", escaped),
            };
            rules.push(CorrectionRule {
                pattern: Regex::new(&source)?,
                from,
                to: to.into(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            mode,
            rules,
        })
    }

    pub fn builtin_domains() -> VoxResult<Self> {
        Self::new("domain", MatchMode::Literal, DOMAIN_CORRECTIONS.iter().copied())
    }

    pub fn builtin_words() -> VoxResult<Self> {
        Self::new("word", MatchMode::WordBoundary, WORD_CORRECTIONS.iter().copied())
    }

    /// Append rules after the existing ones
    pub fn extend<I, F, T>(&mut self, entries: I) -> VoxResult<()>
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: Into<String>,
    {
        let extra = Self::new(&self.name, self.mode, entries)?;
        self.rules.extend(extra.rules);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order
    pub fn apply(&self, text: &str) -> String {
        self.apply_logged(text, &mut Vec::new())
    }

    /// Apply every rule in order, recording each substitution in `log`
    pub fn apply_logged(&self, text: &str, log: &mut Vec<AppliedCorrection>) -> String {
        if text.is_empty() {
            return text.to_string();
        }

        let mut result = text.to_string();
        for rule in &self.rules {
            if !rule.pattern.is_match(&result) {
                continue;
            }
            info!(
                "🔄 {} correction: '{}' -> '{}'",
                self.name, rule.from, rule.to
            );
            result = rule
                .pattern
                .replace_all(&result, NoExpand(&rule.to))
                .into_owned();
            log.push(AppliedCorrection {
                table: self.name.clone(),
                from: rule.from.clone(),
                to: rule.to.clone(),
            });
        }
        result
    }
}

/// Domain pass followed by word pass
#[derive(Debug, Clone)]
pub struct PatternCorrector {
    domains: CorrectionTable,
    words: CorrectionTable,
}

impl PatternCorrector {
    pub fn new(domains: CorrectionTable, words: CorrectionTable) -> Self {
        Self { domains, words }
    }

    pub fn builtin() -> VoxResult<Self> {
        Ok(Self::new(
            CorrectionTable::builtin_domains()?,
            CorrectionTable::builtin_words()?,
        ))
    }

    pub fn domains(&self) -> &CorrectionTable {
        &self.domains
    }

    pub fn words(&self) -> &CorrectionTable {
        &self.words
    }

    /// Apply both tables, domains first
    pub fn correct(&self, text: &str) -> String {
        self.correct_logged(text, &mut Vec::new())
    }

    pub fn correct_logged(&self, text: &str, log: &mut Vec<AppliedCorrection>) -> String {
        let text = self.domains.apply_logged(text, log);
        self.words.apply_logged(&text, log)
    }
}
