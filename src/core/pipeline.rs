//! Command Pipeline
//!
//! Owns the correction tables, catalog and classifier, and threads a raw
//! transcript through them. Immutable after construction, so one instance can
//! be shared across threads by reference.

use crate::config::Config;
use crate::error::{VoxError, VoxResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{Intent, IntentCatalog};
use super::classifier::{IntentClassifier, DEFAULT_FUZZY_THRESHOLD, DEFAULT_MIN_FUZZY_WORD_LEN};
use super::command_type::{self, CommandType};
use super::corrector::{AppliedCorrection, CorrectionTable, PatternCorrector};
use super::phrasing;

/// Everything the pipeline decided about one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandAnalysis {
    pub original: String,
    pub corrected: String,
    pub intent: Intent,
    pub command_type: CommandType,
    pub normalized: String,
    pub corrections: Vec<AppliedCorrection>,
}

#[derive(Debug, Clone)]
pub struct CommandPipeline {
    corrector: PatternCorrector,
    classifier: IntentClassifier,
}

impl CommandPipeline {
    pub fn new(corrector: PatternCorrector, classifier: IntentClassifier) -> Self {
        Self {
            corrector,
            classifier,
        }
    }

    /// Built-in tables with default thresholds
    pub fn builtin() -> VoxResult<Self> {
        Ok(Self::new(
            PatternCorrector::builtin()?,
            IntentClassifier::new(
                IntentCatalog::builtin()?,
                DEFAULT_FUZZY_THRESHOLD,
                DEFAULT_MIN_FUZZY_WORD_LEN,
            ),
        ))
    }

    /// Built-in tables extended and tuned by `config`
    pub fn from_config(config: &Config) -> VoxResult<Self> {
        if !(0.0..=1.0).contains(&config.fuzzy_threshold) {
            return Err(VoxError::Config(format!(
                "fuzzy_threshold must be within 0.0..=1.0, got {}",
                config.fuzzy_threshold
            )));
        }
        if config.min_fuzzy_word_len == 0 {
            return Err(VoxError::Config(
                "min_fuzzy_word_len must be at least 1".to_string(),
            ));
        }

        let mut domains = CorrectionTable::builtin_domains()?;
        domains.extend(
            config
                .domain_corrections
                .iter()
                .map(|c| (c.from.as_str(), c.to.clone())),
        )?;
        let mut words = CorrectionTable::builtin_words()?;
        words.extend(
            config
                .word_corrections
                .iter()
                .map(|c| (c.from.as_str(), c.to.clone())),
        )?;

        Ok(Self::new(
            PatternCorrector::new(domains, words),
            IntentClassifier::new(
                IntentCatalog::builtin()?,
                config.fuzzy_threshold,
                config.min_fuzzy_word_len,
            ),
        ))
    }

    pub fn corrector(&self) -> &PatternCorrector {
        &self.corrector
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Domain then word correction
    pub fn correct_text(&self, text: &str) -> String {
        self.corrector.correct(text)
    }

    pub fn classify_intent(&self, text: &str) -> Intent {
        self.classifier.classify(text)
    }

    pub fn resolve_command_type(&self, text: &str) -> CommandType {
        command_type::resolve_type(&self.classifier, text)
    }

    pub fn normalize(&self, text: &str) -> String {
        phrasing::normalize(&self.classifier, text)
    }

    /// Full pipeline: correction then normalization
    pub fn process_command(&self, text: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }

        let corrected = self.corrector.correct(text);
        let processed = phrasing::normalize(&self.classifier, &corrected);

        if processed != text {
            info!("🔄 Command processed: '{}' -> '{}'", text, processed);
        }
        processed
    }

    /// Full pipeline plus everything decided along the way
    pub fn analyze(&self, text: &str) -> CommandAnalysis {
        let mut corrections = Vec::new();
        let corrected = self.corrector.correct_logged(text, &mut corrections);
        let corrected_lower = corrected.to_lowercase();
        let intent = self.classifier.classify(&corrected_lower);
        let command_type = command_type::type_for_intent(&corrected_lower, intent);
        let normalized = if corrected.is_empty() {
            corrected.clone()
        } else {
            phrasing::normalize_for_intent(&self.classifier, &corrected, intent)
        };

        CommandAnalysis {
            original: text.to_string(),
            corrected,
            intent,
            command_type,
            normalized,
            corrections,
        }
    }
}
