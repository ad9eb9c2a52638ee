//! VoxCmd Library
//!
//! Turns noisy voice transcripts into canonical commands for an action
//! dispatcher: known mishearings are repaired, the text is classified into an
//! intent, and navigation/click commands are rewritten into one phrasing.
//!
//! The free functions below run against a process-wide pipeline built from
//! the compiled-in tables. Build a [`CommandPipeline`] directly to use custom
//! corrections or thresholds.

pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::{CommandAnalysis, CommandPipeline, CommandType, Intent};
pub use crate::error::{VoxError, VoxResult};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_PIPELINE: CommandPipeline =
        CommandPipeline::builtin().expect("built-in tables are valid");
}

/// The shared pipeline behind the free functions
pub fn default_pipeline() -> &'static CommandPipeline {
    &DEFAULT_PIPELINE
}

/// Apply domain and word corrections only
pub fn correct_text(text: &str) -> String {
    DEFAULT_PIPELINE.correct_text(text)
}

/// Intent name, or `"unknown"`
pub fn classify_intent(text: &str) -> String {
    DEFAULT_PIPELINE.classify_intent(text).to_string()
}

/// Command type label, or `"Unknown"`
pub fn resolve_command_type(text: &str) -> String {
    DEFAULT_PIPELINE.resolve_command_type(text).to_string()
}

/// Correction followed by phrasing normalization
pub fn process_command(text: &str) -> String {
    DEFAULT_PIPELINE.process_command(text)
}
