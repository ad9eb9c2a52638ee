//! Core processing modules
//!
//! Correction tables, intent catalog, classification, command typing and
//! phrasing normalization. Nothing in here performs I/O.

pub mod catalog;
pub mod classifier;
pub mod command_type;
pub mod corrector;
pub mod phrasing;
pub mod pipeline;
pub mod tables;

pub use catalog::{Intent, IntentCatalog};
pub use classifier::IntentClassifier;
pub use command_type::CommandType;
pub use corrector::{AppliedCorrection, CorrectionTable, MatchMode, PatternCorrector};
pub use pipeline::{CommandAnalysis, CommandPipeline};
