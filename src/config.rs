use crate::core::classifier::{DEFAULT_FUZZY_THRESHOLD, DEFAULT_MIN_FUZZY_WORD_LEN};
use crate::error::VoxResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One extra correction rule from the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub from: String,
    pub to: String,
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Corrections, applied after the built-in tables
    pub domain_corrections: Vec<CorrectionEntry>,
    pub word_corrections: Vec<CorrectionEntry>,

    // Classification
    pub fuzzy_threshold: f64,
    pub min_fuzzy_word_len: usize,

    // Meta
    pub log_level: String,
    pub audit_log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain_corrections: Vec::new(),
            word_corrections: Vec::new(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_fuzzy_word_len: DEFAULT_MIN_FUZZY_WORD_LEN,
            log_level: "info".to_string(),
            audit_log_path: None,
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> VoxResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, or defaults if absent
    pub fn load_from(path: &Path) -> VoxResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                if let Err(e) = std::fs::rename(path, &backup_path) {
                    tracing::warn!(
                        "⚠️ Could not back up corrupt config to {}: {}",
                        backup_path.display(),
                        e
                    );
                }
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> VoxResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> VoxResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Where processed commands are appended when auditing is on
    pub fn audit_path(&self) -> PathBuf {
        self.audit_log_path
            .clone()
            .unwrap_or_else(|| config_dir().join("audit.log"))
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxcmd")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}
