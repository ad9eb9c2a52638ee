use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::CommandType;

/// Append-only log of processed commands
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one processed command to the audit log
    pub fn append(&self, original: &str, processed: &str, command_type: CommandType) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(
            file,
            "[{}] '{}' -> '{}' ({})",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            original,
            processed,
            command_type
        )?;
        Ok(())
    }
}
