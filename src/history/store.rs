//! File-backed conversion history
//!
//! The whole history lives in one JSON file that is rewritten atomically
//! (temp file in the same directory, then rename) after every change.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::errors::CurlpyError;
use crate::history::record::{ConversionRecord, ConversionStats, ConversionStatus};

/// Default number of records kept before the oldest are pruned
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// On-disk layout of the history file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    records: Vec<ConversionRecord>,
}

fn first_id() -> u64 {
    1
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            records: Vec::new(),
        }
    }
}

/// Conversion history backed by a JSON file
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
    data: HistoryFile,
}

impl HistoryStore {
    /// Open the history at `path`; a missing file is an empty history
    pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> Result<Self, CurlpyError> {
        let path = path.into();
        let data = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| CurlpyError::History(format!("Failed to read history: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CurlpyError::History(format!("Failed to parse history: {}", e)))?
        } else {
            HistoryFile::default()
        };

        debug!(path = %path.display(), records = data.records.len(), "History loaded");

        Ok(Self {
            path,
            max_entries: max_entries.max(1),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.records.is_empty()
    }

    /// Append a conversion attempt and persist the history
    pub fn record(
        &mut self,
        command: &str,
        output: &str,
        status: ConversionStatus,
        owner: Option<u64>,
    ) -> Result<ConversionRecord, CurlpyError> {
        let record = ConversionRecord {
            id: self.data.next_id,
            owner,
            command: command.to_string(),
            output: output.to_string(),
            status,
            created_at: Utc::now(),
        };
        self.data.next_id += 1;
        self.data.records.push(record.clone());

        if self.data.records.len() > self.max_entries {
            let excess = self.data.records.len() - self.max_entries;
            self.data.records.drain(..excess);
            debug!(pruned = excess, "Pruned oldest history records");
        }

        self.save()?;
        Ok(record)
    }

    /// Most recent records first, optionally restricted to one owner
    pub fn list(&self, limit: usize, owner: Option<u64>) -> Vec<&ConversionRecord> {
        self.data
            .records
            .iter()
            .rev()
            .filter(|r| r.is_owned_by(owner))
            .take(limit)
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&ConversionRecord> {
        self.data.records.iter().find(|r| r.id == id)
    }

    /// Delete a record. Returns false if it does not exist or belongs to another owner.
    pub fn delete(&mut self, id: u64, owner: Option<u64>) -> Result<bool, CurlpyError> {
        let position = match self.data.records.iter().position(|r| r.id == id) {
            Some(position) => position,
            None => return Ok(false),
        };

        if owner.is_some() && !self.data.records[position].is_owned_by(owner) {
            return Ok(false);
        }

        self.data.records.remove(position);
        self.save()?;
        info!(id, "History record deleted");
        Ok(true)
    }

    pub fn stats(&self, owner: Option<u64>) -> ConversionStats {
        ConversionStats::from_records(self.data.records.iter().filter(|r| r.is_owned_by(owner)))
    }

    /// Write the history to disk atomically
    pub fn save(&self) -> Result<(), CurlpyError> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)
            .map_err(|e| CurlpyError::History(format!("Failed to create history directory: {}", e)))?;

        let content = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CurlpyError::History(format!("Failed to serialize history: {}", e)))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| CurlpyError::History(format!("Failed to create temp file: {}", e)))?;

        temp.write_all(content.as_bytes())
            .map_err(|e| CurlpyError::History(format!("Failed to write history: {}", e)))?;

        temp.persist(&self.path)
            .map_err(|e| CurlpyError::History(format!("Failed to save history: {}", e)))?;

        // Commands may carry credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&self.path, permissions) {
                warn!(path = %self.path.display(), error = %e, "Failed to restrict history file permissions");
            }
        }

        Ok(())
    }
}
