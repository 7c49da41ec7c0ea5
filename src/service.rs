//! Conversion service
//!
//! Wraps the converter for callers that need a structured outcome and an
//! optional record of every attempt. Failed conversions are outcomes, not
//! errors; only history I/O is reported through `Result`.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::convert::{self, Conversion, HttpMethod};
use crate::errors::{ConvertError, CurlpyError};
use crate::history::{ConversionRecord, ConversionStats, ConversionStatus, HistoryStore};

/// Structured result of one conversion attempt
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutcome {
    pub success: bool,
    /// The command as submitted
    pub curl: String,
    /// Generated code, or a Python comment carrying the error
    pub python: String,
    pub status: ConversionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    /// Fields that were dropped during conversion
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// History id, when the attempt was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
}

impl ConversionOutcome {
    fn converted(command: &str, conversion: Conversion) -> Self {
        Self {
            success: true,
            curl: command.to_string(),
            python: conversion.code,
            status: ConversionStatus::Converted,
            message: "Conversion succeeded".to_string(),
            method: Some(conversion.request.method),
            warnings: conversion.warnings.iter().map(ToString::to_string).collect(),
            record_id: None,
        }
    }

    fn failed(command: &str, error: &ConvertError) -> Self {
        Self {
            success: false,
            curl: command.to_string(),
            python: format!("# Conversion error: {}", error),
            status: ConversionStatus::Failed,
            message: format!("Conversion failed: {}", error),
            method: None,
            warnings: Vec::new(),
            record_id: None,
        }
    }
}

/// Converts commands and keeps the history of attempts
#[derive(Debug, Default)]
pub struct ConverterService {
    history: Option<HistoryStore>,
}

impl ConverterService {
    /// A service that does not record conversions
    pub fn new() -> Self {
        Self { history: None }
    }

    pub fn with_history(history: HistoryStore) -> Self {
        Self {
            history: Some(history),
        }
    }

    pub fn history_store(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    /// Convert a command and record the attempt when history is attached
    pub fn convert_command(
        &mut self,
        command: &str,
        owner: Option<u64>,
    ) -> Result<ConversionOutcome, CurlpyError> {
        let mut outcome = match convert::convert(command) {
            Ok(conversion) => {
                for warning in &conversion.warnings {
                    debug!(%warning, "Degraded field");
                }
                if !conversion.ignored_flags.is_empty() {
                    debug!(flags = ?conversion.ignored_flags, "Ignored unsupported curl flags");
                }
                info!(method = %conversion.request.method, url = %conversion.request.url, "Converted curl command");
                ConversionOutcome::converted(command, conversion)
            }
            Err(error) => {
                warn!(%error, "Conversion failed");
                ConversionOutcome::failed(command, &error)
            }
        };

        if let Some(store) = self.history.as_mut() {
            let output = if outcome.success {
                outcome.python.clone()
            } else {
                outcome.message.clone()
            };
            let record = store.record(command, &output, outcome.status, owner)?;
            outcome.record_id = Some(record.id);
        }

        Ok(outcome)
    }

    /// Check that a command has the `curl` keyword and an extractable URL
    pub fn validate_command(command: &str) -> bool {
        convert::validate_command(command)
    }

    /// Recent conversions, newest first. Empty without history.
    pub fn history(&self, limit: usize, owner: Option<u64>) -> Vec<&ConversionRecord> {
        self.history
            .as_ref()
            .map(|store| store.list(limit, owner))
            .unwrap_or_default()
    }

    pub fn get(&self, id: u64) -> Option<&ConversionRecord> {
        self.history.as_ref().and_then(|store| store.get(id))
    }

    /// Delete a recorded conversion; refuses records of another owner
    pub fn delete(&mut self, id: u64, owner: Option<u64>) -> Result<bool, CurlpyError> {
        match self.history.as_mut() {
            Some(store) => store.delete(id, owner),
            None => Ok(false),
        }
    }

    pub fn stats(&self, owner: Option<u64>) -> ConversionStats {
        match self.history.as_ref() {
            Some(store) => store.stats(owner),
            None => ConversionStats::from_records(std::iter::empty()),
        }
    }
}
