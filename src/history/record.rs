//! Conversion history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome status of a recorded conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Converted,
    Failed,
}

impl ConversionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionStatus::Converted => "converted",
            ConversionStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored conversion attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: u64,
    /// Optional identity the conversion is attributed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,
    /// Command text as submitted
    pub command: String,
    /// Generated code, or the error text for failed conversions
    pub output: String,
    pub status: ConversionStatus,
    pub created_at: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn is_owned_by(&self, owner: Option<u64>) -> bool {
        match owner {
            Some(owner) => self.owner == Some(owner),
            None => true,
        }
    }
}

/// Aggregate counts over stored conversions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionStats {
    pub total_conversions: usize,
    pub successful_conversions: usize,
    pub failed_conversions: usize,
    /// Percentage of successful conversions, 0 when there are none
    pub success_rate: f64,
}

impl ConversionStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ConversionRecord>) -> Self {
        let mut total = 0;
        let mut successful = 0;
        for record in records {
            total += 1;
            if record.status == ConversionStatus::Converted {
                successful += 1;
            }
        }

        let success_rate = if total > 0 {
            successful as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_conversions: total,
            successful_conversions: successful,
            failed_conversions: total - successful,
            success_rate,
        }
    }
}
