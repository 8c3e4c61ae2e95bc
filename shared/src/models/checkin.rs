//! Check-in Record Model
//!
//! Append-only audit trail of awarded points. Records are never edited;
//! deleting one makes the backend deduct `points_awarded` from the member.

use serde::{Deserialize, Serialize};

/// Check-in record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub id: String,
    pub member_id: String,
    pub event_id: String,
    /// Event name snapshot, `None` once the event has been deleted
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    pub points_awarded: f64,
    /// ISO 8601 timestamp as sent by the backend
    pub checked_in_at: String,
}

impl CheckInRecord {
    /// Timestamp formatted for display, raw string when it does not parse
    pub fn checked_in_display(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.checked_in_at, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.checked_in_at.clone())
    }
}

/// Batch check-in request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCheckInRequest {
    pub event_id: String,
    pub member_ids: Vec<String>,
}

/// Batch check-in response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCheckInResponse {
    #[serde(default)]
    pub success_count: u64,
    /// Members skipped by the backend (unknown id or already checked in)
    #[serde(default)]
    pub failed_count: u64,
    #[serde(default)]
    pub event_name: Option<String>,
}

/// Response of `DELETE /api/checkin-records/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDeletedResponse {
    #[serde(default)]
    pub points_deducted: f64,
    #[serde(default)]
    pub member_id: Option<String>,
}
