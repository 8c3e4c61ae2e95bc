//! Client-related types shared between the API client and the engine
//!
//! Request/response bodies of the backend REST API that are not tied to a
//! single model.

use serde::{Deserialize, Serialize};

use crate::models::{CheckInRecord, Event, Member, Team};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    /// Name shown in the header, falls back to the username
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

// =============================================================================
// List envelopes
// =============================================================================

/// `GET /api/members`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberList {
    #[serde(default)]
    pub members: Vec<Member>,
}

/// `GET /api/teams`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamList {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// `GET /api/events`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// `GET /api/checkin-records`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<CheckInRecord>,
}

// =============================================================================
// Misc responses
// =============================================================================

/// Error body returned by the backend on any non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Plain acknowledgement (`{"message": "..."}`), also used for bodies we ignore
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/system/reset-all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetAllResponse {
    #[serde(default)]
    pub members_deleted: u64,
    #[serde(default)]
    pub teams_deleted: u64,
    #[serde(default)]
    pub events_deleted: u64,
    #[serde(default)]
    pub records_deleted: u64,
}
