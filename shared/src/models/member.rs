//! Member Model

use serde::{Deserialize, Serialize};

/// Member entity (roster entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Team name, `None` when the member has no team
    #[serde(default)]
    pub team: Option<String>,
    /// Authoritative running total, maintained by the backend
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Member {
    /// Whether this member belongs to the named team
    pub fn in_team(&self, team: &str) -> bool {
        self.team.as_deref() == Some(team)
    }
}

/// Create member payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub team: Option<String>,
}

/// Update member payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: String,
    pub team: Option<String>,
}

/// Response of `DELETE /api/members/:id/points`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsClearedResponse {
    #[serde(default)]
    pub points_cleared: f64,
    #[serde(default)]
    pub records_deleted: u64,
}

/// Response of `POST /api/members/reset-all-points`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPointsResponse {
    #[serde(default)]
    pub members_affected: u64,
    #[serde(default)]
    pub total_points_cleared: f64,
    #[serde(default)]
    pub records_cleared: u64,
}
