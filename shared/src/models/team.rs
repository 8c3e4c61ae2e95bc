//! Team Model

use serde::{Deserialize, Serialize};

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Server-side count; the client recomputes it from the roster
    #[serde(default)]
    pub member_count: Option<u64>,
}

/// Create team payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update team payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub name: String,
    pub description: Option<String>,
}
