//! Event Model (签到事件)

use serde::{Deserialize, Serialize};

/// Event status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Active,
    Upcoming,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown event status: {other}")),
        }
    }
}

/// Event entity - a check-in opportunity with a points reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Points awarded per check-in
    pub points: f64,
    /// Event date (YYYY-MM-DD)
    pub date: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl Event {
    /// Only active events accept check-ins
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }
}

/// Create event payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCreate {
    pub name: String,
    pub points: f64,
    pub date: String,
}

/// Update event payload (partial)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

impl EventUpdate {
    pub fn status(status: EventStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
