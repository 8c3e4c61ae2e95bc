//! Commands - 用户操作
//!
//! Every user action is one `Command`. The serde form (`{"action": ..,
//! "args": ..}`) lets a rendering layer dispatch from an action name plus
//! arguments without holding references to handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::intent::EntityIntent;

use super::error::CommandError;
use super::store::{Tab, TeamFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Command {
    // ========== Session ==========
    Login { username: String, password: String },
    Logout,
    /// Authoritative reload of all data
    Reload,

    // ========== Local UI ==========
    SelectTab(Tab),
    /// `None` clears the event choice
    SelectEvent(Option<String>),
    ToggleMember(String),
    ToggleSelectAll,
    /// Raw search box contents after a keystroke
    SearchInput(String),
    SetTeamFilter(TeamFilter),
    ToggleMemberExpand(String),
    ToggleLeaderboardExpand(String),

    // ========== Remote ==========
    CheckIn,
    Entity(EntityIntent),
    DeleteRecord(String),
    ClearMemberPoints(String),
    ResetAllPoints,
    ResetAllData,
}

impl Command {
    /// Build a command from an action name and its JSON arguments
    pub fn from_action(action: &str, args: Value) -> Result<Self, CommandError> {
        let mut envelope = serde_json::Map::new();
        envelope.insert("action".into(), Value::String(action.to_string()));
        if !args.is_null() {
            envelope.insert("args".into(), args);
        }
        serde_json::from_value(Value::Object(envelope))
            .map_err(|e| CommandError::Validation(format!("{action}: {e}")))
    }

    /// Action name, as used on the wire and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::Reload => "reload",
            Self::SelectTab(_) => "select_tab",
            Self::SelectEvent(_) => "select_event",
            Self::ToggleMember(_) => "toggle_member",
            Self::ToggleSelectAll => "toggle_select_all",
            Self::SearchInput(_) => "search_input",
            Self::SetTeamFilter(_) => "set_team_filter",
            Self::ToggleMemberExpand(_) => "toggle_member_expand",
            Self::ToggleLeaderboardExpand(_) => "toggle_leaderboard_expand",
            Self::CheckIn => "check_in",
            Self::Entity(_) => "entity",
            Self::DeleteRecord(_) => "delete_record",
            Self::ClearMemberPoints(_) => "clear_member_points",
            Self::ResetAllPoints => "reset_all_points",
            Self::ResetAllData => "reset_all_data",
        }
    }

    /// Whether the command issues a backend request
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Login { .. }
                | Self::Reload
                | Self::CheckIn
                | Self::Entity(_)
                | Self::DeleteRecord(_)
                | Self::ClearMemberPoints(_)
                | Self::ResetAllPoints
                | Self::ResetAllData
        )
    }
}

/// What `dispatch` did with a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and the view was patched
    Applied,
    /// State changed; the recompute waits for the debounce window
    Deferred,
    /// A local precondition failed; nothing was sent
    Skipped(&'static str),
    /// The user declined a confirmation; nothing was sent
    Declined,
}
