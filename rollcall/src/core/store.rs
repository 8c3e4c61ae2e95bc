//! State Store - 单一可变状态
//!
//! Holds the one owned snapshot of roster state. Mutation is explicit and has
//! no downstream effects: whoever mutates is responsible for asking the
//! dispatcher to recompute afterwards.

use std::collections::HashSet;
use std::str::FromStr;

use rollcall_client::Session;
use serde::{Deserialize, Serialize};
use shared::models::{CheckInRecord, Event, Member, Team};

use super::selection::Selection;

/// Sentinel used on the wire for "every team"
pub const ALL_TEAMS: &str = "ALL";

/// Team part of the member filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

impl TeamFilter {
    pub fn team(name: impl Into<String>) -> Self {
        Self::Team(name.into())
    }

    pub fn accepts(&self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Team(name) => member.in_team(name),
        }
    }
}

impl From<String> for TeamFilter {
    fn from(value: String) -> Self {
        if value == ALL_TEAMS || value.is_empty() {
            Self::All
        } else {
            Self::Team(value)
        }
    }
}

impl From<TeamFilter> for String {
    fn from(value: TeamFilter) -> Self {
        match value {
            TeamFilter::All => ALL_TEAMS.to_string(),
            TeamFilter::Team(name) => name,
        }
    }
}

impl FromStr for TeamFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl std::fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TEAMS),
            Self::Team(name) => f.write_str(name),
        }
    }
}

/// Member filter: case-insensitive name substring plus team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub team: TeamFilter,
}

/// Admin tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    CheckIn,
    Members,
    Teams,
    Events,
    Leaderboard,
}

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Signed out: leaderboard only
    Public,
    Admin(Tab),
}

/// Authoritative data from a full reload
#[derive(Debug, Clone, Default)]
pub struct DataSnapshot {
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
    pub events: Vec<Event>,
    pub records: Vec<CheckInRecord>,
}

/// The single mutable record of client state
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
    pub events: Vec<Event>,
    pub records: Vec<CheckInRecord>,
    pub filter: Filter,
    pub selection: Selection,
    pub selected_event: Option<String>,
    pub expanded_member: Option<String>,
    pub expanded_leaderboard: Option<String>,
    pub tab: Tab,
    pub session: Option<Session>,
}

impl RosterState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn view(&self) -> ViewKind {
        if self.is_logged_in() {
            ViewKind::Admin(self.tab)
        } else {
            ViewKind::Public
        }
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

/// Owner of `RosterState`
#[derive(Debug, Default)]
pub struct Store {
    state: RosterState,
    recomputes: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    /// Apply a synchronous change. Nothing is recomputed.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut RosterState) -> R) -> R {
        f(&mut self.state)
    }

    /// Overwrite the backend-owned collections wholesale and drop references
    /// that no longer resolve.
    pub fn replace_data(&mut self, snapshot: DataSnapshot) {
        let state = &mut self.state;
        state.members = snapshot.members;
        state.teams = snapshot.teams;
        state.events = snapshot.events;
        state.records = snapshot.records;

        let roster: HashSet<&str> = state.members.iter().map(|m| m.id.as_str()).collect();
        let before = state.selection.len();
        state.selection.retain(|id| roster.contains(id));
        let pruned = before - state.selection.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Dropped stale ids from selection");
        }

        if let Some(id) = &state.expanded_member
            && !roster.contains(id.as_str())
        {
            state.expanded_member = None;
        }
        if let Some(id) = &state.expanded_leaderboard
            && !roster.contains(id.as_str())
        {
            state.expanded_leaderboard = None;
        }

        let event_still_open = state
            .selected_event
            .as_deref()
            .and_then(|id| state.events.iter().find(|e| e.id == id))
            .is_some_and(Event::is_active);
        if !event_still_open {
            state.selected_event = None;
        }
    }

    /// Logout: forget the session and every piece of session-scoped UI state
    pub fn reset_session(&mut self) {
        let state = &mut self.state;
        state.session = None;
        state.filter = Filter::default();
        state.selection.clear();
        state.selected_event = None;
        state.expanded_member = None;
        state.expanded_leaderboard = None;
        state.records.clear();
        state.tab = Tab::default();
    }

    /// Number of derive+reconcile passes run so far
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    pub(crate) fn note_recompute(&mut self) {
        self.recomputes += 1;
    }
}
