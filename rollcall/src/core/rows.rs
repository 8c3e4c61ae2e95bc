//! Row builders
//!
//! Turn derived views plus selection and expansion state into keyed rows, one
//! `ListView` per list on the current page. Rows are plain values; the
//! reconciler compares them to decide what to patch.

use shared::models::{CheckInRecord, EventStatus};

use super::derive::{
    RankBadge, active_events, filtered_members, member_records, rank_badge, ranked_leaderboard,
    team_member_count, total_points,
};
use super::store::{RosterState, Tab, ViewKind};

/// Lists the surface can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListId {
    EventPicker,
    CheckIn,
    Members,
    Teams,
    Events,
    Leaderboard,
    PublicLeaderboard,
}

impl ListId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::EventPicker => "Active events",
            Self::CheckIn => "Check-in",
            Self::Members => "Members",
            Self::Teams => "Teams",
            Self::Events => "Events",
            Self::Leaderboard | Self::PublicLeaderboard => "Leaderboard",
        }
    }
}

/// One line of a member's check-in history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLine {
    pub record_id: String,
    pub event_name: String,
    pub points: f64,
    pub at: String,
}

impl From<&CheckInRecord> for HistoryLine {
    fn from(record: &CheckInRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            event_name: record
                .event_name
                .clone()
                .unwrap_or_else(|| "(deleted event)".to_string()),
            points: record.points_awarded,
            at: record.checked_in_display(),
        }
    }
}

/// A keyed row. The key is the entity id.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    EventOption {
        id: String,
        name: String,
        points: f64,
        date: String,
        selected: bool,
    },
    CheckIn {
        id: String,
        name: String,
        team: Option<String>,
        points: f64,
        selected: bool,
    },
    Member {
        id: String,
        name: String,
        team: Option<String>,
        points: f64,
        email: Option<String>,
        /// Present only while the row is expanded
        history: Option<Vec<HistoryLine>>,
    },
    Leader {
        id: String,
        name: String,
        team: Option<String>,
        points: f64,
        badge: RankBadge,
        history: Option<Vec<HistoryLine>>,
    },
    Team {
        id: String,
        name: String,
        description: Option<String>,
        members: usize,
    },
    Event {
        id: String,
        name: String,
        points: f64,
        date: String,
        status: EventStatus,
    },
}

impl Row {
    pub fn key(&self) -> &str {
        match self {
            Self::EventOption { id, .. }
            | Self::CheckIn { id, .. }
            | Self::Member { id, .. }
            | Self::Leader { id, .. }
            | Self::Team { id, .. }
            | Self::Event { id, .. } => id,
        }
    }
}

/// Counts shown above a list
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Selection {
        /// `|selection ∩ filtered|`
        selected: usize,
        visible: usize,
        all_selected: bool,
        /// Selected members hidden by the filter
        hidden: usize,
        can_submit: bool,
    },
    Count {
        shown: usize,
        total: usize,
    },
    Leaderboard {
        members: usize,
        total_points: f64,
        can_reset: bool,
    },
}

/// Rows and header of one list, as derived from state
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub id: ListId,
    pub header: Option<Header>,
    pub rows: Vec<Row>,
}

/// Every list of the current page, in display order
pub fn lists_for(state: &RosterState) -> Vec<ListView> {
    match state.view() {
        ViewKind::Public => vec![leaderboard_list(state, ListId::PublicLeaderboard, false)],
        ViewKind::Admin(Tab::CheckIn) => vec![event_picker_list(state), check_in_list(state)],
        ViewKind::Admin(Tab::Members) => vec![members_list(state)],
        ViewKind::Admin(Tab::Teams) => vec![teams_list(state)],
        ViewKind::Admin(Tab::Events) => vec![events_list(state)],
        ViewKind::Admin(Tab::Leaderboard) => {
            vec![leaderboard_list(state, ListId::Leaderboard, true)]
        }
    }
}

fn history_for(
    state: &RosterState,
    member_id: &str,
    expanded: Option<&str>,
) -> Option<Vec<HistoryLine>> {
    if expanded != Some(member_id) {
        return None;
    }
    Some(
        member_records(&state.records, member_id)
            .into_iter()
            .map(HistoryLine::from)
            .collect(),
    )
}

fn event_picker_list(state: &RosterState) -> ListView {
    let rows = active_events(&state.events)
        .into_iter()
        .map(|e| Row::EventOption {
            id: e.id.clone(),
            name: e.name.clone(),
            points: e.points,
            date: e.date.clone(),
            selected: state.selected_event.as_deref() == Some(e.id.as_str()),
        })
        .collect();
    ListView {
        id: ListId::EventPicker,
        header: None,
        rows,
    }
}

fn check_in_list(state: &RosterState) -> ListView {
    let filtered = filtered_members(state);
    let visible_ids: Vec<&str> = filtered.iter().map(|m| m.id.as_str()).collect();
    let selected = state.selection.visible_count(visible_ids.iter().copied());
    let header = Header::Selection {
        selected,
        visible: filtered.len(),
        all_selected: state.selection.all_selected(visible_ids.iter().copied()),
        hidden: state.selection.len().saturating_sub(selected),
        can_submit: state.selected_event.is_some() && !state.selection.is_empty(),
    };
    let rows = filtered
        .iter()
        .map(|m| Row::CheckIn {
            id: m.id.clone(),
            name: m.name.clone(),
            team: m.team.clone(),
            points: m.points,
            selected: state.selection.contains(&m.id),
        })
        .collect();
    ListView {
        id: ListId::CheckIn,
        header: Some(header),
        rows,
    }
}

fn members_list(state: &RosterState) -> ListView {
    let filtered = filtered_members(state);
    let expanded = state.expanded_member.as_deref();
    let rows: Vec<Row> = filtered
        .iter()
        .map(|m| Row::Member {
            id: m.id.clone(),
            name: m.name.clone(),
            team: m.team.clone(),
            points: m.points,
            email: m.email.clone(),
            history: history_for(state, &m.id, expanded),
        })
        .collect();
    ListView {
        id: ListId::Members,
        header: Some(Header::Count {
            shown: rows.len(),
            total: state.members.len(),
        }),
        rows,
    }
}

fn teams_list(state: &RosterState) -> ListView {
    let rows: Vec<Row> = state
        .teams
        .iter()
        .map(|t| Row::Team {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
            members: team_member_count(&state.members, t),
        })
        .collect();
    ListView {
        id: ListId::Teams,
        header: Some(Header::Count {
            shown: rows.len(),
            total: rows.len(),
        }),
        rows,
    }
}

fn events_list(state: &RosterState) -> ListView {
    let rows: Vec<Row> = state
        .events
        .iter()
        .map(|e| Row::Event {
            id: e.id.clone(),
            name: e.name.clone(),
            points: e.points,
            date: e.date.clone(),
            status: e.status,
        })
        .collect();
    ListView {
        id: ListId::Events,
        header: Some(Header::Count {
            shown: rows.len(),
            total: rows.len(),
        }),
        rows,
    }
}

fn leaderboard_list(state: &RosterState, id: ListId, can_reset: bool) -> ListView {
    let ranked = ranked_leaderboard(&state.members);
    let expanded = state.expanded_leaderboard.as_deref();
    let rows = ranked
        .iter()
        .enumerate()
        .map(|(index, m)| Row::Leader {
            id: m.id.clone(),
            name: m.name.clone(),
            team: m.team.clone(),
            points: m.points,
            badge: rank_badge(index),
            history: history_for(state, &m.id, expanded),
        })
        .collect();
    ListView {
        id,
        header: Some(Header::Leaderboard {
            members: ranked.len(),
            total_points: total_points(ranked.iter().copied()),
            can_reset,
        }),
        rows,
    }
}
