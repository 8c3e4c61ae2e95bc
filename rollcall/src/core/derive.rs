//! View Derivation
//!
//! Pure projections of `RosterState`. Nothing here mutates state; every call
//! returns a fresh sequence built from the roster.

use std::collections::BTreeSet;

use shared::models::{CheckInRecord, Event, Member, Team};

use super::store::{Filter, RosterState, TeamFilter};

/// Members matching the current filter, in roster order
pub fn filtered_members(state: &RosterState) -> Vec<&Member> {
    filter_members(&state.members, &state.filter)
}

pub fn filter_members<'a>(members: &'a [Member], filter: &Filter) -> Vec<&'a Member> {
    let needle = filter.query.to_lowercase();
    members
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
        .filter(|m| filter.team.accepts(m))
        .collect()
}

/// Members by points, highest first. Ties keep roster order.
pub fn ranked_leaderboard(members: &[Member]) -> Vec<&Member> {
    let mut ranked: Vec<&Member> = members.iter().collect();
    // slice::sort_by is stable
    ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
    ranked
}

/// Medal or numeric rank for a leaderboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    /// 1-based position
    Position(usize),
}

impl std::fmt::Display for RankBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => f.write_str("🥇"),
            Self::Silver => f.write_str("🥈"),
            Self::Bronze => f.write_str("🥉"),
            Self::Position(n) => write!(f, "{n}"),
        }
    }
}

pub fn rank_badge(index: usize) -> RankBadge {
    match index {
        0 => RankBadge::Gold,
        1 => RankBadge::Silver,
        2 => RankBadge::Bronze,
        n => RankBadge::Position(n + 1),
    }
}

/// Events accepting check-ins
pub fn active_events(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.is_active()).collect()
}

/// Check-in history of one member, newest first
pub fn member_records<'a>(records: &'a [CheckInRecord], member_id: &str) -> Vec<&'a CheckInRecord> {
    let mut history: Vec<&CheckInRecord> = records
        .iter()
        .filter(|r| r.member_id == member_id)
        .collect();
    history.sort_by(|a, b| b.checked_in_at.cmp(&a.checked_in_at));
    history
}

/// Members counted from the roster, not the server-side `member_count`
pub fn team_member_count(members: &[Member], team: &Team) -> usize {
    members.iter().filter(|m| m.in_team(&team.name)).count()
}

pub fn total_points<'a>(members: impl IntoIterator<Item = &'a Member>) -> f64 {
    members.into_iter().map(|m| m.points).sum()
}

/// Team filter choices: "all", then every team name, then any name found only
/// on members. Sorted and de-duplicated.
pub fn team_filter_options(teams: &[Team], members: &[Member]) -> Vec<TeamFilter> {
    let names: BTreeSet<&str> = teams
        .iter()
        .map(|t| t.name.as_str())
        .chain(members.iter().filter_map(|m| m.team.as_deref()))
        .filter(|name| !name.is_empty())
        .collect();

    std::iter::once(TeamFilter::All)
        .chain(names.into_iter().map(TeamFilter::team))
        .collect()
}

/// Points without a trailing ".0" for whole numbers
pub fn fmt_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{}", points as i64)
    } else {
        let s = format!("{points:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
