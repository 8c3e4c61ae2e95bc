//! Client state and incremental view synchronization

pub mod collab;
pub mod command;
pub mod debounce;
pub mod derive;
pub mod dispatcher;
pub mod error;
pub mod reconcile;
pub mod rows;
pub mod selection;
pub mod store;

pub use collab::{AutoConfirm, Confirm, Notice, Notifier};
pub use command::{Command, Outcome};
pub use debounce::{Clock, DEFAULT_WINDOW, Debouncer, ManualClock, TokioClock};
pub use derive::{
    RankBadge, filtered_members, fmt_points, rank_badge, ranked_leaderboard, team_filter_options,
};
pub use dispatcher::{Dispatcher, event_status_intent, normalize_intent};
pub use error::CommandError;
pub use reconcile::{PatchStats, Reconciler, Surface};
pub use rows::{Header, HistoryLine, ListId, ListView, Row, lists_for};
pub use selection::Selection;
pub use store::{
    ALL_TEAMS, DataSnapshot, Filter, RosterState, Store, Tab, TeamFilter, ViewKind,
};
