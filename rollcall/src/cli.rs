use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shared::models::EventStatus;

/// Command-line interface for the roster check-in backend
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Roster check-in and points tracking",
    long_about = None
)]
pub struct Cli {
    /// Backend base URL (overrides ROLLCALL_API_URL)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Session file (overrides ROLLCALL_SESSION_FILE)
    #[arg(global = true, long = "session-file")]
    pub session_file: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(global = true, short = 'y', long = "yes")]
    pub yes: bool,

    /// Debug logging
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        username: String,
        /// Read from stdin when omitted
        #[arg(long, env = "ROLLCALL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the points leaderboard
    Leaderboard {
        /// Show check-in history of one member
        #[arg(long)]
        expand: Option<String>,
    },

    /// List members
    Members {
        /// Case-insensitive name filter
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Team name ("ALL" for every team)
        #[arg(long, short = 't')]
        team: Option<String>,
        /// Show check-in history of one member
        #[arg(long)]
        expand: Option<String>,
    },

    /// List teams
    Teams,

    /// List events
    Events,

    /// List check-in records
    Records {
        /// Only records of this member id
        #[arg(long)]
        member: Option<String>,
    },

    /// Batch check-in members for an active event
    CheckIn {
        /// Event id
        #[arg(long, short = 'e')]
        event: String,
        /// Member id, repeatable
        #[arg(long = "member", short = 'm')]
        members: Vec<String>,
        /// Select every member matching --search/--team
        #[arg(long)]
        all_visible: bool,
        #[arg(long, short = 's')]
        search: Option<String>,
        #[arg(long, short = 't')]
        team: Option<String>,
    },

    /// Add a member
    AddMember {
        name: String,
        #[arg(long)]
        team: Option<String>,
    },

    /// Edit a member; omitted fields keep their value
    EditMember {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New team, empty string for none
        #[arg(long)]
        team: Option<String>,
    },

    /// Delete a member
    DeleteMember { id: String },

    /// Clear one member's points and check-in records
    ClearPoints { id: String },

    /// Add a team
    AddTeam {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a team
    DeleteTeam { id: String },

    /// Add an event
    AddEvent {
        name: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long, default_value_t = 0.5)]
        points: f64,
    },

    /// Change an event's status (active, upcoming, completed)
    SetEventStatus { id: String, status: EventStatus },

    /// Delete an event
    DeleteEvent { id: String },

    /// Delete a check-in record; its points are deducted
    DeleteRecord { id: String },

    /// Reset every member's points and delete all check-in records
    ResetPoints,

    /// Delete all members, teams, events and records
    ResetAll,
}
