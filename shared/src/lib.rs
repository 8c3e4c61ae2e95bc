//! Shared types for Rollcall
//!
//! Wire models and request/response DTOs used by both the API client and
//! the check-in engine.

pub mod client;
pub mod intent;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use intent::{CrudAction, EntityIntent};
pub use models::{CheckInRecord, Event, EventStatus, Member, Team};
