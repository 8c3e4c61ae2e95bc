//! Data models
//!
//! Shared between the API client and the check-in engine.
//! All IDs are backend-issued strings (e.g. `member-1a2b3c4d`).

pub mod checkin;
pub mod event;
pub mod member;
pub mod team;

// Re-exports
pub use checkin::*;
pub use event::*;
pub use member::*;
pub use team::*;
