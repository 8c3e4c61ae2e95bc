//! Rollcall Client - HTTP client for the roster backend
//!
//! Provides network-based calls to the check-in REST API and the session
//! persistence collaborator.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::RosterApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo};
