//! Rollcall - roster check-in and points tracking client
//!
//! - `core`: state store, view derivation, debounce, selection, incremental
//!   reconciler and command dispatcher
//! - `surface`: rendering targets driven by the reconciler
//! - `config` / `logging`: ambient setup for the binary

pub mod config;
pub mod core;
pub mod logging;
pub mod surface;

pub use config::AppConfig;
pub use core::{Command, CommandError, Dispatcher, Outcome};
