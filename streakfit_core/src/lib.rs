#![forbid(unsafe_code)]

//! Core domain model and business logic for the Streakfit workout tracker.
//!
//! This crate provides:
//! - Domain types (weekdays, completion records, user economy)
//! - Local date utilities with an injectable clock
//! - Persistence (completion log, economy state)
//! - The streak engine (streak walk, week status, freeze self-heal)
//! - Command services (complete a day, purchase a freeze)
//! - JSON import/export

pub mod types;
pub mod error;
pub mod dates;
pub mod config;
pub mod logging;
pub mod completions;
pub mod economy;
pub mod schedule;
pub mod streak;
pub mod service;
pub mod transfer;

// Re-export commonly used types
pub use error::{CompleteError, Error, Result};
pub use types::*;
pub use dates::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use completions::CompletionStore;
pub use economy::EconomyStore;
pub use schedule::{is_rest_day, weekly_program};
pub use service::Tracker;
pub use transfer::{export_data, import_data, ImportSummary};
