//! Core domain types for the Streakfit workout tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Weekday identifiers
//! - Completion records (the append-only history)
//! - The user economy singleton (points, streak freezes)
//! - Derived engine outputs (week status, freeze-check result)

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Weekdays
// ============================================================================

/// One of the seven weekday slots of the program.
///
/// Serialized lowercase ("monday" .. "sunday") to match the on-disk and
/// export format.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayName {
    /// All seven days in weekly order, Monday first
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    /// Lowercase name as used on disk and on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            DayName::Monday => "monday",
            DayName::Tuesday => "tuesday",
            DayName::Wednesday => "wednesday",
            DayName::Thursday => "thursday",
            DayName::Friday => "friday",
            DayName::Saturday => "saturday",
            DayName::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayName {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" | "mon" => Ok(DayName::Monday),
            "tuesday" | "tue" => Ok(DayName::Tuesday),
            "wednesday" | "wed" => Ok(DayName::Wednesday),
            "thursday" | "thu" => Ok(DayName::Thursday),
            "friday" | "fri" => Ok(DayName::Friday),
            "saturday" | "sat" => Ok(DayName::Saturday),
            "sunday" | "sun" => Ok(DayName::Sunday),
            other => Err(crate::Error::UnknownDay(other.to_string())),
        }
    }
}

impl From<Weekday> for DayName {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => DayName::Monday,
            Weekday::Tue => DayName::Tuesday,
            Weekday::Wed => DayName::Wednesday,
            Weekday::Thu => DayName::Thursday,
            Weekday::Fri => DayName::Friday,
            Weekday::Sat => DayName::Saturday,
            Weekday::Sun => DayName::Sunday,
        }
    }
}

impl From<DayName> for Weekday {
    fn from(d: DayName) -> Self {
        match d {
            DayName::Monday => Weekday::Mon,
            DayName::Tuesday => Weekday::Tue,
            DayName::Wednesday => Weekday::Wed,
            DayName::Thursday => Weekday::Thu,
            DayName::Friday => Weekday::Fri,
            DayName::Saturday => Weekday::Sat,
            DayName::Sunday => Weekday::Sun,
        }
    }
}

// ============================================================================
// Completion records
// ============================================================================

/// A "day completed" record in the append-only completion log.
///
/// At most one record exists per `(day_name, completed_date)` pair; the
/// insert path in [`crate::Tracker::complete_day`] checks for the duplicate
/// before appending (single-writer assumption).
///
/// Field names are camelCase on the wire so export files interchange with
/// the original app's JSON exports.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub day_name: DayName,
    /// Local calendar date, `YYYY-MM-DD`
    pub completed_date: String,
    /// Informational only; rest days complete like any other day.
    /// Defaults to false on import when absent.
    #[serde(default)]
    pub is_rest_day: bool,
    /// Audit timestamp, not used by any logic
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User economy
// ============================================================================

/// The user economy singleton: points balance, streak freezes, and the
/// dates on which a freeze has been consumed.
///
/// `freezes_used` only ever grows, and a date appears in it at most once.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserEconomy {
    pub points: u32,
    pub streak_freezes: u32,
    /// Local dates (`YYYY-MM-DD`) covered by a consumed freeze
    pub freezes_used: BTreeSet<String>,
    /// Audit timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for UserEconomy {
    fn default() -> Self {
        Self {
            points: 0,
            streak_freezes: 0,
            freezes_used: BTreeSet::new(),
            updated_at: Utc::now(),
        }
    }
}

// ============================================================================
// Derived engine outputs
// ============================================================================

/// Per-weekday classification for the current 7-day cycle.
///
/// A day is in at most one of the two sets; days in neither are open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekStatus {
    pub completed: BTreeSet<DayName>,
    pub frozen: BTreeSet<DayName>,
}

/// Outcome of the session-start freeze self-heal pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreezeCheck {
    /// At least one freeze was consumed to cover a missed day
    pub freeze_used: bool,
    /// A gap could not be covered; the streak is broken
    pub streak_lost: bool,
}
