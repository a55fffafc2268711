//! Command surface exposed to the UI layer.
//!
//! [`Tracker`] owns the two stores, an injected clock, and the streak
//! policy, and implements the write path ("mark today complete") plus
//! thin wrappers over the streak engine queries. There is exactly one
//! logical writer (the active session); nothing here adds cross-process
//! coordination beyond the stores' single-document writes.

use crate::completions::CompletionStore;
use crate::config::StreakConfig;
use crate::dates::{local_date_string, Clock};
use crate::economy::EconomyStore;
use crate::error::CompleteError;
use crate::schedule;
use crate::streak;
use crate::types::{CompletionRecord, DayName, FreezeCheck, UserEconomy, WeekStatus};
use crate::Result;
use chrono::Utc;
use std::path::Path;

/// File name of the completion log under the data dir
const COMPLETIONS_FILE: &str = "completions.jsonl";
/// File name of the economy singleton under the data dir
const ECONOMY_FILE: &str = "economy.json";

/// The workout tracker: stores + clock + policy
pub struct Tracker {
    completions: CompletionStore,
    economy: EconomyStore,
    clock: Box<dyn Clock>,
    policy: StreakConfig,
}

impl Tracker {
    /// Open a tracker over the given data directory
    pub fn open(data_dir: &Path, policy: StreakConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            completions: CompletionStore::new(data_dir.join(COMPLETIONS_FILE)),
            economy: EconomyStore::new(data_dir.join(ECONOMY_FILE)),
            clock,
            policy,
        }
    }

    /// The completion log (used by import/export)
    pub fn completions(&self) -> &CompletionStore {
        &self.completions
    }

    /// The economy store
    pub fn economy_store(&self) -> &EconomyStore {
        &self.economy
    }

    /// Today's weekday per the injected clock
    pub fn today(&self) -> DayName {
        self.clock.today_day()
    }

    /// Mark `day` complete for today.
    ///
    /// The single business rule of the write path: only today's workout may
    /// be completed, and only once per calendar day. On success a record is
    /// appended and the fixed completion points are awarded.
    pub fn complete_day(&self, day: DayName) -> std::result::Result<CompletionRecord, CompleteError> {
        let today = self.clock.today_day();
        if day != today {
            return Err(CompleteError::WrongDay { today });
        }

        let date = local_date_string(self.clock.today());
        if self.completions.completed_on(day, &date)? {
            return Err(CompleteError::AlreadyCompleted);
        }

        // Surface a faulty economy store before the record is appended, so a
        // failed completion leaves both stores untouched
        self.economy.read()?;

        let record = CompletionRecord {
            day_name: day,
            completed_date: date,
            is_rest_day: schedule::is_rest_day(day),
            created_at: Utc::now(),
        };
        self.completions.add(&record)?;
        self.economy.add_points(self.policy.completion_points)?;

        tracing::info!("Completed {} ({})", day, record.completed_date);
        Ok(record)
    }

    /// Current consecutive-day streak
    pub fn streak(&self) -> Result<u32> {
        streak::calculate_streak(&self.completions, &self.economy, self.clock.as_ref())
    }

    /// Completed/frozen classification of the current week cycle
    pub fn week_status(&self) -> Result<WeekStatus> {
        streak::week_status(&self.completions, &self.economy, self.clock.as_ref())
    }

    /// Run the session-start freeze self-heal pass
    pub fn check_and_use_freezes(&self) -> Result<FreezeCheck> {
        streak::check_and_use_freezes(
            &self.completions,
            &self.economy,
            self.clock.as_ref(),
            self.policy.freeze_lookback_days,
        )
    }

    /// Buy a streak freeze; `false` means insufficient points
    pub fn purchase_freeze(&self) -> Result<bool> {
        self.economy.purchase_freeze(self.policy.freeze_cost)
    }

    /// Current economy state
    pub fn economy(&self) -> Result<UserEconomy> {
        self.economy.read()
    }

    /// Cost of one freeze under the current policy
    pub fn freeze_cost(&self) -> u32 {
        self.policy.freeze_cost
    }

    /// Wipe both stores (full data clear)
    pub fn reset(&self) -> Result<()> {
        self.completions.clear()?;
        self.economy.clear()?;
        Ok(())
    }
}
