//! Streak engine: streak walk, week status, and the freeze self-heal pass.
//!
//! Everything here is re-derived from the stores on every call; the engine
//! holds no cached state. Reads are pure; the only write is the freeze
//! consumption inside [`check_and_use_freezes`], which must run before any
//! streak display in the same session or the computed streak will be wrong.

use crate::completions::CompletionStore;
use crate::dates::{local_date_string, parse_local_date, most_recent_date_for, Clock};
use crate::economy::EconomyStore;
use crate::types::{DayName, FreezeCheck, WeekStatus};
use crate::Result;
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Dates with at least one completion record, parsed; unparseable dates are
/// skipped with a warning (tolerated corruption, same as a bad log line).
fn completed_dates(completions: &CompletionStore) -> Result<BTreeSet<NaiveDate>> {
    let mut dates = BTreeSet::new();
    for record in completions.all()? {
        match parse_local_date(&record.completed_date) {
            Ok(date) => {
                dates.insert(date);
            }
            Err(e) => {
                tracing::warn!("Skipping completion with bad date: {}", e);
            }
        }
    }
    Ok(dates)
}

fn frozen_dates(economy: &EconomyStore) -> Result<BTreeSet<NaiveDate>> {
    let mut dates = BTreeSet::new();
    for date in &economy.read()?.freezes_used {
        match parse_local_date(date) {
            Ok(date) => {
                dates.insert(date);
            }
            Err(e) => {
                tracing::warn!("Skipping freeze with bad date: {}", e);
            }
        }
    }
    Ok(dates)
}

/// Count the current consecutive-day streak by walking backward from today.
///
/// Today not yet being completed does not break the streak (the user still
/// has the rest of the day); the cursor simply starts at yesterday. A
/// completed day counts; a freeze-covered day preserves continuity but
/// contributes zero length — freezes are shields, not free days.
pub fn calculate_streak(
    completions: &CompletionStore,
    economy: &EconomyStore,
    clock: &dyn Clock,
) -> Result<u32> {
    let completed = completed_dates(completions)?;
    let frozen = frozen_dates(economy)?;

    let mut cursor = clock.today();
    if !completed.contains(&cursor) && !frozen.contains(&cursor) {
        cursor = cursor - Days::new(1);
    }

    let mut streak = 0;
    loop {
        if completed.contains(&cursor) {
            streak += 1;
        } else if !frozen.contains(&cursor) {
            break;
        }
        cursor = cursor - Days::new(1);
    }

    tracing::debug!("Calculated streak: {}", streak);
    Ok(streak)
}

/// Classify each weekday of the current cycle as completed, frozen, or open.
///
/// Each weekday is judged against its most recent calendar date (inclusive
/// of today). When all 7 slots are accounted for, both sets come back empty:
/// the week board resets visually the moment the last slot fills. This is a
/// display-cycle reset only — no records are touched.
pub fn week_status(
    completions: &CompletionStore,
    economy: &EconomyStore,
    clock: &dyn Clock,
) -> Result<WeekStatus> {
    let today = clock.today();
    let completed = completed_dates(completions)?;
    let frozen = frozen_dates(economy)?;

    let mut status = WeekStatus::default();
    for day in DayName::ALL {
        let date = most_recent_date_for(day, today);
        if completed.contains(&date) {
            status.completed.insert(day);
        } else if frozen.contains(&date) {
            status.frozen.insert(day);
        }
    }

    if status.completed.len() + status.frozen.len() == 7 {
        tracing::debug!("Full week cycle accounted for, resetting board");
        return Ok(WeekStatus::default());
    }

    Ok(status)
}

/// Backfill missed days since the last completion by consuming freezes.
///
/// Runs once at session start, before any streak display. Gaps of at most
/// `lookback_days` since the last completion are healed one day at a time
/// (exclusive of today, which the user may still complete); older gaps are
/// deemed unrecoverable and no freeze is spent on them. Each consumed
/// freeze is persisted immediately.
pub fn check_and_use_freezes(
    completions: &CompletionStore,
    economy: &EconomyStore,
    clock: &dyn Clock,
    lookback_days: u32,
) -> Result<FreezeCheck> {
    let completed = completed_dates(completions)?;

    let Some(last_completed) = completed.iter().max().copied() else {
        // No completions ever: nothing to heal
        return Ok(FreezeCheck::default());
    };

    let today = clock.today();
    let days_diff = (today - last_completed).num_days();

    if days_diff <= 1 {
        return Ok(FreezeCheck::default());
    }

    if days_diff > lookback_days as i64 {
        tracing::info!(
            "Gap of {} days exceeds {}-day lookback; streak lost",
            days_diff,
            lookback_days
        );
        return Ok(FreezeCheck {
            freeze_used: false,
            streak_lost: true,
        });
    }

    let mut outcome = FreezeCheck::default();
    let mut cursor = last_completed + Days::new(1);
    while cursor < today {
        let date = local_date_string(cursor);
        let already_frozen = economy.read()?.freezes_used.contains(&date);
        if !completed.contains(&cursor) && !already_frozen {
            if economy.consume_freeze_for_date(&date)? {
                outcome.freeze_used = true;
            } else {
                outcome.streak_lost = true;
                break;
            }
        }
        cursor = cursor + Days::new(1);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use crate::types::CompletionRecord;
    use chrono::Utc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (TempDir, CompletionStore, EconomyStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let completions = CompletionStore::new(temp_dir.path().join("completions.jsonl"));
        let economy = EconomyStore::new(temp_dir.path().join("economy.json"));
        (temp_dir, completions, economy)
    }

    fn complete(store: &CompletionStore, on: NaiveDate) {
        store
            .add(&CompletionRecord {
                day_name: crate::dates::weekday_of(on),
                completed_date: local_date_string(on),
                is_rest_day: false,
                created_at: Utc::now(),
            })
            .unwrap();
    }

    fn freeze(economy: &EconomyStore, on: NaiveDate) {
        economy
            .update(|e| {
                e.freezes_used.insert(local_date_string(on));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_streak_zero_with_no_history() {
        let (_dir, completions, economy) = setup();
        let clock = FixedClock(date(2024, 1, 17));

        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 0);
    }

    #[test]
    fn test_streak_counts_consecutive_days_ending_today() {
        let (_dir, completions, economy) = setup();
        let today = date(2024, 1, 17);
        for back in 0..4 {
            complete(&completions, today - Days::new(back));
        }
        let clock = FixedClock(today);

        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 4);
    }

    #[test]
    fn test_today_undone_does_not_break_streak() {
        let (_dir, completions, economy) = setup();
        let today = date(2024, 1, 18);
        // Completed yesterday and the day before, not yet today
        complete(&completions, date(2024, 1, 17));
        complete(&completions, date(2024, 1, 16));
        let clock = FixedClock(today);

        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 2);
    }

    #[test]
    fn test_gap_without_freeze_breaks_streak() {
        let (_dir, completions, economy) = setup();
        // Completed two days ago, nothing since
        complete(&completions, date(2024, 1, 17));
        let clock = FixedClock(date(2024, 1, 19));

        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 0);
    }

    #[test]
    fn test_freeze_bridges_without_inflating_count() {
        let (_dir, completions, economy) = setup();
        // D completed, D+1 frozen, D+2 completed
        complete(&completions, date(2024, 1, 15));
        freeze(&economy, date(2024, 1, 16));
        complete(&completions, date(2024, 1, 17));
        let clock = FixedClock(date(2024, 1, 17));

        // Two completed days, the frozen day adds nothing
        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 2);
    }

    #[test]
    fn test_frozen_today_keeps_walk_alive() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 16));
        freeze(&economy, date(2024, 1, 17));
        let clock = FixedClock(date(2024, 1, 17));

        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 1);
    }

    #[test]
    fn test_example_scenario_wednesday_walkthrough() {
        // Complete Wednesday 2024-01-17, then advance the clock without
        // completing anything else.
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 17));

        let wednesday = FixedClock(date(2024, 1, 17));
        assert_eq!(
            calculate_streak(&completions, &economy, &wednesday).unwrap(),
            1
        );

        // Thursday, not yet done: still 1
        let thursday = FixedClock(date(2024, 1, 18));
        assert_eq!(
            calculate_streak(&completions, &economy, &thursday).unwrap(),
            1
        );

        // Friday with Thursday never completed and no freezes: 0
        let friday = FixedClock(date(2024, 1, 19));
        assert_eq!(
            calculate_streak(&completions, &economy, &friday).unwrap(),
            0
        );
    }

    #[test]
    fn test_week_status_classifies_completed_and_frozen() {
        let (_dir, completions, economy) = setup();
        let today = date(2024, 1, 17); // Wednesday
        complete(&completions, date(2024, 1, 15)); // Monday
        freeze(&economy, date(2024, 1, 16)); // Tuesday
        let clock = FixedClock(today);

        let status = week_status(&completions, &economy, &clock).unwrap();
        assert!(status.completed.contains(&DayName::Monday));
        assert!(status.frozen.contains(&DayName::Tuesday));
        assert!(!status.completed.contains(&DayName::Wednesday));
        assert_eq!(status.completed.len(), 1);
        assert_eq!(status.frozen.len(), 1);
    }

    #[test]
    fn test_week_status_ignores_stale_cycle_dates() {
        let (_dir, completions, economy) = setup();
        // Completed a Monday two weeks before "today": not this cycle
        complete(&completions, date(2024, 1, 1));
        let clock = FixedClock(date(2024, 1, 17));

        let status = week_status(&completions, &economy, &clock).unwrap();
        assert!(status.completed.is_empty());
    }

    #[test]
    fn test_week_status_full_cycle_resets_board() {
        let (_dir, completions, economy) = setup();
        let today = date(2024, 1, 21); // Sunday
        // Complete Mon..Sat of the cycle, freeze Sunday (today)
        for back in 1..=6 {
            complete(&completions, today - Days::new(back));
        }
        freeze(&economy, today);
        let clock = FixedClock(today);

        let status = week_status(&completions, &economy, &clock).unwrap();
        assert!(status.completed.is_empty());
        assert!(status.frozen.is_empty());

        // The reset is presentational: the underlying records are intact
        assert_eq!(completions.all().unwrap().len(), 6);
    }

    #[test]
    fn test_check_no_completions_is_noop() {
        let (_dir, completions, economy) = setup();
        let clock = FixedClock(date(2024, 1, 17));

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert_eq!(outcome, FreezeCheck::default());
    }

    #[test]
    fn test_check_yesterday_completed_is_noop() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 16));
        economy
            .update(|e| {
                e.streak_freezes = 3;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17));

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(!outcome.freeze_used);
        assert!(!outcome.streak_lost);
        assert_eq!(economy.read().unwrap().streak_freezes, 3);
    }

    #[test]
    fn test_check_heals_single_missed_day() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 15));
        economy
            .update(|e| {
                e.streak_freezes = 1;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17));

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(outcome.freeze_used);
        assert!(!outcome.streak_lost);

        let economy_state = economy.read().unwrap();
        assert_eq!(economy_state.streak_freezes, 0);
        assert!(economy_state.freezes_used.contains("2024-01-16"));

        // The healed gap keeps the streak alive across it
        assert_eq!(calculate_streak(&completions, &economy, &clock).unwrap(), 1);
    }

    #[test]
    fn test_check_heals_multiple_days_and_skips_today() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 14));
        economy
            .update(|e| {
                e.streak_freezes = 5;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17));

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(outcome.freeze_used);
        assert!(!outcome.streak_lost);

        let economy_state = economy.read().unwrap();
        // 15th and 16th covered; today (17th) left for the user
        assert_eq!(economy_state.streak_freezes, 3);
        assert!(economy_state.freezes_used.contains("2024-01-15"));
        assert!(economy_state.freezes_used.contains("2024-01-16"));
        assert!(!economy_state.freezes_used.contains("2024-01-17"));
    }

    #[test]
    fn test_check_gap_beyond_lookback_loses_streak_and_spends_nothing() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 10));
        economy
            .update(|e| {
                e.streak_freezes = 10;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17)); // 7-day gap

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(!outcome.freeze_used);
        assert!(outcome.streak_lost);
        assert_eq!(economy.read().unwrap().streak_freezes, 10);
    }

    #[test]
    fn test_check_runs_out_of_freezes_mid_gap() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 13));
        economy
            .update(|e| {
                e.streak_freezes = 1;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17)); // needs 3 freezes, has 1

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(outcome.freeze_used);
        assert!(outcome.streak_lost);

        let economy_state = economy.read().unwrap();
        assert_eq!(economy_state.streak_freezes, 0);
        assert!(economy_state.freezes_used.contains("2024-01-14"));
        assert!(!economy_state.freezes_used.contains("2024-01-15"));
    }

    #[test]
    fn test_check_skips_days_already_frozen() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 14));
        freeze(&economy, date(2024, 1, 15));
        economy
            .update(|e| {
                e.streak_freezes = 1;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17));

        let outcome = check_and_use_freezes(&completions, &economy, &clock, 4).unwrap();
        assert!(outcome.freeze_used);
        assert!(!outcome.streak_lost);

        // Only the 16th needed a fresh freeze
        let economy_state = economy.read().unwrap();
        assert_eq!(economy_state.streak_freezes, 0);
        assert!(economy_state.freezes_used.contains("2024-01-16"));
    }

    #[test]
    fn test_check_lookback_is_configurable() {
        let (_dir, completions, economy) = setup();
        complete(&completions, date(2024, 1, 10));
        economy
            .update(|e| {
                e.streak_freezes = 10;
                Ok(())
            })
            .unwrap();
        let clock = FixedClock(date(2024, 1, 17)); // 7-day gap

        // A 10-day lookback accepts the same gap a 4-day lookback refuses
        let outcome = check_and_use_freezes(&completions, &economy, &clock, 10).unwrap();
        assert!(outcome.freeze_used);
        assert!(!outcome.streak_lost);
        assert_eq!(economy.read().unwrap().streak_freezes, 4);
    }
}
