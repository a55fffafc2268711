//! Append-only completion log.
//!
//! Completion records are appended to a JSONL (JSON Lines) file with file
//! locking. The store itself does not enforce the one-record-per
//! `(day, date)` invariant; the command service checks before appending
//! (insert-if-absent under the single-writer assumption).

use crate::types::{CompletionRecord, DayName};
use crate::Result;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// JSONL-backed completion log with file locking
pub struct CompletionStore {
    path: PathBuf,
}

impl CompletionStore {
    /// Create a store over the given JSONL file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a record under an exclusive lock
    pub fn add(&self, record: &CompletionRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!(
            "Appended completion {} {} to log",
            record.day_name,
            record.completed_date
        );
        Ok(())
    }

    /// Full scan of the log under a shared lock.
    ///
    /// Malformed lines are skipped with a warning rather than failing the
    /// whole read.
    pub fn all(&self) -> Result<Vec<CompletionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        file.lock_shared()?;

        let reader = BufReader::new(&file);
        let mut records = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<CompletionRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Failed to parse completion at line {}: {}", line_num + 1, e);
                }
            }
        }

        file.unlock()?;
        tracing::debug!("Read {} completions from log", records.len());
        Ok(records)
    }

    /// All records whose `completed_date` equals `date` (`YYYY-MM-DD`)
    pub fn all_for_date(&self, date: &str) -> Result<Vec<CompletionRecord>> {
        let records = self.all()?;
        Ok(records
            .into_iter()
            .filter(|r| r.completed_date == date)
            .collect())
    }

    /// Whether a record exists for the `(day, date)` composite key
    pub fn completed_on(&self, day: DayName, date: &str) -> Result<bool> {
        Ok(self
            .all_for_date(date)?
            .iter()
            .any(|r| r.day_name == day))
    }

    /// Wipe the log (reset and import paths)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!("Cleared completion log at {:?}", self.path);
        }
        Ok(())
    }
}
