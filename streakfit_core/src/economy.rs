//! User economy persistence and commands.
//!
//! The economy (points, streak freezes, consumed-freeze dates) is a single
//! JSON document, lazily created with zero values on first read and written
//! atomically (temp file + rename) under an exclusive lock.
//!
//! Known limitation: there is no cross-process coordination beyond the
//! per-write lock. Two concurrent writers are last-write-wins; the system
//! assumes a single active session (one logical writer).

use crate::types::UserEconomy;
use crate::{Error, Result};
use chrono::Utc;
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Store for the user economy singleton
pub struct EconomyStore {
    path: PathBuf,
}

impl EconomyStore {
    /// Create a store over the given JSON file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the singleton, returning zero values if the file is missing
    /// (lazy creation on first access).
    ///
    /// Any other failure — unreadable or unparseable file — is a storage
    /// fault and propagates. Falling back to defaults here would let the
    /// next write silently replace the user's real balance.
    pub fn read(&self) -> Result<UserEconomy> {
        if !self.path.exists() {
            tracing::debug!("No economy file found, using zero values");
            return Ok(UserEconomy::default());
        }

        let file = File::open(&self.path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        match serde_json::from_str::<UserEconomy>(&contents) {
            Ok(economy) => Ok(economy),
            Err(e) => {
                tracing::warn!("Corrupt economy file {:?}: {}", self.path, e);
                Err(e.into())
            }
        }
    }

    /// Replace the singleton atomically (temp file, sync, rename)
    pub fn write(&self, economy: &UserEconomy) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(self.path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "economy path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(economy)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved economy to {:?}", self.path);
        Ok(())
    }

    /// Read-modify-write, refreshing the audit timestamp
    pub fn update<F>(&self, f: F) -> Result<UserEconomy>
    where
        F: FnOnce(&mut UserEconomy) -> Result<()>,
    {
        let mut economy = self.read()?;
        f(&mut economy)?;
        economy.updated_at = Utc::now();
        self.write(&economy)?;
        Ok(economy)
    }

    /// Remove the singleton (reset path)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!("Cleared economy at {:?}", self.path);
        }
        Ok(())
    }

    // ========================================================================
    // Economy commands
    // ========================================================================

    /// Credit points to the balance
    pub fn add_points(&self, n: u32) -> Result<UserEconomy> {
        let economy = self.update(|e| {
            e.points += n;
            Ok(())
        })?;
        tracing::info!("Awarded {} points (balance {})", n, economy.points);
        Ok(economy)
    }

    /// Buy one streak freeze for `cost` points.
    ///
    /// Returns `false` without mutating anything when the balance is short.
    pub fn purchase_freeze(&self, cost: u32) -> Result<bool> {
        let economy = self.read()?;
        if economy.points < cost {
            tracing::info!(
                "Freeze purchase declined: {} points < {} cost",
                economy.points,
                cost
            );
            return Ok(false);
        }

        self.update(|e| {
            e.points -= cost;
            e.streak_freezes += 1;
            Ok(())
        })?;
        tracing::info!("Purchased streak freeze for {} points", cost);
        Ok(true)
    }

    /// Consume one freeze to cover `date` (`YYYY-MM-DD`).
    ///
    /// Idempotent: a date already covered returns success without spending
    /// another freeze. Returns `false` when no freezes are available.
    pub fn consume_freeze_for_date(&self, date: &str) -> Result<bool> {
        let economy = self.read()?;

        if economy.freezes_used.contains(date) {
            tracing::debug!("Freeze already recorded for {}", date);
            return Ok(true);
        }

        if economy.streak_freezes == 0 {
            tracing::info!("No freeze available to cover {}", date);
            return Ok(false);
        }

        self.update(|e| {
            e.streak_freezes -= 1;
            e.freezes_used.insert(date.to_string());
            Ok(())
        })?;
        tracing::info!("Consumed streak freeze for {}", date);
        Ok(true)
    }
}
