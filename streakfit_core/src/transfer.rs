//! JSON import/export of user data.
//!
//! The document format matches the original app's export files (camelCase
//! keys) so the two interchange. `customGoals` and `customWorkouts` are
//! presentational payloads the core carries opaquely and never interprets.
//!
//! Import replaces the completion collection wholesale — never a merge —
//! and skips individually malformed records rather than aborting. Derived
//! streak state is recomputed from the stores on the next query, so nothing
//! cached survives an import.

use crate::completions::CompletionStore;
use crate::types::CompletionRecord;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current export document version
pub const EXPORT_VERSION: u32 = 1;

/// The on-the-wire export document.
///
/// Only the `completions` array is required on import; everything else is
/// metadata that hand-edited or older files may omit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    pub completions: Vec<Value>,
    #[serde(default)]
    pub custom_goals: Option<Value>,
    #[serde(default)]
    pub custom_workouts: Option<Value>,
}

/// Result of an import: how many records made it in, how many were dropped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Export all completion records as a pretty-printed JSON document
pub fn export_data(completions: &CompletionStore) -> Result<String> {
    let records = completions.all()?;
    let doc = ExportDocument {
        version: EXPORT_VERSION,
        exported_at: Some(Utc::now()),
        completions: records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()?,
        custom_goals: None,
        custom_workouts: Some(Value::Array(Vec::new())),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Import a JSON export document, replacing the completion collection.
///
/// A structurally invalid document (not JSON, or no `completions` array) is
/// a typed failure with a human-readable reason. Individually malformed
/// records are skipped with a warning; valid ones still import.
pub fn import_data(completions: &CompletionStore, json: &str) -> Result<ImportSummary> {
    let doc: ExportDocument = serde_json::from_str(json)
        .map_err(|e| Error::Import(format!("invalid export document: {}", e)))?;

    completions.clear()?;

    let mut summary = ImportSummary::default();
    for entry in doc.completions {
        match serde_json::from_value::<CompletionRecord>(entry) {
            Ok(record) => {
                completions.add(&record)?;
                summary.imported += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping malformed completion record: {}", e);
                summary.skipped += 1;
            }
        }
    }

    tracing::info!(
        "Imported {} completions ({} skipped)",
        summary.imported,
        summary.skipped
    );
    Ok(summary)
}
