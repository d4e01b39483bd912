//! Snapshot codec and key names for persisted progress.
//!
//! The checkbox snapshot is a JSON object mapping `checkbox_<flatIndex>` to
//! a boolean, flat index counted in document order across every stage. The
//! whole object is rewritten on every mutation; loading tolerates snapshots
//! whose shape no longer matches the current course.

use crate::progress::ChecklistState;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Key under which the most recently shown section id is written. By policy
/// it is write-only: startup never reads it back, so every visit starts on
/// the landing page.
pub const SECTION_KEY: &str = "dungeonCopilot_currentSection";

/// Key under which the checkbox snapshot is written.
pub const CHECKBOX_KEY: &str = "dungeonCopilot_checkboxes";

const ENTRY_PREFIX: &str = "checkbox_";

/// Serialize every checklist flag into the snapshot object.
#[must_use]
pub fn encode_snapshot(checklist: &ChecklistState) -> String {
    let entries: BTreeMap<String, bool> = checklist
        .flat()
        .into_iter()
        .enumerate()
        .map(|(index, checked)| (format!("{ENTRY_PREFIX}{index}"), checked))
        .collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| String::from("{}"))
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot root is not an object")]
    NotAnObject,
}

/// Parse a snapshot into flat-index entries.
///
/// Entries that do not fit the expected shape (wrong key prefix, non-numeric
/// suffix, non-boolean value) are skipped rather than treated as fatal.
///
/// # Errors
///
/// Returns an error when the snapshot as a whole is not a JSON object.
pub fn decode_snapshot(raw: &str) -> Result<BTreeMap<usize, bool>, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = value else {
        return Err(SnapshotError::NotAnObject);
    };

    let mut entries = BTreeMap::new();
    for (key, value) in map {
        let Some(index) = key
            .strip_prefix(ENTRY_PREFIX)
            .and_then(|suffix| suffix.parse::<usize>().ok())
        else {
            continue;
        };
        let Value::Bool(checked) = value else {
            continue;
        };
        entries.insert(index, checked);
    }
    Ok(entries)
}

/// Apply decoded entries by flat position. Indices past the current
/// checklist are ignored. Returns how many entries landed.
pub fn apply_snapshot(checklist: &mut ChecklistState, entries: &BTreeMap<usize, bool>) -> usize {
    entries
        .iter()
        .filter(|&(&index, &checked)| checklist.set_flat(index, checked))
        .count()
}

/// Decode and apply in one step.
///
/// # Errors
///
/// Returns an error when the snapshot cannot be parsed at all; partially
/// matching snapshots apply what they can and succeed.
pub fn restore_snapshot(checklist: &mut ChecklistState, raw: &str) -> Result<usize, SnapshotError> {
    let entries = decode_snapshot(raw)?;
    Ok(apply_snapshot(checklist, &entries))
}
