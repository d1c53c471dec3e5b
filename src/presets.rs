//! Preset catalog loading.
//!
//! Presets ship as a small CSV file (`id,label,minutes`) embedded in the
//! binary. Loading is strict about data that would make the selector
//! misbehave: a zero-minute preset or an empty catalog is an error so the
//! caller can fall back to [`crate::defaults::presets`].

use crate::{Preset, PresetId};
use log::{debug, info};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug)]
pub enum PresetError {
    Csv(csv::Error),
    ZeroMinutes(PresetId),
    Empty,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Csv(e) => write!(f, "Malformed preset data: {}", e),
            PresetError::ZeroMinutes(id) => {
                write!(f, "Preset '{}' has a duration of zero minutes", id)
            }
            PresetError::Empty => write!(f, "Preset catalog contains no presets"),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for PresetError {
    fn from(e: csv::Error) -> Self {
        PresetError::Csv(e)
    }
}

/// Parse a preset catalog with an `id,label,minutes` header row.
///
/// Rows keep their file order. A row whose id was already seen is skipped.
pub fn read_presets_from_csv_string(csv_content: &str) -> Result<Vec<Preset>, PresetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(csv_content.as_bytes());

    let mut presets = Vec::new();
    let mut seen_ids = HashSet::new();

    for record in reader.deserialize::<Preset>() {
        let preset = record?;

        if preset.minutes == 0 {
            return Err(PresetError::ZeroMinutes(preset.id));
        }

        if !seen_ids.insert(preset.id.clone()) {
            debug!("Duplicate preset id '{}', skipping", preset.id);
            continue;
        }

        presets.push(preset);
    }

    if presets.is_empty() {
        return Err(PresetError::Empty);
    }

    info!("Loaded {} presets from CSV content", presets.len());
    Ok(presets)
}
