use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Highest counter a model can reach before the 3-digit space runs out.
pub const MAX_VERSION: u32 = 999;

fn counter_pattern(model: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?i){}-([0-9]{{3}})", regex::escape(model))).map_err(|source| {
        Error::Pattern {
            model: model.to_string(),
            source,
        }
    })
}

/// Scan `dir` for existing reports of `model` and return the highest counter.
///
/// `None` means no entry name contains the model at all (a fresh model);
/// `Some(0)` means the model appears but never with a 3-digit counter.
/// Only the first `<model>-NNN` occurrence within a single name counts.
pub fn scan_highest(dir: &Path, model: &str) -> Result<Option<u32>> {
    let pattern = counter_pattern(model)?;
    let model_lower = model.to_lowercase();

    let entries = std::fs::read_dir(dir).map_err(|source| Error::DirScan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut highest: Option<u32> = None;
    for entry in entries {
        let entry = entry.map_err(|source| Error::DirScan {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.to_lowercase().contains(&model_lower) {
            continue;
        }
        let counter = pattern
            .captures(&name)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .unwrap_or(0);
        highest = Some(highest.unwrap_or(0).max(counter));
    }

    Ok(highest)
}

/// Counter for the next report: one past the highest existing one.
pub fn next_version(model: &str, highest: Option<u32>) -> Result<u32> {
    let next = highest.unwrap_or(0) + 1;
    if next > MAX_VERSION {
        return Err(Error::VersionExhausted(model.to_string()));
    }
    Ok(next)
}

/// Report filename for a model and counter, e.g. `T480-007`.
pub fn format_filename(model: &str, version: u32) -> String {
    format!("{}-{:03}", model.to_uppercase(), version)
}
