#![warn(clippy::all, clippy::pedantic)]

//! The one piece of persisted game state: the best score ever observed.
//! Read once at startup, written only when it increases.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const SCORES_FILE_PATH: &str = "config/blockdock_scores.toml";

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best: u32,
}

/// Reads the best score from disk. Missing file means a fresh install and
/// reads as zero; a malformed file is an error the caller may ignore.
pub fn load_best_score() -> Result<u32> {
    let path = get_scores_file_path();
    if !path.exists() {
        return Ok(0);
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read scores file {}", path.display()))?;
    let scores: ScoreFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse scores file {}", path.display()))?;

    Ok(scores.best)
}

/// Writes the best score to disk.
pub fn save_best_score(best: u32) -> Result<()> {
    let path = get_scores_file_path();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let toml_string = toml::to_string_pretty(&ScoreFile { best })?;
    fs::write(&path, toml_string)
        .with_context(|| format!("failed to write scores file {}", path.display()))?;

    Ok(())
}

/// Path of the scores file. `BLOCKDOCK_SCORES` overrides it (used by tests).
#[must_use]
pub fn get_scores_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("BLOCKDOCK_SCORES") {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("blockdock").join("scores.toml")
    } else {
        PathBuf::from(SCORES_FILE_PATH)
    }
}
