//! Saved progress: the highest level the player has unlocked.
//!
//! Stored as a single human-readable integer. Reading or writing the file
//! never fails the game; the in-memory value is authoritative.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::session::LevelUnlock;

pub struct Progress {
    path: Option<PathBuf>,
    highest_unlocked: u32,
}

impl Progress {
    /// Progress that lives only in memory, level 1 unlocked.
    pub fn in_memory() -> Self {
        Self { path: None, highest_unlocked: 1 }
    }

    /// Loads progress from `path`, starting from level 1 when the file is
    /// missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let highest_unlocked = if !path.exists() {
            log::info!("no saved progress at {}, starting fresh", path.display());
            1
        } else {
            match read_record(&path) {
                Ok(level) => {
                    log::info!("loaded progress: level {} unlocked", level);
                    level
                }
                Err(err) => {
                    log::warn!("{:#}; starting fresh", err);
                    1
                }
            }
        };
        Self { path: Some(path), highest_unlocked }
    }

    pub fn highest_unlocked(&self) -> u32 {
        self.highest_unlocked
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level <= self.highest_unlocked
    }

    fn save(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = write_record(path, self.highest_unlocked) {
            log::warn!("{:#}", err);
        }
    }
}

impl LevelUnlock for Progress {
    /// Unlocks the level after `completed_level`. Never lowers the record.
    fn unlock(&mut self, completed_level: u32) {
        if completed_level >= self.highest_unlocked {
            self.highest_unlocked = completed_level.saturating_add(1);
            log::info!("level {} unlocked", self.highest_unlocked);
            self.save();
        }
    }
}

fn read_record(path: &Path) -> anyhow::Result<u32> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading progress file {}", path.display()))?;
    let first = text.lines().next().unwrap_or("").trim();
    let level: u32 = first
        .parse()
        .with_context(|| format!("parsing progress file {} ({:?})", path.display(), first))?;
    Ok(level.max(1))
}

fn write_record(path: &Path, level: u32) -> anyhow::Result<()> {
    fs::write(path, level.to_string())
        .with_context(|| format!("writing progress file {}", path.display()))
}
