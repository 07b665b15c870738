//! Game settings
//!
//! Read from `settings.json` (or the file named by `FOG_MAZE_SETTINGS`).
//! Every field is optional in the file; missing fields keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding the settings path
pub const SETTINGS_ENV: &str = "FOG_MAZE_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
    pub target_fps: u32,
    /// Longest frame delta fed to the simulation (seconds). Keeps a stalled
    /// frame from moving the avatar farther than a tile.
    pub max_frame_dt: f32,

    // === Gameplay ===
    /// Avatar speed, logical pixels per second
    pub player_speed: f32,

    // === Files ===
    pub progress_file: PathBuf,
    pub levels_dir: PathBuf,
    pub assets_dir: PathBuf,

    // === Audio ===
    pub audio: bool,
    /// Chime volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: "Uhh-Maze-ing".to_string(),
            target_fps: 60,
            max_frame_dt: 0.05,

            player_speed: crate::core::player::DEFAULT_SPEED,

            progress_file: PathBuf::from("progress.dat"),
            levels_dir: PathBuf::from("assets/levels"),
            assets_dir: PathBuf::from("assets"),

            audio: true,
            sfx_volume: 0.8,
        }
    }
}

impl Settings {
    /// Settings path: `$FOG_MAZE_SETTINGS` or `settings.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing settings {}", path.display()))
    }

    /// Replace out-of-range values with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.window_width <= 0 || self.window_height <= 0 {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if self.target_fps == 0 {
            self.target_fps = defaults.target_fps;
        }
        if !(self.max_frame_dt > 0.0) {
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !(self.player_speed > 0.0) {
            self.player_speed = defaults.player_speed;
        }
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    /// Frame delta to feed the simulation.
    pub fn frame_dt(&self, raw: f32) -> f32 {
        raw.clamp(0.0, self.max_frame_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("fog_maze_settings_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = scratch("partial", r#"{ "window_width": 1024, "audio": false }"#);
        let s = Settings::load(&path);
        assert_eq!(s.window_width, 1024);
        assert!(!s.audio);
        assert_eq!(s.window_height, 600);
        assert_eq!(s.player_speed, 120.0);
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let path = scratch("malformed", "{ window_width: ");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("fog_maze_settings_missing").join(SETTINGS_FILE);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn bad_values_are_replaced() {
        let path = scratch(
            "bad",
            r#"{ "player_speed": -3.0, "max_frame_dt": 0.0, "sfx_volume": 4.0 }"#,
        );
        let s = Settings::load(&path);
        assert_eq!(s.player_speed, 120.0);
        assert_eq!(s.max_frame_dt, 0.05);
        assert_eq!(s.sfx_volume, 1.0);
    }

    #[test]
    fn frame_dt_is_clamped() {
        let s = Settings::default();
        assert_eq!(s.frame_dt(0.016), 0.016);
        assert_eq!(s.frame_dt(0.5), 0.05);
        assert_eq!(s.frame_dt(-1.0), 0.0);
    }
}
