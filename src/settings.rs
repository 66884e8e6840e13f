//! Game settings
//!
//! Persisted in LocalStorage on the web; read from a JSON file natively.
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Playfield width in pixels
    pub canvas_width: f32,
    /// Playfield height in pixels
    pub canvas_height: f32,
    /// Touch device: larger paddle, taps never pause
    pub touch_layout: bool,

    // === Session ===
    /// Lives at the start of every session
    pub starting_lives: u8,
    /// Largest dt a single frame may simulate (seconds)
    pub max_frame_dt: f32,

    // === Collision ===
    /// Use the packed block scanner instead of the plain linear scan
    pub accelerated_collision: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 480.0,
            canvas_height: 640.0,
            touch_layout: false,

            starting_lives: STARTING_LIVES,
            max_frame_dt: MAX_FRAME_DT,

            accelerated_collision: true,
        }
    }
}

impl Settings {
    /// Paddle (width, height) for the current layout
    pub fn paddle_size(&self) -> (f32, f32) {
        if self.touch_layout {
            (TOUCH_PADDLE_WIDTH, TOUCH_PADDLE_HEIGHT)
        } else {
            (PADDLE_WIDTH, PADDLE_HEIGHT)
        }
    }

    /// Replace values the simulation cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            log::warn!("Invalid canvas width {}, using {}", self.canvas_width, defaults.canvas_width);
            self.canvas_width = defaults.canvas_width;
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            log::warn!("Invalid canvas height {}, using {}", self.canvas_height, defaults.canvas_height);
            self.canvas_height = defaults.canvas_height;
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            log::warn!("Invalid max frame dt {}, using {}", self.max_frame_dt, defaults.max_frame_dt);
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if self.starting_lives == 0 {
            self.starting_lives = defaults.starting_lives;
        }
        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neon_breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Settings serialization failed, not saving: {}", e);
                return;
            }
        };

        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                log::warn!("Could not write settings to LocalStorage");
            } else {
                log::info!("Settings saved");
            }
        }
    }

    /// Native: no persistent store
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_width, 480.0);
        assert_eq!(settings.starting_lives, 3);
        assert_eq!(settings.max_frame_dt, 0.1);
        assert_eq!(settings.paddle_size(), (120.0, 10.0));
    }

    #[test]
    fn test_touch_layout_paddle() {
        let settings = Settings {
            touch_layout: true,
            ..Settings::default()
        };
        assert_eq!(settings.paddle_size(), (150.0, 15.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "canvas_width": 800.0, "touch_layout": true }"#)
            .unwrap();
        assert_eq!(settings.canvas_width, 800.0);
        assert!(settings.touch_layout);
        assert_eq!(settings.canvas_height, 640.0);
        assert!(settings.accelerated_collision);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "starting_lives": -2 }"#).is_err());
    }

    #[test]
    fn test_sanitized_repairs_nonsense() {
        let settings = Settings::from_json(
            r#"{ "canvas_width": -10.0, "max_frame_dt": 0.0, "starting_lives": 0 }"#,
        )
        .unwrap();
        assert_eq!(settings.canvas_width, 480.0);
        assert_eq!(settings.max_frame_dt, 0.1);
        assert_eq!(settings.starting_lives, 3);
    }

    #[test]
    fn test_json_roundtrip_preserves_custom_values() {
        let settings = Settings {
            canvas_width: 1024.0,
            accelerated_collision: false,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"accelerated_collision\":false"));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from_path("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
