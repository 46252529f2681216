//! Visitor preferences
//!
//! Read from LocalStorage under `greeno_site_settings`; missing or malformed
//! entries fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::SPRITE_SPEED;

/// Site preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip parallax and show scroll-animated content immediately
    pub reduced_motion: bool,
    /// Update results while typing (otherwise only on submit/focus)
    pub live_search: bool,
    /// Pac-Man speed in pixels per frame
    pub sprite_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            live_search: true,
            sprite_speed: SPRITE_SPEED,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "greeno_site_settings";

    /// Reduced motion from either the stored preference or the OS setting
    pub fn effective_reduced_motion(&self, prefers_reduced_motion: bool) -> bool {
        self.reduced_motion || prefers_reduced_motion
    }

    /// Sprite speed, falling back to the default for unusable values
    pub fn effective_sprite_speed(&self) -> f32 {
        if self.sprite_speed.is_finite() && self.sprite_speed > 0.0 {
            self.sprite_speed
        } else {
            SPRITE_SPEED
        }
    }

    /// Parse stored JSON, falling back to defaults for anything malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.reduced_motion);
        assert!(settings.live_search);
        assert_eq!(settings.effective_sprite_speed(), SPRITE_SPEED);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"reduced_motion": true}"#);
        assert!(settings.reduced_motion);
        assert!(settings.live_search);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_effective_values() {
        let settings = Settings {
            sprite_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(settings.effective_sprite_speed(), SPRITE_SPEED);
        assert!(settings.effective_reduced_motion(true));
        assert!(!settings.effective_reduced_motion(false));
    }

    #[test]
    fn test_json_round_trip_preserves_speed() {
        let settings = Settings {
            sprite_speed: 5.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).sprite_speed, 5.0);
    }
}
