//! Game Settings
//!
//! Window, swarm, and skin tuning persisted as JSON next to the binary.
//! A missing or unreadable file falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::colorize::{Rgb, DEFAULT_MID_VALUE};

/// Three-point gradient defining one faction's ship colors
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipSkin {
    pub base: Rgb,
    pub low: Rgb,
    pub high: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Inward margin keeping pointers off the true screen border
    pub pointer_spacing: f32,
    pub swarm_size: usize,
    /// Grayscale reference value for the colorizer (1-254)
    pub mid_value: u8,
    pub player_skin: ShipSkin,
    pub alien_skin: ShipSkin,
}

impl Settings {
    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            pointer_spacing: 10.0,
            swarm_size: 5,
            mid_value: DEFAULT_MID_VALUE,
            player_skin: ShipSkin {
                base: (60, 120, 200),
                low: (0, 10, 40),
                high: (200, 230, 255),
            },
            alien_skin: ShipSkin {
                base: (160, 60, 160),
                low: (20, 0, 30),
                high: (255, 200, 255),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let settings = Settings::default();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.pointer_spacing, 10.0);
        assert_eq!(settings.mid_value, 72);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.swarm_size, settings.swarm_size);
        assert_eq!(back.alien_skin.base, settings.alien_skin.base);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(Settings::load("definitely-not-here.json").is_err());
    }
}
