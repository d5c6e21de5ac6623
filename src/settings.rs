use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::strings::Language;

const VOLUME_STEP: f32 = 0.1;

/// The few preferences worth keeping between runs, stored as JSON next to
/// the executable. Anything unreadable falls back to defaults; save errors
/// are ignored, a missing settings file is not worth crashing over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 0.7,
            music_volume: 0.5,
            language: Language::English,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let Ok(data) = fs::read_to_string(Self::path()) else {
            return Self::default();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(Self::path(), json);
        }
    }

    fn path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join("stonedodger.settings.json");
            }
        }
        PathBuf::from("stonedodger.settings.json")
    }

    pub fn nudge_sfx(&mut self, up: bool) {
        self.sfx_volume = nudge(self.sfx_volume, up);
    }

    pub fn nudge_music(&mut self, up: bool) {
        self.music_volume = nudge(self.music_volume, up);
    }

    /// Volume shown as 0..=10 in the options screen.
    pub fn notch(volume: f32) -> u32 {
        (volume * 10.0).round() as u32
    }
}

fn nudge(volume: f32, up: bool) -> f32 {
    let next = if up {
        volume + VOLUME_STEP
    } else {
        volume - VOLUME_STEP
    };
    next.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volumes_clamp_at_both_ends() {
        let mut settings = Settings::default();
        for _ in 0..20 {
            settings.nudge_sfx(true);
            settings.nudge_music(false);
        }
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.music_volume, 0.0);
    }

    #[test]
    fn round_trips_through_json() {
        let mut settings = Settings::default();
        settings.nudge_sfx(false);
        settings.language = Language::Italian;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Language::Italian);
        assert!((back.sfx_volume - settings.sfx_volume).abs() < f32::EPSILON);
    }

    #[test]
    fn notch_maps_to_tenths() {
        assert_eq!(Settings::notch(0.0), 0);
        assert_eq!(Settings::notch(0.7), 7);
        assert_eq!(Settings::notch(1.0), 10);
    }
}
