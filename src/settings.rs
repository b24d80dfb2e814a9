//! Demo settings and preferences
//!
//! Persisted in LocalStorage so slider positions survive a reload.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::proposals::PRESET_PROPOSALS;
use crate::sim::{clamp_agent_count, clamp_speed};

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Population size (agent-count slider)
    pub agent_count: usize,
    /// Step multiplier (speed slider)
    pub speed: f32,
    /// Proposal shown above the canvas
    pub proposal: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agent_count: AGENT_COUNT_DEFAULT,
            speed: SPEED_DEFAULT,
            proposal: PRESET_PROPOSALS[0].to_string(),
        }
    }
}

impl Settings {
    /// Pull values into the control ranges; speed snaps to slider steps
    pub fn sanitized(mut self) -> Self {
        self.agent_count = clamp_agent_count(self.agent_count);
        self.speed = snap_speed(self.speed);
        if self.proposal.trim().is_empty() {
            self.proposal = PRESET_PROPOSALS[0].to_string();
        }
        self
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "swarm_vote_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
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
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::debug!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Clamp to the speed range and round to the nearest slider step
pub fn snap_speed(speed: f32) -> f32 {
    let speed = clamp_speed(speed);
    (speed / SPEED_STEP).round() * SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.agent_count, 12);
        assert_eq!(s.speed, 1.0);
        assert_eq!(s.proposal, PRESET_PROPOSALS[0]);
    }

    #[test]
    fn test_sanitized_clamps_and_snaps() {
        let s = Settings {
            agent_count: 50,
            speed: 1.3,
            proposal: "   ".to_string(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.agent_count, 20);
        assert_eq!(s.speed, 1.5);
        assert_eq!(s.proposal, PRESET_PROPOSALS[0]);

        assert_eq!(snap_speed(0.1), 0.5);
        assert_eq!(snap_speed(7.0), 3.0);
    }

    #[test]
    fn test_stale_layer_toggles_are_ignored() {
        // Older saves carried layer toggles; they no longer affect anything
        let json = r#"{"agent_count": 9, "show_connections": false, "reduced_motion": true}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.agent_count, 9);

        let back = serde_json::to_string(&s).unwrap();
        assert!(!back.contains("show_connections"));
        assert!(!back.contains("reduced_motion"));
    }

    #[test]
    fn test_json_round_trip_with_missing_fields() {
        let s: Settings = serde_json::from_str(r#"{"agent_count": 8}"#).unwrap();
        assert_eq!(s.agent_count, 8);
        assert_eq!(s.speed, SPEED_DEFAULT);

        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
