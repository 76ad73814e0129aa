//! Game settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web; native builds use defaults
//! unless handed a JSON document.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FADE_ALPHA;

/// Which viewport edges enemies may spawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnEdges {
    /// Fair coin between the left/right pair and the top/bottom pair
    #[default]
    AllEdges,
    /// Only above or below the viewport (the classic arcade behavior)
    TopBottomOnly,
}

impl SpawnEdges {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnEdges::AllEdges => "All edges",
            SpawnEdges::TopBottomOnly => "Top/bottom only",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "all_edges" | "alledges" => Some(SpawnEdges::AllEdges),
            "topbottom" | "top_bottom" | "top_bottom_only" | "topbottomonly" => {
                Some(SpawnEdges::TopBottomOnly)
            }
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enemy spawn edge policy
    pub spawn_edges: SpawnEdges,

    // === Visual Effects ===
    /// Motion trails (translucent per-frame fade instead of a hard clear)
    pub trails: bool,
    /// Overlay alpha per frame when trails are on (lower = longer trails)
    pub trail_fade: f32,

    // === Accessibility ===
    /// Reduced motion (no trails)
    pub reduced_motion: bool,

    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_edges: SpawnEdges::AllEdges,
            trails: true,
            trail_fade: DEFAULT_FADE_ALPHA,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Alpha for the per-frame fade (1.0 = hard clear)
    pub fn effective_fade_alpha(&self) -> f32 {
        if !self.trails || self.reduced_motion {
            1.0
        } else {
            self.trail_fade.clamp(0.01, 1.0)
        }
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "dot_defender_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
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
            match self.to_json() {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_ok() {
                        log::info!("Settings saved");
                    } else {
                        log::warn!("LocalStorage rejected settings");
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {}", e),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_alpha() {
        let mut settings = Settings::default();
        assert!((settings.effective_fade_alpha() - 0.1).abs() < 1e-6);

        settings.reduced_motion = true;
        assert_eq!(settings.effective_fade_alpha(), 1.0);

        settings.reduced_motion = false;
        settings.trails = false;
        assert_eq!(settings.effective_fade_alpha(), 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"spawn_edges":"TopBottomOnly","seed":7}"#)
            .expect("valid settings");
        assert_eq!(settings.spawn_edges, SpawnEdges::TopBottomOnly);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.trails);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            spawn_edges: SpawnEdges::TopBottomOnly,
            trails: false,
            trail_fade: 0.25,
            reduced_motion: true,
            seed: Some(42),
        };
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_native_save_is_noop() {
        let settings = Settings {
            spawn_edges: SpawnEdges::TopBottomOnly,
            seed: Some(3),
            ..Settings::default()
        };
        settings.save();
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_saved_json_is_what_load_parses() {
        let settings = Settings {
            trail_fade: 0.3,
            ..Settings::default()
        };
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json_or_default(&json), settings);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{not json"), Settings::default());
    }

    #[test]
    fn test_spawn_edges_from_str() {
        assert_eq!(SpawnEdges::from_str("ALL"), Some(SpawnEdges::AllEdges));
        assert_eq!(
            SpawnEdges::from_str("top_bottom"),
            Some(SpawnEdges::TopBottomOnly)
        );
        assert_eq!(SpawnEdges::from_str("diagonal"), None);
    }
}
