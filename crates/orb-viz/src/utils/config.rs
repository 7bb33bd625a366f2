//! Configuration file management.
//!
//! Handles loading and saving user preferences to `~/.orb-viz.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_TEMPLATE: &str = r#"# orb-viz configuration file

# =============================================================================
# Static layer toggles
# =============================================================================
# These are fixed for the session; the audio-reactive toggles (particles,
# wavy blobs) are derived from telemetry and not configurable.

# show_background = true      # Layered gradient behind the orb
# show_glow_effects = true    # Core glow and halo rings
# show_shadow = true          # Drop shadow under the orb

# =============================================================================
# Telemetry handling
# =============================================================================

# Clamp incoming band values into 0-100 before mapping (default: false)
# clamp_telemetry = false

# =============================================================================
# Window
# =============================================================================

# width = 1000
# height = 1000
# fullscreen = false

# Scene to start the demo driver in: "idle", "listening", "speaking",
# or "conversation"
# start_scene = "idle"
"#;

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub show_background: Option<bool>,
    pub show_glow_effects: Option<bool>,
    pub show_shadow: Option<bool>,

    pub clamp_telemetry: Option<bool>,

    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fullscreen: Option<bool>,
    pub start_scene: Option<String>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".orb-viz.toml"))
    }

    pub fn load() -> Self {
        let path = match Self::path() {
            Some(p) => p,
            None => return Self::default(),
        };

        // Create template file if it doesn't exist
        if !path.exists() {
            let _ = fs::write(&path, CONFIG_TEMPLATE);
            println!("Created config template at {:?}", path);
        }

        fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::path() {
            if let Ok(content) = toml::to_string(self) {
                let _ = fs::write(&path, &content);
                println!("Config saved to {:?}", path);
            }
        }
    }

    pub fn show_background(&self) -> bool {
        self.show_background.unwrap_or(true)
    }
    pub fn show_glow_effects(&self) -> bool {
        self.show_glow_effects.unwrap_or(true)
    }
    pub fn show_shadow(&self) -> bool {
        self.show_shadow.unwrap_or(true)
    }

    pub fn clamp_telemetry(&self) -> bool {
        self.clamp_telemetry.unwrap_or(false)
    }

    pub fn width(&self) -> u32 {
        self.width
            .unwrap_or(if cfg!(debug_assertions) { 600 } else { 1000 })
    }
    pub fn height(&self) -> u32 {
        self.height
            .unwrap_or(if cfg!(debug_assertions) { 600 } else { 1000 })
    }
    pub fn fullscreen(&self) -> bool {
        self.fullscreen.unwrap_or(false)
    }

    pub fn start_scene(&self) -> &str {
        self.start_scene.as_deref().unwrap_or("idle")
    }
}
