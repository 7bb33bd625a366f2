//! Scripted telemetry scenes.
//!
//! Audio capture and analysis happen upstream in a real deployment; the
//! demo binary stands in for that pipeline with a handful of scripted
//! scenes that synthesize plausible telemetry per frame (sine envelopes
//! plus a little jitter). Scenes are cycled manually, like switching
//! visualizations in a DJ set.

use orb_core::{AudioTelemetry, BandLevels};
use rand::Rng;

/// Assumed frame cadence for the envelope clocks
const FRAME_DELTA: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scene {
    /// Nothing happening; the orb rests on its idle pulse
    Idle,
    /// Microphone hot, user talking
    Listening,
    /// Assistant audio playing back
    Speaking,
    /// Both directions live, turn-taking
    Conversation,
}

impl Scene {
    pub const ALL: [Scene; 4] = [
        Scene::Idle,
        Scene::Listening,
        Scene::Speaking,
        Scene::Conversation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scene::Idle => "Idle",
            Scene::Listening => "Listening",
            Scene::Speaking => "Speaking",
            Scene::Conversation => "Conversation",
        }
    }

    pub fn from_name(name: &str) -> Option<Scene> {
        match name.to_ascii_lowercase().as_str() {
            "idle" => Some(Scene::Idle),
            "listening" => Some(Scene::Listening),
            "speaking" => Some(Scene::Speaking),
            "conversation" => Some(Scene::Conversation),
            _ => None,
        }
    }
}

/// Synthesizes one `AudioTelemetry` record per frame for the active scene.
pub struct TelemetryScript {
    scene: Scene,
    time: f32,
}

impl TelemetryScript {
    pub fn new(scene: Scene) -> Self {
        Self { scene, time: 0.0 }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub fn cycle_next(&mut self) -> Scene {
        let idx = Scene::ALL.iter().position(|s| *s == self.scene).unwrap_or(0);
        self.scene = Scene::ALL[(idx + 1) % Scene::ALL.len()];
        self.scene
    }

    /// Advance the clock one frame and produce telemetry.
    pub fn tick(&mut self) -> AudioTelemetry {
        self.time += FRAME_DELTA;
        let t = self.time;

        match self.scene {
            Scene::Idle => AudioTelemetry::silence(),
            Scene::Listening => AudioTelemetry::input_only(voice_bands(t, 0.0, 1.0)),
            Scene::Speaking => AudioTelemetry::output_only(voice_bands(t, 1.7, 1.0)),
            Scene::Conversation => {
                // Slow turn-taking envelope: positive half favors the input
                // side, negative half the output side, with crossfade.
                let turn = (t * 0.4).sin();
                let input_gain = (0.5 + turn * 0.5).clamp(0.15, 1.0);
                let output_gain = (0.5 - turn * 0.5).clamp(0.15, 1.0);
                AudioTelemetry::duplex(
                    voice_bands(t, 0.0, input_gain),
                    voice_bands(t, 2.9, output_gain),
                )
            }
        }
    }
}

/// Speech-like band envelope: syllabic pulsing on the level, highs riding
/// a faster cycle, lows slower. `phase` decorrelates the two directions.
fn voice_bands(t: f32, phase: f32, gain: f32) -> BandLevels {
    let mut rng = rand::rng();
    let mut jitter = || rng.random_range(-4.0..4.0f32);

    let syllable = ((t * 5.3 + phase).sin() * 0.5 + 0.5).powf(1.5);
    let level = (25.0 + 60.0 * syllable) * gain + jitter();
    let high = (15.0 + 55.0 * ((t * 7.1 + phase).sin() * 0.5 + 0.5)) * gain + jitter();
    let mid = (20.0 + 55.0 * syllable) * gain + jitter();
    let low = (10.0 + 45.0 * ((t * 2.3 + phase).sin() * 0.5 + 0.5)) * gain + jitter();

    BandLevels::new(
        level.clamp(0.0, 100.0),
        high.clamp(0.0, 100.0),
        mid.clamp(0.0, 100.0),
        low.clamp(0.0, 100.0),
    )
}
