//! Telemetry-to-visual mapping.
//!
//! The one piece of real logic in the orb: a pure, total function from an
//! `AudioTelemetry` record to the visual parameter set the renderer
//! consumes. No state survives between calls; identical telemetry always
//! produces identical parameters. Smoothing between frames is the
//! renderer's job.

use crate::color::Rgb;
use crate::palette::*;
use crate::telemetry::{AudioTelemetry, BandLevels};

/// Which directions are live this update. Recomputed fresh from the two
/// activity flags on every call; nothing transitions or persists.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivityState {
    Idle,
    InputOnly,
    OutputOnly,
    Both,
}

impl ActivityState {
    pub fn classify(input_active: bool, output_active: bool) -> Self {
        match (input_active, output_active) {
            (false, false) => Self::Idle,
            (true, true) => Self::Both,
            (true, false) => Self::InputOnly,
            (false, true) => Self::OutputOnly,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::Idle
    }
}

/// Visual parameter set for one frame of the orb.
///
/// Produced whole by [`map`]; the renderer reads it as a snapshot. The
/// scalar fields land in fixed ranges when the telemetry bands are within
/// the 0-100 convention: glow 0.3-1.5, speed 20-120, halo spread 0.8-2.5,
/// erraticness 0.1-1.0.
#[derive(Clone, PartialEq, Debug)]
pub struct OrbParameters {
    /// Background gradient stops, 3-4 entries, first entry is primary
    pub background_colors: Vec<Rgb>,
    /// Tint of the core glow and halo rings
    pub glow_color: Rgb,
    /// Tint of the particle field
    pub particle_color: Rgb,
    /// Brightness multiplier for the core glow
    pub core_glow_intensity: f32,
    /// Animation speed for the orbiting layers
    pub speed: f32,
    /// Scale multiplier for the outer halo
    pub halo_spread: f32,
    /// Randomness of particle motion
    pub particle_erraticness: f32,
    /// Whether the particle field is drawn
    pub show_particles: bool,
    /// Whether the wavy blob layer is drawn
    pub show_wavy_blobs: bool,
}

impl Default for OrbParameters {
    fn default() -> Self {
        map(&AudioTelemetry::silence())
    }
}

impl OrbParameters {
    /// Recompute in place from fresh telemetry.
    pub fn update(&mut self, telemetry: &AudioTelemetry) {
        *self = map(telemetry);
    }
}

/// Map one telemetry record to the orb's visual parameters.
pub fn map(telemetry: &AudioTelemetry) -> OrbParameters {
    let state = ActivityState::classify(telemetry.input_active, telemetry.output_active);
    let input = telemetry.input.normalized();
    let output = telemetry.output.normalized();

    let effective = match state {
        ActivityState::Idle => IDLE_EFFECTIVE,
        ActivityState::Both => BandLevels::max(input, output),
        ActivityState::InputOnly => input,
        ActivityState::OutputOnly => output,
    };

    let core_glow_intensity = GLOW_BASE + effective.level * GLOW_GAIN;
    let speed = SPEED_BASE + effective.high * SPEED_GAIN;
    let halo_spread = HALO_BASE + effective.mean() * HALO_GAIN;
    let particle_erraticness =
        ERRATIC_BASE + effective.high * ERRATIC_HIGH_GAIN + effective.mid * ERRATIC_MID_GAIN;

    let show_particles = effective.low > PARTICLE_LOW_THRESHOLD || !state.is_idle();
    let show_wavy_blobs = effective.mid > BLOB_MID_THRESHOLD || !state.is_idle();

    // Colors follow the same state split, but the both-state glow is driven
    // by the raw level balance, not the effective tuple.
    let (background_colors, glow_color, particle_color) = match state {
        ActivityState::Idle => (IDLE_BACKGROUND.to_vec(), IDLE_GLOW, IDLE_PARTICLE),
        ActivityState::InputOnly => (INPUT_BACKGROUND.to_vec(), INPUT_GLOW, INPUT_PARTICLE),
        ActivityState::OutputOnly => (OUTPUT_BACKGROUND.to_vec(), OUTPUT_GLOW, OUTPUT_PARTICLE),
        ActivityState::Both => {
            let total = input.level + output.level;
            // Both levels exactly zero would divide by zero; call it balanced.
            let input_ratio = if total == 0.0 { 0.5 } else { input.level / total };
            let glow = BOTH_GLOW_INPUT_END.lerp(OUTPUT_GLOW, 1.0 - input_ratio);
            (BOTH_BACKGROUND.to_vec(), glow, BOTH_PARTICLE)
        }
    };

    OrbParameters {
        background_colors,
        glow_color,
        particle_color,
        core_glow_intensity,
        speed,
        halo_spread,
        particle_erraticness,
        show_particles,
        show_wavy_blobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, what: &str) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "{}: expected {}, got {}",
            what,
            expected,
            actual
        );
    }

    #[test]
    fn test_classify_covers_all_flag_combinations() {
        assert_eq!(ActivityState::classify(false, false), ActivityState::Idle);
        assert_eq!(ActivityState::classify(true, false), ActivityState::InputOnly);
        assert_eq!(ActivityState::classify(false, true), ActivityState::OutputOnly);
        assert_eq!(ActivityState::classify(true, true), ActivityState::Both);
    }

    #[test]
    fn test_idle_ignores_band_values() {
        // With both flags down, the numeric fields must not matter.
        let loud = AudioTelemetry {
            input_active: false,
            output_active: false,
            input: BandLevels::new(100.0, 100.0, 100.0, 100.0),
            output: BandLevels::new(37.0, 12.0, 99.0, 5.0),
        };
        assert_eq!(map(&loud), map(&AudioTelemetry::silence()));
        assert_eq!(map(&loud).background_colors, IDLE_BACKGROUND.to_vec());
        assert_eq!(map(&loud).glow_color, IDLE_GLOW);
        assert_eq!(map(&loud).particle_color, IDLE_PARTICLE);
    }

    #[test]
    fn test_idle_resting_pulse() {
        // Scenario: everything silent. The idle effective tuple
        // (0.2, 0.15, 0.2, 0.15) drives the scalars.
        let params = map(&AudioTelemetry::silence());
        assert_close(params.core_glow_intensity, 0.54, "core glow");
        assert_close(params.speed, 35.0, "speed");
        assert_close(params.halo_spread, 0.8 + 0.175 * 1.7, "halo spread");
        assert_close(params.particle_erraticness, 0.255, "erraticness");
        // Idle low is 0.15, under the 0.2 particle threshold; mid 0.2 keeps
        // the blobs on.
        assert!(!params.show_particles);
        assert!(params.show_wavy_blobs);
    }

    #[test]
    fn test_input_only_full_highs() {
        // Scenario: hot mic, all energy in level+high.
        let telemetry =
            AudioTelemetry::input_only(BandLevels::new(100.0, 100.0, 0.0, 0.0));
        let params = map(&telemetry);
        assert_close(params.core_glow_intensity, 1.5, "core glow");
        assert_close(params.speed, 120.0, "speed");
        assert_close(params.halo_spread, 0.8 + 0.5 * 1.7, "halo spread");
        assert_close(params.particle_erraticness, 0.6, "erraticness");
        assert_eq!(params.background_colors, INPUT_BACKGROUND.to_vec());
        assert_eq!(params.glow_color, INPUT_GLOW);
        assert_eq!(params.particle_color, INPUT_PARTICLE);
        // Active state forces both layers on even with low/mid at zero.
        assert!(params.show_particles);
        assert!(params.show_wavy_blobs);
    }

    #[test]
    fn test_output_only_uses_output_palette() {
        let telemetry =
            AudioTelemetry::output_only(BandLevels::new(50.0, 20.0, 30.0, 60.0));
        let params = map(&telemetry);
        assert_eq!(params.background_colors, OUTPUT_BACKGROUND.to_vec());
        assert_eq!(params.glow_color, OUTPUT_GLOW);
        assert_eq!(params.particle_color, OUTPUT_PARTICLE);
        assert_close(params.core_glow_intensity, 0.3 + 0.5 * 1.2, "core glow");
    }

    #[test]
    fn test_both_takes_elementwise_max() {
        let telemetry = AudioTelemetry::duplex(
            BandLevels::new(80.0, 10.0, 70.0, 0.0),
            BandLevels::new(20.0, 90.0, 30.0, 40.0),
        );
        let params = map(&telemetry);
        // effective = (0.8, 0.9, 0.7, 0.4)
        assert_close(params.core_glow_intensity, 0.3 + 0.8 * 1.2, "core glow");
        assert_close(params.speed, 20.0 + 0.9 * 100.0, "speed");
        assert_close(params.halo_spread, 0.8 + 0.7 * 1.7, "halo spread");
        assert_close(
            params.particle_erraticness,
            0.1 + 0.9 * 0.5 + 0.7 * 0.4,
            "erraticness",
        );
        assert_eq!(params.background_colors, BOTH_BACKGROUND.to_vec());
        assert_eq!(params.particle_color, BOTH_PARTICLE);
    }

    #[test]
    fn test_both_glow_balanced_when_silent() {
        // Scenario: duplex flags up but levels at zero. The ratio guard
        // lands exactly in the middle of the glow blend.
        let telemetry = AudioTelemetry::duplex(
            BandLevels::new(0.0, 0.0, 0.0, 0.0),
            BandLevels::new(0.0, 0.0, 0.0, 0.0),
        );
        let glow = map(&telemetry).glow_color;
        assert_close(glow.r, 0.65, "glow r");
        assert_close(glow.g, 0.6, "glow g");
        assert_close(glow.b, 0.825, "glow b");
    }

    #[test]
    fn test_both_glow_endpoints() {
        // All input: glow sits on the cyan-leaning endpoint.
        let input_heavy = AudioTelemetry::duplex(
            BandLevels::new(100.0, 0.0, 0.0, 0.0),
            BandLevels::new(0.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(map(&input_heavy).glow_color, BOTH_GLOW_INPUT_END);

        // All output: glow matches the output-only glow.
        let output_heavy = AudioTelemetry::duplex(
            BandLevels::new(0.0, 0.0, 0.0, 0.0),
            BandLevels::new(100.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(map(&output_heavy).glow_color, OUTPUT_GLOW);
    }

    #[test]
    fn test_both_glow_equal_levels_is_midpoint() {
        let telemetry = AudioTelemetry::duplex(
            BandLevels::new(60.0, 0.0, 0.0, 0.0),
            BandLevels::new(60.0, 0.0, 0.0, 0.0),
        );
        let glow = map(&telemetry).glow_color;
        let mid = BOTH_GLOW_INPUT_END.lerp(OUTPUT_GLOW, 0.5);
        assert_close(glow.r, mid.r, "glow r");
        assert_close(glow.g, mid.g, "glow g");
        assert_close(glow.b, mid.b, "glow b");
    }

    #[test]
    fn test_scalar_ranges_at_band_extremes() {
        // Sample every corner of the band cube at {0, 100} for each active
        // state; the affine maps must stay inside their documented ranges.
        for bits in 0..16u32 {
            let pick = |bit: u32| if bits & (1 << bit) != 0 { 100.0 } else { 0.0 };
            let bands = BandLevels::new(pick(0), pick(1), pick(2), pick(3));
            let cases = [
                AudioTelemetry::input_only(bands),
                AudioTelemetry::output_only(bands),
                AudioTelemetry::duplex(bands, bands),
            ];
            // Tiny margin for f32 rounding in the affine sums
            let within = |v: f32, lo: f32, hi: f32| v >= lo - 1e-5 && v <= hi + 1e-5;
            for telemetry in cases {
                let params = map(&telemetry);
                assert!(
                    within(params.core_glow_intensity, 0.3, 1.5),
                    "core glow out of range: {}",
                    params.core_glow_intensity
                );
                assert!(
                    within(params.speed, 20.0, 120.0),
                    "speed out of range: {}",
                    params.speed
                );
                assert!(
                    within(params.halo_spread, 0.8, 2.5),
                    "halo spread out of range: {}",
                    params.halo_spread
                );
                assert!(
                    within(params.particle_erraticness, 0.1, 1.0),
                    "erraticness out of range: {}",
                    params.particle_erraticness
                );
            }
        }
    }

    #[test]
    fn test_map_is_deterministic() {
        let telemetry = AudioTelemetry::duplex(
            BandLevels::new(33.3, 12.5, 76.2, 4.0),
            BandLevels::new(90.1, 55.5, 0.2, 61.7),
        );
        assert_eq!(map(&telemetry), map(&telemetry));
    }

    #[test]
    fn test_update_in_place_matches_map() {
        let telemetry =
            AudioTelemetry::input_only(BandLevels::new(42.0, 17.0, 68.0, 91.0));
        let mut params = OrbParameters::default();
        params.update(&telemetry);
        assert_eq!(params, map(&telemetry));
    }

    #[test]
    fn test_particle_toggle_threshold() {
        // Idle never reaches the low threshold, so the toggle hinges on the
        // activity flags alone once any direction is live.
        let quiet_input =
            AudioTelemetry::input_only(BandLevels::new(0.0, 0.0, 0.0, 0.0));
        assert!(map(&quiet_input).show_particles);
        assert!(map(&quiet_input).show_wavy_blobs);
        assert!(!map(&AudioTelemetry::silence()).show_particles);
    }
}
