//! Fixed palettes and mapping coefficients.
//!
//! Every literal the mapper uses lives here so the whole color/coefficient
//! design can be audited (and parity-tested) in one place. None of these
//! are derived at runtime.

use crate::color::Rgb;
use crate::telemetry::BandLevels;

/// Effective band tuple used while idle: a faint resting pulse.
pub const IDLE_EFFECTIVE: BandLevels = BandLevels::new(0.2, 0.15, 0.2, 0.15);

// Scalar parameter affine maps (applied to normalized 0-1 bands).
pub const GLOW_BASE: f32 = 0.3;
pub const GLOW_GAIN: f32 = 1.2;
pub const SPEED_BASE: f32 = 20.0;
pub const SPEED_GAIN: f32 = 100.0;
pub const HALO_BASE: f32 = 0.8;
pub const HALO_GAIN: f32 = 1.7;
pub const ERRATIC_BASE: f32 = 0.1;
pub const ERRATIC_HIGH_GAIN: f32 = 0.5;
pub const ERRATIC_MID_GAIN: f32 = 0.4;

// Toggle thresholds on the effective tuple.
pub const PARTICLE_LOW_THRESHOLD: f32 = 0.2;
pub const BLOB_MID_THRESHOLD: f32 = 0.1;

// Idle: warm dim violet, near-white warm glow.
pub const IDLE_BACKGROUND: [Rgb; 3] = [
    Rgb::new(0.45, 0.40, 0.75),
    Rgb::new(0.28, 0.26, 0.58),
    Rgb::new(0.14, 0.13, 0.34),
];
pub const IDLE_GLOW: Rgb = Rgb::new(1.0, 0.98, 0.9);
pub const IDLE_PARTICLE: Rgb = Rgb::new(1.0, 0.95, 0.8);

// Input (listening): cyan / blue / teal.
pub const INPUT_BACKGROUND: [Rgb; 3] = [
    Rgb::new(0.30, 0.85, 1.00),
    Rgb::new(0.18, 0.45, 0.95),
    Rgb::new(0.10, 0.60, 0.60),
];
pub const INPUT_GLOW: Rgb = Rgb::new(0.4, 0.9, 1.0);
pub const INPUT_PARTICLE: Rgb = Rgb::new(0.6, 0.95, 1.0);

// Output (speaking): pink / coral / orange.
pub const OUTPUT_BACKGROUND: [Rgb; 3] = [
    Rgb::new(1.00, 0.45, 0.70),
    Rgb::new(1.00, 0.55, 0.45),
    Rgb::new(1.00, 0.70, 0.30),
];
pub const OUTPUT_GLOW: Rgb = Rgb::new(1.0, 0.5, 0.7);
pub const OUTPUT_PARTICLE: Rgb = Rgb::new(1.0, 0.7, 0.8);

// Both directions live: a 4-stop blend spanning the input and output hues.
pub const BOTH_BACKGROUND: [Rgb; 4] = [
    Rgb::new(0.40, 0.80, 1.00),
    Rgb::new(0.65, 0.55, 0.95),
    Rgb::new(0.95, 0.50, 0.75),
    Rgb::new(1.00, 0.65, 0.50),
];
/// Cyan-leaning glow endpoint for the both state. The glow slides from
/// here towards `OUTPUT_GLOW` as output dominates the level balance.
pub const BOTH_GLOW_INPUT_END: Rgb = Rgb::new(0.3, 0.7, 0.95);
pub const BOTH_PARTICLE: Rgb = Rgb::new(1.0, 1.0, 1.0);
