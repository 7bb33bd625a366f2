//! Audio telemetry delivered by the upstream analysis pipeline.
//!
//! The orb does no capture or FFT of its own: each update it receives two
//! activity flags plus level/high/mid/low band values for the input
//! (microphone) and output (playback) directions, conventionally 0-100.

use serde::{Deserialize, Serialize};

/// One direction's level plus three frequency bands, raw scale 0-100.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct BandLevels {
    /// Overall signal level
    pub level: f32,
    /// High-frequency band energy
    pub high: f32,
    /// Mid-frequency band energy
    pub mid: f32,
    /// Low-frequency band energy
    pub low: f32,
}

impl BandLevels {
    pub const fn new(level: f32, high: f32, mid: f32, low: f32) -> Self {
        Self {
            level,
            high,
            mid,
            low,
        }
    }

    /// Scale from the raw 0-100 convention down to 0-1.
    ///
    /// Out-of-range inputs are passed through unclamped; the caller owns
    /// range conformance.
    pub fn normalized(&self) -> Self {
        Self {
            level: self.level / 100.0,
            high: self.high / 100.0,
            mid: self.mid / 100.0,
            low: self.low / 100.0,
        }
    }

    /// Elementwise maximum of two band sets.
    pub fn max(a: Self, b: Self) -> Self {
        Self {
            level: a.level.max(b.level),
            high: a.high.max(b.high),
            mid: a.mid.max(b.mid),
            low: a.low.max(b.low),
        }
    }

    /// Mean of the four fields.
    pub fn mean(&self) -> f32 {
        (self.level + self.high + self.mid + self.low) / 4.0
    }
}

/// The full per-update telemetry record: two activity flags and the band
/// levels for each direction.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct AudioTelemetry {
    /// Whether the input (microphone) side is considered active
    pub input_active: bool,
    /// Whether the output (playback) side is considered active
    pub output_active: bool,
    /// Input-direction band levels (0-100)
    pub input: BandLevels,
    /// Output-direction band levels (0-100)
    pub output: BandLevels,
}

impl AudioTelemetry {
    /// Both directions inactive, all bands zero.
    pub fn silence() -> Self {
        Self::default()
    }

    /// Input-only activity with the given bands.
    pub fn input_only(input: BandLevels) -> Self {
        Self {
            input_active: true,
            output_active: false,
            input,
            output: BandLevels::default(),
        }
    }

    /// Output-only activity with the given bands.
    pub fn output_only(output: BandLevels) -> Self {
        Self {
            input_active: false,
            output_active: true,
            input: BandLevels::default(),
            output,
        }
    }

    /// Both directions active.
    pub fn duplex(input: BandLevels, output: BandLevels) -> Self {
        Self {
            input_active: true,
            output_active: true,
            input,
            output,
        }
    }

    /// Clamp every band field into 0-100. Opt-in; the mapper itself never
    /// clamps.
    pub fn clamped(mut self) -> Self {
        for bands in [&mut self.input, &mut self.output] {
            bands.level = bands.level.clamp(0.0, 100.0);
            bands.high = bands.high.clamp(0.0, 100.0);
            bands.mid = bands.mid.clamp(0.0, 100.0);
            bands.low = bands.low.clamp(0.0, 100.0);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_scales_to_unit_range() {
        let bands = BandLevels::new(100.0, 50.0, 25.0, 0.0);
        let n = bands.normalized();
        assert_eq!(n, BandLevels::new(1.0, 0.5, 0.25, 0.0));
    }

    #[test]
    fn test_normalized_does_not_clamp() {
        let n = BandLevels::new(150.0, -10.0, 0.0, 0.0).normalized();
        assert_eq!(n.level, 1.5);
        assert_eq!(n.high, -0.1);
    }

    #[test]
    fn test_elementwise_max() {
        let a = BandLevels::new(10.0, 80.0, 5.0, 40.0);
        let b = BandLevels::new(20.0, 30.0, 60.0, 40.0);
        assert_eq!(BandLevels::max(a, b), BandLevels::new(20.0, 80.0, 60.0, 40.0));
    }

    #[test]
    fn test_mean() {
        let bands = BandLevels::new(1.0, 1.0, 0.0, 0.0);
        assert_eq!(bands.mean(), 0.5);
    }

    #[test]
    fn test_clamped_bounds_both_directions() {
        let telemetry = AudioTelemetry::duplex(
            BandLevels::new(150.0, -5.0, 50.0, 100.0),
            BandLevels::new(-1.0, 200.0, 0.0, 99.0),
        )
        .clamped();
        assert_eq!(telemetry.input, BandLevels::new(100.0, 0.0, 50.0, 100.0));
        assert_eq!(telemetry.output, BandLevels::new(0.0, 100.0, 0.0, 99.0));
    }
}
