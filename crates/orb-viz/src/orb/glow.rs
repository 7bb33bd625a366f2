//! Core glow and outer halo.
//!
//! Blur-style falloff is faked with stacked translucent ellipses: a bright
//! core inside the orb plus halo rings reaching outward. `halo_spread`
//! scales how far the rings reach, `core_glow_intensity` how hard they
//! burn.

use nannou::prelude::*;
use orb_core::{OrbParameters, Rgb};

use super::{ease, orb_radius, tint, Layer};

const CORE_RINGS: usize = 8;
const HALO_RINGS: usize = 14;

pub struct Glow {
    color: Rgb,
    intensity: f32,
    spread: f32,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            color: Rgb::new(1.0, 0.98, 0.9),
            intensity: 0.54,
            spread: 1.0,
        }
    }
}

impl Layer for Glow {
    fn update(&mut self, params: &OrbParameters) {
        self.color = self.color.lerp(params.glow_color, 0.1);
        self.intensity = ease(self.intensity, params.core_glow_intensity, 0.5, 0.1);
        self.spread = ease(self.spread, params.halo_spread, 0.3, 0.08);
    }

    fn draw(&self, draw: &Draw, bounds: Rect) {
        let center = bounds.xy();
        let radius = orb_radius(bounds);

        // Halo rings, outermost first
        for i in (0..HALO_RINGS).rev() {
            let t = i as f32 / HALO_RINGS as f32;
            let r = radius * (1.0 + t * 0.55 * self.spread);
            let alpha = (1.0 - t) * 0.045 * self.intensity;
            draw.ellipse()
                .xy(center)
                .w_h(r * 2.0, r * 2.0)
                .color(tint(self.color, alpha));
        }

        // Bright core
        for i in 0..CORE_RINGS {
            let t = i as f32 / CORE_RINGS as f32;
            let r = radius * 0.45 * (1.0 - t * 0.8);
            let alpha = (0.06 + t * 0.1) * self.intensity;
            draw.ellipse()
                .xy(center)
                .w_h(r * 2.0, r * 2.0)
                .color(tint(self.color, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_core::{mapper, AudioTelemetry, BandLevels};

    #[test]
    fn test_glow_follows_parameters() {
        let mut glow = Glow::default();
        let params = mapper::map(&AudioTelemetry::input_only(BandLevels::new(
            100.0, 100.0, 100.0, 100.0,
        )));
        for _ in 0..300 {
            glow.update(&params);
        }
        assert!((glow.intensity - 1.5).abs() < 1e-2);
        assert!((glow.spread - 2.5).abs() < 1e-2);
        assert!((glow.color.r - 0.4).abs() < 1e-2);
    }
}
