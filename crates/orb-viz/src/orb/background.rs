//! Layered radial gradient forming the orb body.
//!
//! The mapper hands over 3-4 gradient stops with the primary color first;
//! that first entry sits at the center and the rest fan outward. Stops are
//! eased between palette switches so state changes wash over the orb
//! instead of snapping.

use nannou::prelude::*;
use orb_core::{OrbParameters, Rgb};

use super::{ease, orb_radius, tint, Layer};

/// Concentric rings used to fake the radial gradient
const RINGS: usize = 28;
/// Per-frame easing towards the target palette
const COLOR_EASE: f32 = 0.08;

pub struct Background {
    /// Smoothed gradient stops, primary first
    stops: Vec<Rgb>,
    /// Smoothed animation speed (drives the breathing cycle)
    speed: f32,
    frame_count: u32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            speed: 20.0,
            frame_count: 0,
        }
    }
}

/// Sample the gradient at `s` in 0-1 (0 = primary/center, 1 = rim).
fn sample(stops: &[Rgb], s: f32) -> Rgb {
    match stops.len() {
        0 => Rgb::new(0.0, 0.0, 0.0),
        1 => stops[0],
        n => {
            let x = s.clamp(0.0, 1.0) * (n - 1) as f32;
            let idx = (x.floor() as usize).min(n - 2);
            stops[idx].lerp(stops[idx + 1], x - idx as f32)
        }
    }
}

impl Layer for Background {
    fn update(&mut self, params: &OrbParameters) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.speed = ease(self.speed, params.speed, 0.3, 0.08);

        // Palette length can change between states (3 vs 4 stops)
        self.stops.resize(
            params.background_colors.len(),
            *params.background_colors.last().unwrap_or(&Rgb::default()),
        );
        for (stop, target) in self.stops.iter_mut().zip(&params.background_colors) {
            *stop = stop.lerp(*target, COLOR_EASE);
        }
    }

    fn draw(&self, draw: &Draw, bounds: Rect) {
        if self.stops.is_empty() {
            return;
        }

        let center = bounds.xy();
        // Gentle breathing scaled by animation speed
        let phase = self.frame_count as f32 * self.speed * 0.0005;
        let breathe = 1.0 + phase.sin() * 0.025;
        let radius = orb_radius(bounds) * breathe;

        // Outer rim first so inner rings paint over it
        for i in (0..RINGS).rev() {
            let s = i as f32 / (RINGS - 1) as f32;
            let color = sample(&self.stops, s);
            let r = radius * (0.08 + 0.92 * s);
            draw.ellipse()
                .xy(center)
                .w_h(r * 2.0, r * 2.0)
                .color(tint(color, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let stops = [
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
        ];
        assert_eq!(sample(&stops, 0.0), stops[0]);
        assert_eq!(sample(&stops, 1.0), stops[2]);
        assert_eq!(sample(&stops, 0.5), stops[1]);
    }

    #[test]
    fn test_update_tracks_palette_length() {
        let mut bg = Background::default();
        let mut params = OrbParameters::default();
        params.background_colors = vec![Rgb::new(1.0, 1.0, 1.0); 4];
        bg.update(&params);
        assert_eq!(bg.stops.len(), 4);

        params.background_colors.truncate(3);
        bg.update(&params);
        assert_eq!(bg.stops.len(), 3);
    }

    #[test]
    fn test_stops_converge_to_target() {
        let mut bg = Background::default();
        let mut params = OrbParameters::default();
        params.background_colors = vec![Rgb::new(0.2, 0.4, 0.6)];
        for _ in 0..400 {
            bg.update(&params);
        }
        let stop = bg.stops[0];
        assert!((stop.r - 0.2).abs() < 1e-3);
        assert!((stop.g - 0.4).abs() < 1e-3);
        assert!((stop.b - 0.6).abs() < 1e-3);
    }
}
