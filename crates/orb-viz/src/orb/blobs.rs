//! Wavy blobs drifting inside the orb.
//!
//! Stand-in for an animated mesh gradient: a few large translucent blobs
//! wander the orb interior on sin-noise paths, each tinted from one of the
//! background gradient stops. Toggled by `show_wavy_blobs` with a fade.

use nannou::prelude::*;
use orb_core::{OrbParameters, Rgb};

use super::{ease, orb_radius, tint, Layer};

const NUM_BLOBS: usize = 4;

#[derive(Clone)]
struct Blob {
    /// Position as a fraction of the orb radius
    x: f32,
    y: f32,
    /// Radius fraction
    radius: f32,
    target_radius: f32,
    /// Noise phase so blobs decorrelate
    phase: f32,
}

pub struct WavyBlobs {
    blobs: Vec<Blob>,
    colors: Vec<Rgb>,
    speed: f32,
    visibility: f32,
    frame_count: u32,
}

impl Default for WavyBlobs {
    fn default() -> Self {
        let blobs = (0..NUM_BLOBS)
            .map(|i| {
                let angle = i as f32 / NUM_BLOBS as f32 * std::f32::consts::TAU;
                Blob {
                    x: angle.cos() * 0.4,
                    y: angle.sin() * 0.4,
                    radius: 0.35,
                    target_radius: 0.35,
                    phase: i as f32 * 1.7,
                }
            })
            .collect();

        Self {
            blobs,
            colors: Vec::new(),
            speed: 20.0,
            visibility: 0.0,
            frame_count: 0,
        }
    }
}

/// Cheap 1D sin noise, matches the drift feel of a fluid sim without one
fn noise(t: f32, phase: f32) -> f32 {
    ((t + phase).sin() * (t * 0.7 + phase * 1.3).cos() + 1.0) * 0.5
}

impl Layer for WavyBlobs {
    fn update(&mut self, params: &OrbParameters) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.speed = ease(self.speed, params.speed, 0.3, 0.08);

        let target_visibility = if params.show_wavy_blobs { 1.0 } else { 0.0 };
        self.visibility = ease(self.visibility, target_visibility, 0.06, 0.04);

        // Blob tints follow the background palette
        self.colors.resize(
            params.background_colors.len(),
            *params.background_colors.last().unwrap_or(&Rgb::default()),
        );
        for (color, target) in self.colors.iter_mut().zip(&params.background_colors) {
            *color = color.lerp(*target, 0.08);
        }

        let t = self.frame_count as f32 * (0.004 + self.speed * 0.00008);
        for blob in &mut self.blobs {
            // Wander on decorrelated noise paths, kept inside the orb
            blob.x = (noise(t, blob.phase) - 0.5) * 1.1;
            blob.y = (noise(t, blob.phase + 4.2) - 0.5) * 1.1;

            blob.target_radius = 0.3 + noise(t * 0.6, blob.phase + 9.1) * 0.25;
            blob.radius = blob.radius * 0.92 + blob.target_radius * 0.08;
        }
    }

    fn draw(&self, draw: &Draw, bounds: Rect) {
        if self.visibility < 0.01 || self.colors.is_empty() {
            return;
        }

        let center = bounds.xy();
        let radius = orb_radius(bounds);

        for (i, blob) in self.blobs.iter().enumerate() {
            let color = self.colors[i % self.colors.len()];
            let x = center.x + blob.x * radius;
            let y = center.y + blob.y * radius;
            let r = blob.radius * radius;

            // Two stacked ellipses give a soft edge
            draw.ellipse()
                .x_y(x, y)
                .w_h(r * 2.4, r * 2.0)
                .color(tint(color, 0.10 * self.visibility));
            draw.ellipse()
                .x_y(x, y)
                .w_h(r * 1.6, r * 1.4)
                .color(tint(color, 0.16 * self.visibility));
        }
    }
}
