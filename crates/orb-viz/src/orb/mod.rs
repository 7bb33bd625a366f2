pub mod background;
pub mod blobs;
pub mod glow;
pub mod particles;

use nannou::prelude::*;
use orb_core::{OrbParameters, Rgb};

use crate::utils::Config;

pub use background::Background;
pub use blobs::WavyBlobs;
pub use glow::Glow;
pub use particles::Particles;

const NOTIFICATION_FRAMES: u32 = 180; // ~3 seconds at 60fps

/// Trait implemented by each drawable layer of the orb
pub trait Layer {
    /// Absorb a fresh parameter snapshot (smoothing happens here)
    fn update(&mut self, params: &OrbParameters);

    /// Draw the layer
    fn draw(&self, draw: &Draw, bounds: Rect);
}

/// Orb radius for the given window bounds
pub fn orb_radius(bounds: Rect) -> f32 {
    bounds.w().min(bounds.h()) * 0.28
}

/// Convert a core color to a nannou color with alpha
pub fn tint(color: Rgb, alpha: f32) -> Srgba<u8> {
    srgba(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        (alpha.min(1.0) * 255.0) as u8,
    )
}

/// One smoothing step with fast attack and slower decay, the same shape the
/// band smoothing in an analyzer would use.
pub fn ease(current: f32, target: f32, attack: f32, decay: f32) -> f32 {
    if target > current {
        current * (1.0 - attack) + target * attack
    } else {
        current * (1.0 - decay) + target * decay
    }
}

/// Composites the orb layers and owns the static toggles.
///
/// Layer order, back to front: shadow, background gradient, wavy blobs,
/// glow + halo, particles.
pub struct OrbRenderer {
    background: Background,
    blobs: WavyBlobs,
    glow: Glow,
    particles: Particles,

    show_background: bool,
    show_glow_effects: bool,
    show_shadow: bool,

    notification_text: Option<String>,
    notification_frames: u32,
}

impl OrbRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            background: Background::default(),
            blobs: WavyBlobs::default(),
            glow: Glow::default(),
            particles: Particles::default(),
            show_background: config.show_background(),
            show_glow_effects: config.show_glow_effects(),
            show_shadow: config.show_shadow(),
            notification_text: None,
            notification_frames: 0,
        }
    }

    /// Shows a notification message for 3 seconds
    pub fn show_notification(&mut self, text: String) {
        self.notification_text = Some(text);
        self.notification_frames = NOTIFICATION_FRAMES;
    }

    pub fn toggle_background(&mut self) -> bool {
        self.show_background = !self.show_background;
        self.show_background
    }

    pub fn toggle_glow_effects(&mut self) -> bool {
        self.show_glow_effects = !self.show_glow_effects;
        self.show_glow_effects
    }

    pub fn toggle_shadow(&mut self) -> bool {
        self.show_shadow = !self.show_shadow;
        self.show_shadow
    }

    pub fn update(&mut self, params: &OrbParameters) {
        if self.notification_frames > 0 {
            self.notification_frames -= 1;
            if self.notification_frames == 0 {
                self.notification_text = None;
            }
        }

        self.background.update(params);
        self.blobs.update(params);
        self.glow.update(params);
        self.particles.update(params);
    }

    pub fn draw(&self, draw: &Draw, bounds: Rect) {
        draw.background().color(BLACK);

        let center = bounds.xy();
        let radius = orb_radius(bounds);

        if self.show_shadow {
            // Soft drop shadow slightly below the orb
            for i in 0..6 {
                let t = i as f32 / 6.0;
                draw.ellipse()
                    .x_y(center.x, center.y - radius * 0.12)
                    .w_h(radius * (2.2 - t * 0.3), radius * (2.2 - t * 0.3))
                    .color(rgba(0.0, 0.0, 0.0, 0.12 * (1.0 - t)));
            }
        }

        if self.show_background {
            self.background.draw(draw, bounds);
        }
        self.blobs.draw(draw, bounds);
        if self.show_glow_effects {
            self.glow.draw(draw, bounds);
        }
        self.particles.draw(draw, bounds);

        // Notification text at middle top
        if let Some(ref text) = self.notification_text {
            let alpha = (self.notification_frames as f32 / NOTIFICATION_FRAMES as f32).min(1.0);
            draw.text(text)
                .x_y(0.0, bounds.top() - 30.0)
                .color(rgba(1.0, 1.0, 1.0, alpha))
                .font_size(24);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_moves_towards_target() {
        let up = ease(0.0, 1.0, 0.7, 0.15);
        assert!(up > 0.0 && up < 1.0);
        let down = ease(1.0, 0.0, 0.7, 0.15);
        assert!(down < 1.0 && down > 0.0);
        // Attack is faster than decay
        assert!(up > 1.0 - down);
    }

    #[test]
    fn test_toggles_flip() {
        let mut orb = OrbRenderer::new(&Config::default());
        assert!(!orb.toggle_shadow());
        assert!(orb.toggle_shadow());
    }
}
