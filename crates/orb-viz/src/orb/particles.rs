//! Orbiting particle field.
//!
//! Particles circle the orb on elliptical tracks. `speed` scales the
//! angular velocity, `particle_erraticness` the random jitter injected
//! into angle and radius each frame. The whole field fades in and out on
//! the `show_particles` toggle instead of popping.

use nannou::prelude::*;
use orb_core::{OrbParameters, Rgb};
use rand::Rng;

use super::{ease, orb_radius, tint, Layer};

/// Number of particles
const NUM_PARTICLES: usize = if cfg!(debug_assertions) { 120 } else { 320 };

#[derive(Clone)]
struct Particle {
    /// Orbital radius as a fraction of the orb radius
    radius: f32,
    /// Orbital angle
    angle: f32,
    /// Base angular speed
    speed: f32,
    /// Dot size
    size: f32,
    /// Phase offset for the radial wobble
    phase: f32,
}

pub struct Particles {
    particles: Vec<Particle>,
    color: Rgb,
    erraticness: f32,
    /// Smoothed speed parameter (20-120)
    speed: f32,
    /// Field opacity, eased towards the show_particles toggle
    visibility: f32,
    frame_count: u32,
}

impl Default for Particles {
    fn default() -> Self {
        let mut rng = rand::rng();

        let particles: Vec<Particle> = (0..NUM_PARTICLES)
            .map(|_| Particle {
                radius: rng.random_range(0.35..1.15),
                angle: rng.random_range(0.0..std::f32::consts::TAU),
                speed: rng.random_range(0.004..0.012),
                size: rng.random_range(1.5..4.0),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            })
            .collect();

        Self {
            particles,
            color: Rgb::new(1.0, 0.95, 0.8),
            erraticness: 0.25,
            speed: 20.0,
            visibility: 0.0,
            frame_count: 0,
        }
    }
}

impl Layer for Particles {
    fn update(&mut self, params: &OrbParameters) {
        self.frame_count = self.frame_count.wrapping_add(1);

        self.color = self.color.lerp(params.particle_color, 0.1);
        self.erraticness = ease(self.erraticness, params.particle_erraticness, 0.5, 0.1);
        self.speed = ease(self.speed, params.speed, 0.3, 0.08);

        let target_visibility = if params.show_particles { 1.0 } else { 0.0 };
        self.visibility = ease(self.visibility, target_visibility, 0.08, 0.05);

        let mut rng = rand::rng();
        let jitter = self.erraticness * 0.05;
        let angular = self.speed * 0.0006;

        for particle in &mut self.particles {
            particle.angle += particle.speed + angular + rng.random_range(-jitter..=jitter);
            if particle.angle > std::f32::consts::TAU {
                particle.angle -= std::f32::consts::TAU;
            }
            // Radial drift scales with erraticness, pulled back to the track
            let wobble =
                (self.frame_count as f32 * 0.02 + particle.phase).sin() * 0.04 * self.erraticness;
            particle.radius += wobble + rng.random_range(-jitter..=jitter) * 0.3;
            particle.radius = particle.radius.clamp(0.3, 1.25);
        }
    }

    fn draw(&self, draw: &Draw, bounds: Rect) {
        if self.visibility < 0.01 {
            return;
        }

        let center = bounds.xy();
        let radius = orb_radius(bounds);

        for particle in &self.particles {
            let r = particle.radius * radius;
            let x = center.x + r * particle.angle.cos();
            let y = center.y + r * particle.angle.sin();

            let alpha = (0.25 + 0.5 * (particle.phase.sin() * 0.5 + 0.5)) * self.visibility;

            // Soft glow behind each dot
            draw.ellipse()
                .x_y(x, y)
                .w_h(particle.size * 2.5, particle.size * 2.5)
                .color(tint(self.color, alpha * 0.3));
            draw.ellipse()
                .x_y(x, y)
                .w_h(particle.size, particle.size)
                .color(tint(self.color, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_core::mapper;
    use orb_core::AudioTelemetry;

    #[test]
    fn test_field_fades_out_when_hidden() {
        let mut field = Particles::default();
        // Idle silence keeps show_particles off
        let params = mapper::map(&AudioTelemetry::silence());
        assert!(!params.show_particles);
        field.visibility = 1.0;
        for _ in 0..300 {
            field.update(&params);
        }
        assert!(field.visibility < 0.01);
    }

    #[test]
    fn test_radius_stays_on_track() {
        let mut field = Particles::default();
        let mut params = mapper::map(&AudioTelemetry::silence());
        params.particle_erraticness = 1.0;
        params.show_particles = true;
        for _ in 0..600 {
            field.update(&params);
        }
        for particle in &field.particles {
            assert!((0.3..=1.25).contains(&particle.radius));
        }
    }
}
