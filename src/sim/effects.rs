//! Hit particles
//!
//! Every projectile/enemy hit throws a burst of small particles in the enemy's
//! color. They slow down, fade out, and are dropped once fully transparent.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Particle;
use crate::consts::*;
use crate::renderer::{Color, Surface};

/// Spawn a burst of `PARTICLES_PER_HIT` particles at `pos`
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: Vec2, color: Color) {
    particles.reserve(PARTICLES_PER_HIT);
    for _ in 0..PARTICLES_PER_HIT {
        // Centered jitter with a random spread per axis
        let vx = (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * PARTICLE_MAX_SPEED);
        let vy = (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * PARTICLE_MAX_SPEED);
        particles.push(Particle {
            pos,
            vel: Vec2::new(vx, vy),
            radius: rng.random::<f32>() * PARTICLE_MAX_RADIUS,
            color,
            alpha: 1.0,
        });
    }
}

/// Drop faded particles and advance the rest (draw, friction, move, fade)
///
/// A particle is dropped the first frame it is seen with alpha <= 0, so it is
/// never drawn with a negative alpha.
pub fn update_particles(particles: &mut Vec<Particle>, surface: &mut impl Surface) {
    particles.retain_mut(|particle| {
        if particle.is_faded() {
            false
        } else {
            particle.update(surface);
            true
        }
    });
}
