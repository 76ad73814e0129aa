//! Dot Defender - hold the center against drifting circles
//!
//! Core modules:
//! - `sim`: Seeded simulation (entities, spawning, collisions, effects, frame tick)
//! - `session`: Start/aim/end lifecycle and the UI callbacks
//! - `renderer`: Abstract drawing surface plus canvas and recording backends
//! - `settings`: Player-facing presentation/behavior switches

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{GameSession, RecordingObserver, SessionObserver, SessionPhase};
pub use settings::{Settings, SpawnEdges};

use glam::Vec2;

/// Game configuration constants
///
/// All speeds are in units per frame; only enemy spawning runs on wall time.
pub mod consts {
    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;

    /// Enemy radius range [min, max)
    pub const ENEMY_MIN_RADIUS: f32 = 4.0;
    pub const ENEMY_MAX_RADIUS: f32 = 30.0;
    /// Enemy drift speed range [0, max)
    pub const ENEMY_MAX_SPEED: f32 = 0.35;
    /// Radius lost per projectile hit on a large enemy
    pub const ENEMY_SHRINK_STEP: f32 = 10.0;
    /// Enemies that would shrink to this radius or below are destroyed instead
    pub const ENEMY_MIN_SURVIVING_RADIUS: f32 = 5.0;
    /// Enemy color saturation/lightness (percent)
    pub const ENEMY_SATURATION: f32 = 50.0;
    pub const ENEMY_LIGHTNESS: f32 = 50.0;

    /// Wall-clock period between enemy spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Largest frame gap fed into the spawn timer (background tabs, debugger pauses)
    pub const MAX_FRAME_GAP_MS: f64 = 1000.0;

    /// Particle burst settings
    pub const PARTICLES_PER_HIT: usize = 16;
    pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
    pub const PARTICLE_MAX_SPEED: f32 = 8.0;
    pub const PARTICLE_FRICTION: f32 = 0.99;
    pub const PARTICLE_FADE_PER_FRAME: f32 = 0.01;

    /// Collision tolerance: `distance - r1 - r2 < this` counts as touching
    pub const COLLISION_TOLERANCE: f32 = 1.0;

    /// Alpha of the black overlay drawn each frame (motion trails)
    pub const DEFAULT_FADE_ALPHA: f32 = 0.1;
}

/// Direction from `start` to `end`, normalized and scaled by `multiplier`.
///
/// Coincident points have no direction; the result is `Vec2::ZERO` rather than NaN.
#[inline]
pub fn unit_vector(start: Vec2, end: Vec2, multiplier: f32) -> Vec2 {
    (end - start).normalize_or_zero() * multiplier
}

/// Center of a `width` x `height` viewport
#[inline]
pub fn viewport_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_vector_axis() {
        let v = unit_vector(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_unit_vector_degenerate_is_zero() {
        let v = unit_vector(Vec2::ZERO, Vec2::ZERO, 1.0);
        assert_eq!(v, Vec2::ZERO);

        let v = unit_vector(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0), 4.0);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_unit_vector_multiplier() {
        let v = unit_vector(Vec2::new(1.0, 1.0), Vec2::new(1.0, -9.0), 4.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 4.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_unit_vector_length_matches_multiplier(
            sx in -1000.0f32..1000.0,
            sy in -1000.0f32..1000.0,
            dx in -1000.0f32..1000.0,
            dy in -1000.0f32..1000.0,
            m in 0.0f32..10.0,
        ) {
            let start = Vec2::new(sx, sy);
            let end = start + Vec2::new(dx, dy);
            prop_assume!(Vec2::new(dx, dy).length() > 1.0);
            let v = unit_vector(start, end, m);
            prop_assert!((v.length() - m).abs() < 1e-3 * m.max(1.0));
        }
    }
}
