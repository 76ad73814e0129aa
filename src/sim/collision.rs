//! Circle-vs-circle collision tests
//!
//! Every shape in the game is a circle, so a collision is just a center
//! distance compared against the summed radii (with a 1-unit tolerance).

use glam::Vec2;

use super::state::{Enemy, Player, Projectile};
use crate::consts::COLLISION_TOLERANCE;

/// Whether two circles touch: `distance - r1 - r2 < COLLISION_TOLERANCE`
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) - ra - rb < COLLISION_TOLERANCE
}

/// Enemy reached the player
#[inline]
pub fn enemy_hits_player(enemy: &Enemy, player: &Player) -> bool {
    circles_touch(player.pos, player.radius, enemy.pos, enemy.radius)
}

/// Projectile struck the enemy
#[inline]
pub fn projectile_hits_enemy(projectile: &Projectile, enemy: &Enemy) -> bool {
    circles_touch(projectile.pos, projectile.radius, enemy.pos, enemy.radius)
}
