//! Per-frame simulation tick
//!
//! Advances and draws the whole world once. Motion is in units per frame, so
//! the host calls [`tick`] exactly once per display refresh.
//!
//! Removals found while scanning a collection are buffered by entity id and
//! applied once that collection's scan has finished.

use super::collision::{enemy_hits_player, projectile_hits_enemy};
use super::effects::{spawn_burst, update_particles};
use super::state::GameState;
use crate::consts::ENEMY_SHRINK_STEP;
use crate::renderer::Surface;

/// Notifications produced by a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy was destroyed; carries the new score
    ScoreChanged(u64),
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// An enemy touched the player this frame; the run is over
    PlayerHit { final_score: u64 },
}

/// Advance the world by one frame and draw it
///
/// Order: fade, player, projectiles (+ out-of-bounds pruning), enemies (+
/// player and projectile collisions), particles. Score changes are appended
/// to `events`; a player hit is reported only through the returned outcome.
pub fn tick(
    state: &mut GameState,
    surface: &mut impl Surface,
    fade_alpha: f32,
    events: &mut Vec<GameEvent>,
) -> TickOutcome {
    state.time_ticks += 1;

    surface.clear_with_fade(fade_alpha);
    state.player.draw(surface);

    // --- PROJECTILES ---
    let viewport = state.viewport;
    let mut spent_projectiles: Vec<u32> = Vec::new();
    for projectile in &mut state.projectiles {
        projectile.update(surface);
        if viewport.circle_outside(projectile.pos, projectile.radius) {
            spent_projectiles.push(projectile.id);
        }
    }
    if !spent_projectiles.is_empty() {
        state
            .projectiles
            .retain(|p| !spent_projectiles.contains(&p.id));
        spent_projectiles.clear();
    }

    // --- ENEMIES ---
    let mut outcome = TickOutcome::Continue;
    let mut dead_enemies: Vec<u32> = Vec::new();

    for enemy in &mut state.enemies {
        enemy.update(surface);

        // Once the player is down the score is frozen; enemies just drift
        if outcome != TickOutcome::Continue {
            continue;
        }

        if enemy_hits_player(enemy, &state.player) {
            log::info!(
                "Enemy {} reached the player - final score {}",
                enemy.id,
                state.score
            );
            outcome = TickOutcome::PlayerHit {
                final_score: state.score,
            };
            continue;
        }

        for projectile in &state.projectiles {
            // A projectile is consumed by its first hit
            if spent_projectiles.contains(&projectile.id) {
                continue;
            }
            if !projectile_hits_enemy(projectile, enemy) {
                continue;
            }

            spawn_burst(
                &mut state.particles,
                &mut state.rng,
                projectile.pos,
                enemy.color,
            );
            spent_projectiles.push(projectile.id);

            if enemy.absorbs_hit() {
                enemy.radius -= ENEMY_SHRINK_STEP;
                log::debug!("Enemy {} shrunk to r={:.1}", enemy.id, enemy.radius);
            } else {
                state.score += 1;
                dead_enemies.push(enemy.id);
                events.push(GameEvent::ScoreChanged(state.score));
                log::debug!("Enemy {} destroyed, score {}", enemy.id, state.score);
                // Destroyed enemies take no further hits
                break;
            }
        }
    }

    if !dead_enemies.is_empty() {
        state.enemies.retain(|e| !dead_enemies.contains(&e.id));
    }
    if !spent_projectiles.is_empty() {
        state
            .projectiles
            .retain(|p| !spent_projectiles.contains(&p.id));
    }

    // --- PARTICLES ---
    update_particles(&mut state.particles, surface);

    log::trace!(
        "tick {}: {} projectiles, {} enemies, {} particles",
        state.time_ticks,
        state.projectiles.len(),
        state.enemies.len(),
        state.particles.len()
    );

    outcome
}
