//! Timed enemy spawning
//!
//! Spawning runs on wall-clock time (one enemy per `SPAWN_INTERVAL_MS`), while
//! everything else advances per frame.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState};
use crate::consts::*;
use crate::renderer::Color;
use crate::settings::SpawnEdges;
use crate::unit_vector;

/// Repeating spawn timer, armed only while a run is live
#[derive(Debug, Clone)]
pub struct SpawnController {
    interval_ms: f64,
    /// Time accumulated toward the next spawn
    elapsed_ms: f64,
    active: bool,
}

impl Default for SpawnController {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MS)
    }
}

impl SpawnController {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            elapsed_ms: 0.0,
            active: false,
        }
    }

    /// Arm the timer; the first spawn comes one full interval later
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed_ms = 0.0;
    }

    /// Disarm and forget any partial interval
    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed_ms = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt_ms` of wall time; returns how many spawns are due
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.active || !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms.min(MAX_FRAME_GAP_MS);

        let mut due = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            due += 1;
        }
        due
    }
}

/// Spawn one enemy just outside a viewport edge, drifting toward the center
pub fn spawn_enemy(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let viewport = state.viewport;
    let rng = &mut state.rng;

    let radius = rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);

    let left_or_right = match state.spawn_edges {
        SpawnEdges::AllEdges => rng.random_bool(0.5),
        SpawnEdges::TopBottomOnly => false,
    };
    let pos = if left_or_right {
        let x = if rng.random_bool(0.5) {
            -radius
        } else {
            viewport.width + radius
        };
        Vec2::new(x, rng.random::<f32>() * viewport.height)
    } else {
        let y = if rng.random_bool(0.5) {
            -radius
        } else {
            viewport.height + radius
        };
        Vec2::new(rng.random::<f32>() * viewport.width, y)
    };

    let hue: f32 = rng.random_range(0.0..360.0);
    let speed: f32 = rng.random_range(0.0..ENEMY_MAX_SPEED);
    let vel = unit_vector(pos, viewport.center(), speed);

    log::debug!(
        "Spawned enemy {} at ({:.0}, {:.0}) r={:.1} speed={:.3}",
        id,
        pos.x,
        pos.y,
        radius,
        speed
    );

    state.enemies.push(Enemy {
        id,
        pos,
        vel,
        radius,
        color: Color::hsl(hue, ENEMY_SATURATION, ENEMY_LIGHTNESS),
    });
    id
}
