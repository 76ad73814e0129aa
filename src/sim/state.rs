//! Game state and core simulation types
//!
//! Everything one run needs lives in [`GameState`]; nothing is global, so any
//! number of worlds can exist side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::color::colors;
use crate::renderer::{Color, Surface, Viewport};
use crate::settings::SpawnEdges;
use crate::unit_vector;

/// The player's dot (never moves)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Player {
    /// Fresh player centered in the viewport
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            radius: PLAYER_RADIUS,
            color: colors::PLAYER,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.draw_circle(self.pos, self.radius, &self.color, 1.0);
    }
}

/// A shot fired from the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Projectile {
    /// Draw, then advance one frame
    pub fn update(&mut self, surface: &mut impl Surface) {
        surface.draw_circle(self.pos, self.radius, &self.color, 1.0);
        self.pos += self.vel;
    }
}

/// A circle drifting toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shrinks by `ENEMY_SHRINK_STEP` per absorbed hit
    pub radius: f32,
    pub color: Color,
}

impl Enemy {
    /// Draw, then advance one frame
    pub fn update(&mut self, surface: &mut impl Surface) {
        surface.draw_circle(self.pos, self.radius, &self.color, 1.0);
        self.pos += self.vel;
    }

    /// Whether a hit shrinks this enemy instead of destroying it
    pub fn absorbs_hit(&self) -> bool {
        self.radius - ENEMY_SHRINK_STEP > ENEMY_MIN_SURVIVING_RADIUS
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// 1.0 on spawn, minus `PARTICLE_FADE_PER_FRAME` each frame
    pub alpha: f32,
}

impl Particle {
    /// Draw at the current alpha, then slow, move and fade
    pub fn update(&mut self, surface: &mut impl Surface) {
        surface.draw_circle(self.pos, self.radius, &self.color, self.alpha);
        self.vel *= PARTICLE_FRICTION;
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE_PER_FRAME;
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Complete world state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator seeded from `seed`; every random draw of the run comes from it
    pub rng: Pcg32,
    /// Viewport captured at start (resizes mid-run are ignored)
    pub viewport: Viewport,
    /// Enemy spawn edge policy
    pub spawn_edges: SpawnEdges,
    /// Enemies destroyed this run
    pub score: u64,
    /// Frames simulated this run
    pub time_ticks: u64,
    /// The player
    pub player: Player,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an empty world with a centered player
    pub fn new(seed: u64, viewport: Viewport, spawn_edges: SpawnEdges) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            spawn_edges,
            score: 0,
            time_ticks: 0,
            player: Player::centered(viewport),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire a projectile from the player toward `target`
    ///
    /// Aiming at the player's own center yields a stationary shot.
    pub fn fire_projectile(&mut self, target: Vec2) -> u32 {
        let id = self.next_entity_id();
        let vel = unit_vector(self.player.pos, target, PROJECTILE_SPEED);
        self.projectiles.push(Projectile {
            id,
            pos: self.player.pos,
            vel,
            radius: PROJECTILE_RADIUS,
            color: colors::PROJECTILE,
        });
        id
    }

    /// Entities currently alive (projectiles + enemies + particles)
    pub fn entity_count(&self) -> usize {
        self.projectiles.len() + self.enemies.len() + self.particles.len()
    }
}
