//! Seeded simulation module
//!
//! All gameplay logic lives here:
//! - Motion in units per frame (one `tick` per display refresh)
//! - Seeded RNG only, owned by the world
//! - Stable iteration order (spawn/fire order), removals by entity ID
//! - Drawing goes through the `Surface` trait only

pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_touch, enemy_hits_player, projectile_hits_enemy};
pub use effects::{spawn_burst, update_particles};
pub use spawn::{SpawnController, spawn_enemy};
pub use state::{Enemy, GameState, Particle, Player, Projectile};
pub use tick::{GameEvent, TickOutcome, tick};
