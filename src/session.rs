//! Game session lifecycle
//!
//! A [`GameSession`] owns one world, its spawn timer and the UI observer. The
//! host drives it with three calls:
//! - [`GameSession::start`] when the player asks for a (new) game
//! - [`GameSession::on_aim_click`] for every click/tap
//! - [`GameSession::frame`] once per display refresh, rescheduling only while
//!   it returns `true`

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Surface, Viewport};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SpawnController, TickOutcome, spawn_enemy, tick};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first start request
    NotStarted,
    /// Frames are being simulated
    Running,
    /// An enemy reached the player
    Ended,
}

/// UI hooks fired by the session
pub trait SessionObserver {
    /// Score went up (fires once per destroyed enemy)
    fn on_score_changed(&mut self, _score: u64) {}

    /// Run is over (fires exactly once per run)
    fn on_game_over(&mut self, _final_score: u64) {}
}

/// Observer that ignores everything
impl SessionObserver for () {}

/// Observer that keeps every callback, for tests and the headless demo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    pub scores: Vec<u64>,
    pub game_overs: Vec<u64>,
}

impl SessionObserver for RecordingObserver {
    fn on_score_changed(&mut self, score: u64) {
        self.scores.push(score);
    }

    fn on_game_over(&mut self, final_score: u64) {
        self.game_overs.push(final_score);
    }
}

/// One player's game: world state, lifecycle and callbacks
pub struct GameSession<O: SessionObserver> {
    state: GameState,
    phase: SessionPhase,
    spawner: SpawnController,
    settings: Settings,
    observer: O,
    /// Timestamp of the previous frame (None right after start)
    last_frame_ms: Option<f64>,
    /// Runs started so far
    runs: u64,
    events: Vec<GameEvent>,
}

impl<O: SessionObserver> GameSession<O> {
    pub fn new(settings: Settings, viewport: Viewport, observer: O) -> Self {
        let seed = settings.seed.unwrap_or(0);
        Self {
            state: GameState::new(seed, viewport, settings.spawn_edges),
            phase: SessionPhase::NotStarted,
            spawner: SpawnController::default(),
            settings,
            observer,
            last_frame_ms: None,
            runs: 0,
            events: Vec::new(),
        }
    }

    /// Begin a fresh run from any phase
    ///
    /// `seed` is used when the settings do not pin one.
    pub fn start(&mut self, viewport: Viewport, seed: u64) {
        let seed = self.settings.seed.unwrap_or(seed);
        self.runs += 1;
        self.state = GameState::new(seed, viewport, self.settings.spawn_edges);
        self.spawner.start();
        self.last_frame_ms = None;
        self.events.clear();
        self.phase = SessionPhase::Running;
        log::info!(
            "Run {} started (seed {}, viewport {}x{})",
            self.runs,
            seed,
            viewport.width,
            viewport.height
        );
    }

    /// Fire toward a click; ignored unless running
    pub fn on_aim_click(&mut self, x: f32, y: f32) {
        if self.phase != SessionPhase::Running {
            log::debug!("Ignoring aim click while {:?}", self.phase);
            return;
        }
        self.state.fire_projectile(Vec2::new(x, y));
    }

    /// Run one frame at timestamp `now_ms`
    ///
    /// Returns whether the host should schedule another frame.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        let dt_ms = match self.last_frame_ms {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        for _ in 0..self.spawner.advance(dt_ms) {
            spawn_enemy(&mut self.state);
        }

        let fade = self.settings.effective_fade_alpha();
        let outcome = tick(&mut self.state, surface, fade, &mut self.events);

        for event in self.events.drain(..) {
            match event {
                GameEvent::ScoreChanged(score) => self.observer.on_score_changed(score),
            }
        }

        if let TickOutcome::PlayerHit { .. } = outcome {
            self.end();
        }

        self.phase == SessionPhase::Running
    }

    /// End the run: stop spawning and report the final score (once)
    pub fn end(&mut self) {
        if self.phase != SessionPhase::Running {
            return;
        }
        self.phase = SessionPhase::Ended;
        self.spawner.stop();
        debug_assert!(!self.spawner.is_active());
        self.last_frame_ms = None;
        log::info!(
            "Game over after {} frames - score {}",
            self.state.time_ticks,
            self.state.score
        );
        self.observer.on_game_over(self.state.score);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable world access (setting up scenarios in tests and demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}
