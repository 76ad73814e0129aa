//! Dot Defender entry point
//!
//! Web: wires the canvas, buttons and clicks to a `GameSession`.
//! Native: plays a headless autopilot run and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, MouseEvent};

    use dot_defender::renderer::{CanvasSurface, Surface};
    use dot_defender::{GameSession, SessionObserver, Settings};

    /// Score counter and game-over modal
    struct DomHud {
        score_el: Option<Element>,
        modal_el: Option<HtmlElement>,
        big_score_el: Option<Element>,
    }

    impl DomHud {
        fn new() -> Self {
            let document = web_sys::window().and_then(|w| w.document());
            let find = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
            Self {
                score_el: find("scoreEl"),
                modal_el: find("modalEl").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
                big_score_el: find("bigScoreEl"),
            }
        }

        fn set_score(&self, score: u64) {
            if let Some(el) = &self.score_el {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        fn show_modal(&self, visible: bool) {
            if let Some(modal) = &self.modal_el {
                let display = if visible { "flex" } else { "none" };
                let _ = modal.style().set_property("display", display);
            }
        }
    }

    impl SessionObserver for DomHud {
        fn on_score_changed(&mut self, score: u64) {
            self.set_score(score);
        }

        fn on_game_over(&mut self, final_score: u64) {
            if let Some(el) = &self.big_score_el {
                el.set_text_content(Some(&final_score.to_string()));
            }
            self.show_modal(true);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession<DomHud>,
        surface: CanvasSurface,
        /// An animation frame is pending
        loop_scheduled: bool,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Dot Defender starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .query_selector("canvas")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No <canvas> element");
                return;
            }
        };

        let Some(mut surface) = CanvasSurface::new(canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        surface.resize(width as u32, height as u32);

        let settings = Settings::load();
        let session = GameSession::new(settings, surface.viewport(), DomHud::new());
        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            loop_scheduled: false,
        }));

        setup_start_button(game.clone());
        setup_aim_handler(game);

        log::info!("Dot Defender ready - press start");
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let Some(btn) = document.get_element_by_id("startGameBtn") else {
            log::error!("No #startGameBtn");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            let schedule = {
                let mut g = game.borrow_mut();
                let viewport = g.surface.viewport();
                g.session.start(viewport, seed);
                g.session.settings().save();
                g.session.observer().set_score(0);
                g.session.observer().show_modal(false);
                let schedule = !g.loop_scheduled;
                g.loop_scheduled = true;
                schedule
            };
            if schedule {
                request_animation_frame(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_aim_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            game.borrow_mut()
                .session
                .on_aim_click(event.client_x() as f32, event.client_y() as f32);
        });
        let _ =
            window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            let keep_going = g.session.frame(time, &mut g.surface);
            g.loop_scheduled = keep_going;
            keep_going
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dot Defender (native) starting...");
    log::info!("Native mode plays a headless autopilot run - use the wasm build to play");

    let mut settings = dot_defender::Settings::load();
    if let Ok(edges) = std::env::var("DOT_DEFENDER_SPAWN_EDGES") {
        match dot_defender::SpawnEdges::from_str(&edges) {
            Some(edges) => settings.spawn_edges = edges,
            None => log::warn!("Unknown spawn edge policy {:?}, keeping default", edges),
        }
    }

    log::info!("Spawn edges: {}", settings.spawn_edges.as_str());

    let report = headless::run(settings);
    println!(
        "\nAutopilot run: score {} after {} frames ({} circles drawn, {})",
        report.score,
        report.frames,
        report.circles_drawn,
        if report.game_over {
            "game over"
        } else {
            "time limit"
        }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dot_defender::renderer::{RecordingSurface, Surface, Viewport};
    use dot_defender::{GameSession, RecordingObserver, SessionPhase, Settings};

    /// Two minutes at 60 Hz
    const MAX_FRAMES: u64 = 60 * 120;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames between autopilot shots
    const FIRE_EVERY: u64 = 8;

    pub struct Report {
        pub score: u64,
        pub frames: u64,
        pub circles_drawn: u64,
        pub game_over: bool,
    }

    pub fn run(settings: Settings) -> Report {
        let mut surface = RecordingSurface::new(1280.0, 720.0);
        let viewport: Viewport = surface.viewport();
        let mut session = GameSession::new(settings, viewport, RecordingObserver::default());

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        session.start(viewport, seed);

        let mut frames = 0;
        while frames < MAX_FRAMES {
            if frames % FIRE_EVERY == 0 {
                // Shoot at whatever is closest to the player
                let player = session.state().player.pos;
                let target = session
                    .state()
                    .enemies
                    .iter()
                    .map(|e| e.pos)
                    .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));
                if let Some(target) = target {
                    session.on_aim_click(target.x, target.y);
                }
            }

            let keep_going = session.frame(frames as f64 * FRAME_MS, &mut surface);
            frames += 1;
            if !keep_going {
                break;
            }
        }

        let game_over = session.phase() == SessionPhase::Ended;
        if !game_over {
            session.end();
        }
        log::info!(
            "Score updates: {}, game over reports: {:?}",
            session.observer().scores.len(),
            session.observer().game_overs
        );

        Report {
            score: session.score(),
            frames,
            circles_drawn: surface.circles_drawn,
            game_over,
        }
    }
}
