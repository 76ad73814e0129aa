use dot_defender::renderer::{RecordingSurface, Viewport};
use dot_defender::sim::Enemy;
use dot_defender::{GameSession, RecordingObserver, SessionPhase, Settings, SpawnEdges};
use glam::Vec2;

const VP: Viewport = Viewport::new(1280.0, 720.0);
const FRAME_MS: f64 = 1000.0 / 60.0;

fn new_session(settings: Settings) -> GameSession<RecordingObserver> {
    GameSession::new(settings, VP, RecordingObserver::default())
}

/// Play frames `frames`, shooting at the nearest enemy every `fire_every` frames
///
/// Frame `i` is stamped `i * FRAME_MS`. Returns the number of frames played.
fn autopilot(
    session: &mut GameSession<RecordingObserver>,
    surface: &mut RecordingSurface,
    frames: std::ops::Range<u64>,
    fire_every: u64,
) -> u64 {
    let mut played = 0;
    for i in frames {
        if fire_every > 0 && i % fire_every == 0 {
            let player = session.state().player.pos;
            let target = session
                .state()
                .enemies
                .iter()
                .map(|e| e.pos)
                .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));
            if let Some(t) = target {
                session.on_aim_click(t.x, t.y);
            }
        }
        played += 1;
        if !session.frame(i as f64 * FRAME_MS, surface) {
            break;
        }
    }
    played
}

fn snapshot(enemies: &[Enemy]) -> Vec<(u32, Vec2, f32)> {
    enemies.iter().map(|e| (e.id, e.pos, e.radius)).collect()
}

#[test]
fn test_same_seed_same_run() {
    let mut a = new_session(Settings::default());
    let mut b = new_session(Settings::default());
    let mut sa = RecordingSurface::new(VP.width, VP.height);
    let mut sb = RecordingSurface::new(VP.width, VP.height);
    a.start(VP, 4242);
    b.start(VP, 4242);

    let fa = autopilot(&mut a, &mut sa, 0..1800, 6);
    let fb = autopilot(&mut b, &mut sb, 0..1800, 6);

    assert_eq!(fa, fb);
    assert_eq!(a.score(), b.score());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(snapshot(&a.state().enemies), snapshot(&b.state().enemies));
    assert_eq!(a.state().particles.len(), b.state().particles.len());
    assert_eq!(a.observer(), b.observer());
    assert_eq!(sa.circles_drawn, sb.circles_drawn);
}

#[test]
fn test_sessions_do_not_share_state() {
    let mut a = new_session(Settings::default());
    let mut b = new_session(Settings::default());
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    a.start(VP, 1);
    b.start(VP, 1);

    a.on_aim_click(0.0, 0.0);
    a.frame(0.0, &mut surface);

    assert_eq!(a.state().projectiles.len(), 1);
    assert!(b.state().projectiles.is_empty());
    assert_eq!(b.state().time_ticks, 0);
}

#[test]
fn test_idle_player_eventually_loses() {
    let settings = Settings {
        seed: Some(9),
        ..Settings::default()
    };
    let mut session = new_session(settings);
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    session.start(VP, 0);

    // Ten minutes without shooting
    autopilot(&mut session, &mut surface, 0..60 * 600, 0);

    assert_eq!(session.phase(), SessionPhase::Ended);
    assert_eq!(session.score(), 0);
    assert_eq!(session.observer().game_overs, vec![0]);
    assert!(session.observer().scores.is_empty());
}

#[test]
fn test_autopilot_scores_and_reports_each_point() {
    let mut session = new_session(Settings::default());
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    session.start(VP, 31337);

    autopilot(&mut session, &mut surface, 0..60 * 60, 4);

    let observer = session.observer();
    assert!(session.score() > 0, "autopilot never scored");
    let expected: Vec<u64> = (1..=session.score()).collect();
    assert_eq!(observer.scores, expected);
    if session.phase() == SessionPhase::Ended {
        assert_eq!(observer.game_overs, vec![session.score()]);
    } else {
        assert!(observer.game_overs.is_empty());
    }
}

#[test]
fn test_game_over_score_is_final() {
    let mut session = new_session(Settings::default());
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    session.start(VP, 77);
    // Defend for a while, then stop shooting and let the enemies through
    let played = autopilot(&mut session, &mut surface, 0..60 * 20, 4);
    autopilot(&mut session, &mut surface, played..60 * 600, 0);
    assert_eq!(session.phase(), SessionPhase::Ended);
    let final_score = session.score();

    // Clicks and frames after the end change nothing
    for i in 0..100 {
        session.on_aim_click(10.0, 10.0);
        assert!(!session.frame(1.0e7 + i as f64 * FRAME_MS, &mut surface));
    }
    session.end();
    assert_eq!(session.score(), final_score);
    assert_eq!(session.observer().game_overs, vec![final_score]);
}

#[test]
fn test_top_bottom_only_spawning() {
    let settings = Settings {
        spawn_edges: SpawnEdges::TopBottomOnly,
        ..Settings::default()
    };
    let mut session = new_session(settings);
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    session.start(VP, 5);

    // Track every enemy the frame it appears
    let mut seen = std::collections::HashSet::new();
    for i in 0..60 * 20 {
        if !session.frame(i as f64 * FRAME_MS, &mut surface) {
            break;
        }
        for enemy in &session.state().enemies {
            if seen.insert(enemy.id) {
                let pos = enemy.pos - enemy.vel;
                assert!(
                    pos.y < 0.0 || pos.y > VP.height,
                    "enemy {} spawned at {:?}",
                    enemy.id,
                    pos
                );
            }
        }
    }
    assert!(!seen.is_empty());
}

#[test]
fn test_restart_after_game_over() {
    let mut session = new_session(Settings::default());
    let mut surface = RecordingSurface::new(VP.width, VP.height);
    session.start(VP, 3);
    autopilot(&mut session, &mut surface, 0..60 * 600, 0);
    assert_eq!(session.phase(), SessionPhase::Ended);

    session.start(VP, 4);
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.score(), 0);
    assert_eq!(session.state().entity_count(), 0);
    assert!(session.frame(0.0, &mut surface));
}
