//! Terminal snake runner (default binary).
//!
//! This is the scheduler the simulation core deliberately does not have:
//! it owns the timer, polls input, invokes `tick` at the cadence the
//! latest state recommends, and persists the best score when a game
//! ends. The interval is re-read from the state before every wait, so a
//! speed-up takes effect on the next tick, never retroactively.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameEngine, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::BestScoreStore;
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, GameConfig, Phase};

fn main() -> Result<()> {
    // Logs go to stderr; the alternate screen keeps them out of the way
    // and `RUST_LOG=debug cargo run 2>snake.log` captures them.
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let config = GameConfig::default();
    let mut engine = GameEngine::new(config.clone(), seed);

    let store = match BestScoreStore::open_default() {
        Ok(store) => Some(store),
        Err(err) => {
            log::warn!("best-score persistence disabled: {err:#}");
            None
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config, store.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut GameEngine,
    config: &GameConfig,
    store: Option<&BestScoreStore>,
) -> Result<()> {
    let view = GameView::new(config);
    let mut state = engine.initial_state();
    let mut best = store.map(|s| s.get()).unwrap_or(0);

    // Polling cadence while nothing is scheduled (paused / game over).
    const IDLE_POLL_MS: u64 = 120;

    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, best, Viewport::new(w, h));
        term.draw(&fb)?;

        // Wait for input, at most until the next scheduled tick. The
        // interval comes from the *latest* state.
        let timeout = if state.phase() == Phase::Running {
            Duration::from_millis(state.tick_interval_ms() as u64)
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        state = apply_action(engine, &state, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if state.phase() == Phase::Running
            && last_tick.elapsed() >= Duration::from_millis(state.tick_interval_ms() as u64)
        {
            last_tick = Instant::now();
            let outcome = engine.tick(&state)?;
            log::debug!("tick: {:?} score={}", outcome.event, outcome.state.score());

            if outcome.event.is_terminal() {
                best = best.max(outcome.state.score());
                if let Some(store) = store {
                    if let Err(err) = store.set(best) {
                        log::warn!("could not persist best score: {err:#}");
                    }
                }
            }
            state = outcome.state;
        }
    }
}

/// Route one input action through the engine.
///
/// Rejected calls (turning after the game ended, pausing a finished
/// game) leave the state as it was.
fn apply_action(engine: &mut GameEngine, state: &GameState, action: GameAction) -> GameState {
    match action {
        GameAction::Turn(direction) => engine
            .propose_direction(state, direction)
            .unwrap_or_else(|_| state.clone()),
        GameAction::Pause => {
            let target = match state.phase() {
                Phase::Running => Phase::Paused,
                Phase::Paused => Phase::Running,
                _ => return state.clone(),
            };
            engine
                .set_phase(state, target)
                .unwrap_or_else(|_| state.clone())
        }
        GameAction::Restart => {
            if state.phase().is_terminal() {
                log::debug!("restart");
                engine.restart()
            } else {
                state.clone()
            }
        }
    }
}
