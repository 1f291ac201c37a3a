//! Rendering tests through the facade: a full game state drawn into a
//! framebuffer, no terminal required.

use tui_snake::core::{GameEngine, GameState, Snake};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameConfig, Phase, Point};

fn full_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn test_fresh_game_renders_board_and_panel() {
    let mut engine = GameEngine::new(GameConfig::default(), 4321);
    let state = engine.initial_state();
    let view = GameView::new(engine.config());

    let fb = view.render(&state, 12, Viewport::new(90, 30));
    let text = full_text(&fb);

    assert!(text.contains("┌"));
    assert!(text.contains("┘"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("BEST"));
    assert!(text.contains("12"));
    assert!(text.contains("q quit"));
    // No overlay while running.
    assert!(!text.contains("PAUSED"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_snake_occupies_the_right_number_of_board_cells() {
    let view = GameView::new(&GameConfig::default());
    let state = GameState::new(
        Snake::from_cells([Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]),
        Direction::Right,
        Some(Point::new(12, 12)),
        &GameConfig::default(),
    );

    let fb = view.render(&state, 0, Viewport::new(90, 30));
    let blocks = fb.glyphs().iter().filter(|g| g.ch == '█').count();

    // 3 snake cells + 1 food cell, 2 columns each.
    assert_eq!(blocks, 8);
}

#[test]
fn test_overlay_follows_the_phase() {
    let mut engine = GameEngine::new(GameConfig::default(), 4321);
    let view = GameView::new(engine.config());
    let state = engine.initial_state();

    let paused = engine.set_phase(&state, Phase::Paused).unwrap();
    assert!(full_text(&view.render(&paused, 0, Viewport::new(90, 30))).contains("PAUSED"));

    // March into the right wall.
    let mut state = state;
    loop {
        let outcome = engine.tick(&state).unwrap();
        state = outcome.state;
        if state.phase().is_terminal() {
            break;
        }
    }
    let text = full_text(&view.render(&state, 0, Viewport::new(90, 30)));
    assert!(text.contains("GAME OVER"));
}
