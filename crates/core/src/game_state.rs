//! Game state module - the simulation snapshot and its transition
//! operations.
//!
//! `GameState` is an immutable value: every operation returns a new
//! snapshot and never mutates its input. The `GameEngine` holds what the
//! transitions need besides the state itself (configuration, grid, RNG)
//! and owns no timing; an external scheduler invokes [`GameEngine::tick`]
//! at the cadence recommended by [`GameState::tick_interval_ms`].

use thiserror::Error;

use crate::food;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::speed;
use tui_snake_types::{
    Direction, GameConfig, Phase, Point, TickEvent, INITIAL_SNAKE_LEN,
};

/// Caller errors surfaced by the engine.
///
/// The engine never silently absorbs a call made in the wrong phase; the
/// scheduler is expected not to make one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operation was invoked in a phase that does not allow it.
    #[error("cannot {op} while the game is {phase:?}")]
    InvalidPhase { op: &'static str, phase: Phase },
}

/// Result of one simulation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub state: GameState,
    pub event: TickEvent,
}

/// One immutable snapshot of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    snake: Snake,
    current_direction: Direction,
    pending_direction: Direction,
    /// `None` only once the snake covers the whole grid (phase `Won`).
    food: Option<Point>,
    score: u32,
    tick_interval_ms: u32,
    phase: Phase,
}

impl GameState {
    /// Compose a running state from its parts.
    ///
    /// `direction` seeds both the current and the pending direction;
    /// score starts at 0 and the tick interval at the configured start
    /// value. Mostly useful to hosts and tests that need a specific
    /// board; regular games start from [`GameEngine::initial_state`].
    pub fn new(
        snake: Snake,
        direction: Direction,
        food: Option<Point>,
        config: &GameConfig,
    ) -> Self {
        Self {
            snake,
            current_direction: direction,
            pending_direction: direction,
            food,
            score: 0,
            tick_interval_ms: config.start_interval_ms,
            phase: Phase::Running,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Food items eaten since the last restart.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Recommended scheduler cadence for the next tick.
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// The game engine: configuration, grid, and the food RNG.
///
/// All gameplay state lives in [`GameState`] values threaded through the
/// operations; the engine itself only advances its RNG.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: SimpleRng,
}

impl GameEngine {
    /// Create an engine for the given configuration.
    ///
    /// The seed fixes the food-placement sequence; equal seeds replay
    /// equal sessions.
    ///
    /// # Panics
    ///
    /// Panics if the grid cannot host the canonical initial snake
    /// (fewer than 4 columns).
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let grid = Grid::from_config(&config);
        assert!(
            grid.cols() >= 4,
            "grid too narrow for the initial snake"
        );
        Self {
            config,
            grid,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The canonical start state: a 2-cell snake heading right from just
    /// left of center, food on a random free cell, score 0, interval at
    /// its start value.
    pub fn initial_state(&mut self) -> GameState {
        let head = Point::new(self.grid.cols() / 2 - 1, self.grid.rows() / 2);
        let snake = Snake::from_head(head, Direction::Right, INITIAL_SNAKE_LEN);
        let food = food::spawn(&self.grid, &snake, &mut self.rng);
        GameState::new(snake, Direction::Right, food, &self.config)
    }

    /// Start a fresh game, independent of any prior state.
    ///
    /// The RNG stream continues, so successive games within one session
    /// see different food sequences.
    pub fn restart(&mut self) -> GameState {
        self.initial_state()
    }

    /// Advance the simulation by one step.
    ///
    /// Fails with [`EngineError::InvalidPhase`] unless the state is
    /// `Running`; the scheduler must not tick a paused or finished game.
    pub fn tick(&mut self, state: &GameState) -> Result<TickOutcome, EngineError> {
        if state.phase != Phase::Running {
            return Err(EngineError::InvalidPhase {
                op: "tick",
                phase: state.phase,
            });
        }

        // The last proposal becomes the movement direction for this step.
        let direction = state.pending_direction;
        let new_head = state.snake.head().step(direction);

        if !self.grid.in_bounds(new_head) {
            let next = GameState {
                current_direction: direction,
                phase: Phase::Over,
                ..state.clone()
            };
            return Ok(TickOutcome {
                state: next,
                event: TickEvent::WallCollision,
            });
        }

        // The tail has not moved yet, so it blocks the head like any
        // other segment.
        if state.snake.contains(new_head) {
            let next = GameState {
                current_direction: direction,
                phase: Phase::Over,
                ..state.clone()
            };
            return Ok(TickOutcome {
                state: next,
                event: TickEvent::SelfCollision,
            });
        }

        let ate = state.food == Some(new_head);
        let snake = state.snake.advance(new_head, ate);

        if !ate {
            let next = GameState {
                snake,
                current_direction: direction,
                ..state.clone()
            };
            return Ok(TickOutcome {
                state: next,
                event: TickEvent::Moved,
            });
        }

        let score = state.score + 1;
        let tick_interval_ms = speed::next_interval_ms(state.tick_interval_ms, &self.config);
        let food = food::spawn(&self.grid, &snake, &mut self.rng);
        let (phase, event) = match food {
            Some(_) => (Phase::Running, TickEvent::Ate),
            // No free cell left to hold food: the snake owns the grid.
            None => (Phase::Won, TickEvent::GridFull),
        };

        let next = GameState {
            snake,
            current_direction: direction,
            pending_direction: state.pending_direction,
            food,
            score,
            tick_interval_ms,
            phase,
        };
        Ok(TickOutcome { state: next, event })
    }

    /// Propose a movement direction for the next tick.
    ///
    /// A reversal (the exact opposite of the current direction) is
    /// ignored and the state returned unchanged. Repeated proposals
    /// before the next tick overwrite each other; only the last one is
    /// consumed. Legal while paused, an error once the game has ended.
    pub fn propose_direction(
        &self,
        state: &GameState,
        direction: Direction,
    ) -> Result<GameState, EngineError> {
        if state.phase.is_terminal() {
            return Err(EngineError::InvalidPhase {
                op: "propose a direction",
                phase: state.phase,
            });
        }

        if direction.is_opposite(state.current_direction) {
            return Ok(state.clone());
        }

        Ok(GameState {
            pending_direction: direction,
            ..state.clone()
        })
    }

    /// Switch between `Running` and `Paused`.
    ///
    /// Terminal phases cannot be left (use [`GameEngine::restart`]) or
    /// entered through this operation.
    pub fn set_phase(&self, state: &GameState, phase: Phase) -> Result<GameState, EngineError> {
        if state.phase.is_terminal() || phase.is_terminal() {
            return Err(EngineError::InvalidPhase {
                op: "switch phase",
                phase: state.phase,
            });
        }

        Ok(GameState {
            phase,
            ..state.clone()
        })
    }
}
