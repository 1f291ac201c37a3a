//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all simulation rules and state management. It has
//! **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the same construction seed produces identical food
//!   sequences
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any host (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed rectangular coordinate space and its boundary test
//! - [`snake`]: the ordered body sequence, head first
//! - [`food`]: uniform spawning into unoccupied cells
//! - [`speed`]: tick-interval ramp toward its floor
//! - [`rng`]: seeded pseudo-random source for food placement
//! - [`game_state`]: the [`GameState`] snapshot and the [`GameEngine`]
//!   transition operations
//!
//! # Simulation Rules
//!
//! - One tick advances the head by exactly one cell in the last proposed
//!   direction; the tail follows unless food was eaten.
//! - Leaving the grid or biting any body cell ends the game; the losing
//!   state keeps the body exactly where it was.
//! - Eating food scores one point, grows the body by one cell, relocates
//!   the food to a uniformly random free cell, and shortens the
//!   recommended tick interval by a fixed step down to a floor.
//! - A proposed reversal (exact opposite of the current direction) is
//!   ignored.
//! - When growth fills the whole grid the game is won rather than looping
//!   forever looking for a free food cell.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{Direction, GameConfig, Phase, TickEvent};
//!
//! let mut engine = GameEngine::new(GameConfig::default(), 12345);
//! let state = engine.initial_state();
//! assert_eq!(state.phase(), Phase::Running);
//!
//! let state = engine.propose_direction(&state, Direction::Up).unwrap();
//! let outcome = engine.tick(&state).unwrap();
//! assert!(matches!(outcome.event, TickEvent::Moved | TickEvent::Ate));
//! ```

pub mod food;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod speed;

pub use game_state::{EngineError, GameEngine, GameState, TickOutcome};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::Snake;
