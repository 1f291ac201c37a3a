//! Food module - uniform spawning into unoccupied cells.
//!
//! Placement is rejection sampling: draw a uniform cell, retry while it is
//! occupied. With at least one free cell the loop terminates almost
//! surely; a fully occupied grid is reported as `None` instead of looping
//! forever.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use tui_snake_types::Point;

/// Pick a uniformly random cell not occupied by the snake.
///
/// Returns `None` when the snake covers the whole grid (the win
/// condition).
pub fn spawn(grid: &Grid, occupied: &Snake, rng: &mut SimpleRng) -> Option<Point> {
    if occupied.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let x = rng.next_range(grid.cols() as u32) as i32;
        let y = rng.next_range(grid.rows() as u32) as i32;
        let candidate = Point::new(x, y);
        if !occupied.contains(candidate) {
            return Some(candidate);
        }
    }
}
