//! Maze generation and structural analysis.
//!
//! This module owns the maze's doubled-resolution lattice: [`grid::Grid3`]
//! stores it, [`generator`] carves a perfect maze into it, and [`analyzer`]
//! derives the statistics shown in the completion summary.

pub mod analyzer;
pub mod generator;
pub mod grid;

pub use analyzer::Analytics;
pub use generator::{MazeData, generate_maze, generate_maze_with_rng};
