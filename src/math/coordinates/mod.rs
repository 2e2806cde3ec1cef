//! Coordinate system conversions for the maze.
//!
//! This module provides utilities to convert between the two coordinate
//! systems used by the maze and its consumers:
//! - Lattice Coordinates: the doubled-resolution integer grid used for maze
//!   generation, where even indices are walls/joints and odd indices are
//!   room centers
//! - World Coordinates: continuous 3D space where the player moves (x, y, z)
//!
//! It centralizes all coordinate transformations and provides utilities for
//! finding special cells like the entrance and exit openings.

mod positions;
mod transformations;

pub use positions::*;
pub use transformations::*;

/// Fixed world-space sizes of the lattice segments
pub mod constants {
    /// World-space size of a room segment (odd lattice index)
    pub const MAJOR_WIDTH: f64 = 2.0;

    /// World-space thickness of a wall segment (even lattice index)
    pub const MINOR_WIDTH: f64 = 0.125 / 2.0;
}
