//! Warren - 3D Perfect-Maze Generation and Analysis
//!
//! Warren builds perfect (loop-free, fully-connected) 3D mazes on a voxel-like
//! lattice and analyzes the resulting spanning tree. It is the maze core of a
//! first-person maze game: the renderer, input handling, and collision loop
//! live elsewhere and consume this crate's output: a 3D occupancy grid for
//! wall placement and collision, plus derived statistics for a completion
//! summary.
//!
//! # Features
//! - **Procedural Generation**: Randomized spanning-tree construction (a 3D
//!   generalization of Wilson's algorithm) over the room cells of a
//!   doubled-resolution lattice
//! - **Structural Analysis**: DFS traversal of the finished maze producing
//!   solution length, branch counts, and dead-end depth statistics
//! - **Coordinate Mapping**: Conversions between lattice indices and world
//!   positions, including the per-frame position-to-lattice collision query
//! - **Completion Store**: A single persisted "last completion" timestamp
//!
//! # Architecture
//! The crate follows a modular architecture:
//! - `maze/`: Maze generation, the occupancy grid, and the analyzer
//! - `math/`: Coordinate transformations and the world position type
//! - `storage`: Last-completion timestamp persistence
//!
//! # Usage
//! Call [`maze::generator::generate_maze`] with the number of rooms per axis,
//! then hand the returned [`maze::generator::MazeData`] to the rendering and
//! collision layers.

#![warn(missing_docs)]

pub mod math;
pub mod maze;
pub mod storage;
