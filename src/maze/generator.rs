//! Maze generation using loop-erased random walks (Wilson's algorithm in 3D).
//!
//! This module builds a perfect maze (a fully connected, cycle-free spanning
//! tree over the room cells of the lattice) and converts it into the boolean
//! occupancy map consumed by the rendering and collision layers.
//!
//! # Examples
//!
//! ```rust
//! use warren::maze::generator::generate_maze;
//!
//! // Generate a 5x5x5-room maze
//! let maze = generate_maze(5);
//!
//! assert_eq!(maze.segment_count, 11);
//! assert!(maze.analytics.solution_length >= 1);
//! ```

use std::collections::HashMap;

use rand::Rng;

use crate::math::coordinates::{
    Direction, adjacent_room, entrance_opening, exit_opening, wall_between,
};
use crate::maze::analyzer::{self, Analytics};
use crate::maze::grid::Grid3;

/// Per-cell state during spanning-tree construction.
///
/// Every cell starts `Full` (solid) and is hollowed out as the tree grows.
/// While a random walk is in progress, the cells it has crossed hold the
/// direction last chosen from them; re-crossing a cell overwrites the stored
/// direction, which is what erases loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Solid, not yet part of the tree
    Full,
    /// Carved open: a visited room or an opened wall
    Empty,
    /// Room on the active random walk, tagged with the direction last taken
    /// from it
    Walk(Direction),
}

/// A finished maze: the occupancy map plus its structural analytics.
///
/// Returned by value; the generator keeps no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeData {
    /// Number of rooms per axis
    pub bounds: (u32, u32, u32),
    /// Lattice extent per axis (`2 * size + 1`)
    pub segment_count: u32,
    /// `true` = solid/blocked, `false` = open/passable, indexed by lattice
    /// coordinate
    pub occupancy_map: Grid3<bool>,
    /// Structural statistics of the spanning tree
    pub analytics: Analytics,
    /// Human-readable maze size for the completion summary
    pub size_label: String,
}

/// The set of rooms not yet reached by the spanning tree.
///
/// Removal and random sampling are both O(1): cells live in a vector for
/// sampling, with a cell-number-to-slot map kept in step so removal can
/// swap-remove.
struct UnvisitedCells {
    cells: Vec<usize>,
    slots: HashMap<usize, usize>,
}

impl UnvisitedCells {
    fn new(cells: Vec<usize>) -> Self {
        let slots = cells
            .iter()
            .enumerate()
            .map(|(slot, &number)| (number, slot))
            .collect();
        Self { cells, slots }
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Picks a uniformly random unvisited cell number.
    fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        self.cells[rng.gen_range(0..self.cells.len())]
    }

    /// Removes a cell from the set.
    ///
    /// # Panics
    /// If the cell is not present. The walk retrace only ever empties cells
    /// it just walked, so a missing cell means the construction is broken.
    fn remove(&mut self, number: usize) {
        let slot = match self.slots.remove(&number) {
            Some(slot) => slot,
            None => panic!("trying to remove cell {} not in the unvisited set", number),
        };
        self.cells.swap_remove(slot);
        if let Some(&moved) = self.cells.get(slot) {
            self.slots.insert(moved, slot);
        }
    }
}

/// Generates a perfect maze with `size` rooms per axis and analyzes it.
///
/// Uses the process-wide random source. See [`generate_maze_with_rng`] for
/// the seedable variant; the algorithm is a pure function of its random
/// draws.
///
/// # Arguments
/// * `size` - The number of rooms per axis; callers must supply `size >= 1`
///   (behavior for 0 is undefined)
pub fn generate_maze(size: u32) -> MazeData {
    generate_maze_with_rng(size, &mut rand::thread_rng())
}

/// Generates a perfect maze drawing randomness from the given source.
///
/// # Algorithm
/// 1. Every odd-odd-odd lattice coordinate (room center) starts unvisited;
///    one random room is carved as the seed.
/// 2. While unvisited rooms remain, start a random walk at one of them:
///    repeatedly pick an in-bounds axis direction, record it at the current
///    room (overwriting erases loops), and advance two lattice units, until
///    the walk reaches a carved room.
/// 3. Retrace the walk from its start along the recorded directions, carving
///    each room and the wall between it and its successor.
/// 4. Convert cell states to the boolean occupancy map and carve the
///    entrance and exit openings unconditionally.
/// 5. Run the structural analyzer over the finished map.
///
/// # Panics
/// On internal invariant violations (a retrace emptying a room that is not
/// unvisited, or the analyzer never reaching the exit). These indicate a
/// broken construction, never a runtime condition.
pub fn generate_maze_with_rng<R: Rng>(size: u32, rng: &mut R) -> MazeData {
    debug_assert!(size >= 1, "maze size must be at least 1 room per axis");

    let segment_count = 2 * size as usize + 1;
    let mut board = Grid3::new(segment_count, CellState::Full);

    let mut room_numbers = Vec::with_capacity((size as usize).pow(3));
    for number in 0..board.len() {
        let (x, y, z) = board.coordinate(number);
        if x % 2 == 1 && y % 2 == 1 && z % 2 == 1 {
            room_numbers.push(number);
        }
    }
    let mut unvisited = UnvisitedCells::new(room_numbers);

    // Seed the tree with one carved room
    let seed = unvisited.pick(rng);
    board.set(board.coordinate(seed), CellState::Empty);
    unvisited.remove(seed);

    // Run walks until every room has joined the tree
    while !unvisited.is_empty() {
        let start = board.coordinate(unvisited.pick(rng));

        // Walk until reaching a carved room, recording directions as we go
        let mut current = start;
        while *board.get(current) != CellState::Empty {
            let (direction, next) = random_step(rng, current, segment_count as i32);
            board.set(current, CellState::Walk(direction));
            current = next;
        }

        // Retrace the loop-erased path, carving rooms and the walls between
        let mut current = start;
        while let CellState::Walk(direction) = *board.get(current) {
            board.set(current, CellState::Empty);
            unvisited.remove(board.cell_number(current));
            board.set(wall_between(current, direction), CellState::Empty);

            current = adjacent_room(current, direction, segment_count as i32)
                .expect("recorded walk direction stepped out of bounds");
        }
    }

    // Convert to the boolean occupancy map: anything never carved stays solid
    let mut occupancy_map = Grid3::new(segment_count, true);
    for number in 0..board.len() {
        let coordinate = board.coordinate(number);
        occupancy_map.set(coordinate, *board.get(coordinate) != CellState::Empty);
    }

    // The entrance and exit openings are part of the external contract and
    // are carved regardless of the tree
    occupancy_map.set(entrance_opening(), false);
    occupancy_map.set(exit_opening(size), false);

    let analytics = analyzer::analyze(&occupancy_map, size);

    MazeData {
        bounds: (size, size, size),
        segment_count: segment_count as u32,
        occupancy_map,
        analytics,
        size_label: format!("{}", size),
    }
}

/// Picks a random direction whose two-unit step stays inside the lattice,
/// rejecting out-of-bounds draws.
fn random_step<R: Rng>(
    rng: &mut R,
    room: (i32, i32, i32),
    segment_count: i32,
) -> (Direction, (i32, i32, i32)) {
    loop {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if let Some(next) = adjacent_room(room, direction, segment_count) {
            return (direction, next);
        }
    }
}
