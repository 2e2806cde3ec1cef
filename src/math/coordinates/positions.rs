//! Special positions and direction utilities for the lattice.
//!
//! This module provides the six axis-aligned movement directions and
//! functions to find special lattice coordinates: the entrance and exit rooms
//! and their boundary openings.

/// Enum representing the six axis-aligned directions in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Negative x direction
    XNeg,
    /// Negative y direction
    YNeg,
    /// Negative z direction
    ZNeg,
    /// Positive x direction
    XPos,
    /// Positive y direction
    YPos,
    /// Positive z direction
    ZPos,
}

impl Direction {
    /// All six directions, in a fixed order usable with a random index.
    pub const ALL: [Direction; 6] = [
        Direction::XNeg,
        Direction::YNeg,
        Direction::ZNeg,
        Direction::XPos,
        Direction::YPos,
        Direction::ZPos,
    ];

    /// Returns the unit lattice step for this direction.
    ///
    /// # Returns
    /// An `(x, y, z)` triple with exactly one nonzero component of magnitude 1.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::XNeg => (-1, 0, 0),
            Direction::YNeg => (0, -1, 0),
            Direction::ZNeg => (0, 0, -1),
            Direction::XPos => (1, 0, 0),
            Direction::YPos => (0, 1, 0),
            Direction::ZPos => (0, 0, 1),
        }
    }
}

/// Gets the entrance room of the maze: the first room cell on every axis.
pub fn entrance_room() -> (i32, i32, i32) {
    (1, 1, 1)
}

/// Gets the exit room of the maze: the last room cell on every axis,
/// diagonally opposite the entrance room.
///
/// # Arguments
/// * `size` - The number of rooms per axis
pub fn exit_room(size: u32) -> (i32, i32, i32) {
    let last = 2 * size as i32 - 1;
    (last, last, last)
}

/// Gets the entrance opening: the boundary wall cell carved open on the
/// entrance room's outward face.
pub fn entrance_opening() -> (i32, i32, i32) {
    (1, 1, 0)
}

/// Gets the exit opening: the boundary wall cell carved open on the exit
/// room's outward face.
///
/// # Arguments
/// * `size` - The number of rooms per axis
pub fn exit_opening(size: u32) -> (i32, i32, i32) {
    let last = 2 * size as i32 - 1;
    (last, last, last + 1)
}

/// Gets the room adjacent to the given room in the specified direction.
///
/// Rooms are two lattice units apart (the wall between them occupies the
/// intermediate index).
///
/// # Arguments
/// * `room` - The current room's lattice coordinate
/// * `direction` - The direction to move
/// * `segment_count` - The lattice extent per axis (`2 * size + 1`)
///
/// # Returns
/// Option containing the adjacent room, or None if it would be outside the
/// maze.
pub fn adjacent_room(
    room: (i32, i32, i32),
    direction: Direction,
    segment_count: i32,
) -> Option<(i32, i32, i32)> {
    let (dx, dy, dz) = direction.delta();
    let next = (room.0 + dx * 2, room.1 + dy * 2, room.2 + dz * 2);

    let in_range = |v: i32| v >= 0 && v < segment_count;
    if in_range(next.0) && in_range(next.1) && in_range(next.2) {
        Some(next)
    } else {
        None
    }
}

/// Gets the wall cell between a room and its neighbor in the specified
/// direction.
///
/// # Arguments
/// * `room` - The room's lattice coordinate
/// * `direction` - The direction toward the neighbor
pub fn wall_between(room: (i32, i32, i32), direction: Direction) -> (i32, i32, i32) {
    let (dx, dy, dz) = direction.delta();
    (room.0 + dx, room.1 + dy, room.2 + dz)
}
