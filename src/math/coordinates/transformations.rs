//! Transformations between lattice indices and world coordinates.
//!
//! The lattice alternates thin wall segments (even indices) and thick room
//! segments (odd indices) along every axis, so a world position is a
//! cumulative sum of the preceding segment widths. These functions convert in
//! both directions and are shared by generation, analysis, and the collision
//! loop.

use super::constants::{MAJOR_WIDTH, MINOR_WIDTH};
use crate::math::vec::Vec3;

/// Returns the world-space width of a lattice segment.
///
/// # Arguments
/// * `index` - The lattice index along any axis (any integer; callers
///   guarantee range)
///
/// # Returns
/// [`MINOR_WIDTH`] for even indices (walls/joints), [`MAJOR_WIDTH`] for odd
/// indices (rooms).
pub fn width(index: i32) -> f64 {
    if index % 2 == 0 { MINOR_WIDTH } else { MAJOR_WIDTH }
}

/// Returns the world-space center position of a lattice index.
///
/// The offset is a monotonic cumulative function of the preceding segment
/// widths: each wall/room pair advances by one cell pitch
/// (`MAJOR_WIDTH + MINOR_WIDTH`). Negative indices are valid and place
/// positions outside the maze (the camera spawns at `offset(-2)` on the
/// entrance axis).
///
/// # Arguments
/// * `index` - The lattice index along any axis
///
/// # Returns
/// The center of segment `index` in world units.
pub fn offset(index: i32) -> f64 {
    index as f64 / 2.0 * (MAJOR_WIDTH + MINOR_WIDTH)
}

/// Buckets a continuous world coordinate into its enclosing lattice index.
///
/// The position is shifted by half a wall thickness so that wall bands are
/// centered on even offsets, divided by the cell pitch, and floored to the
/// nearest even index. If the position falls within the wall band around that
/// boundary the even (wall) index is returned, otherwise the next odd (room)
/// index. A small epsilon is added before flooring to tolerate floating-point
/// rounding at exact cell boundaries.
///
/// This inverts [`offset`]: `position_to_lattice(offset(i)) == i` for every
/// lattice index `i`.
///
/// # Arguments
/// * `position` - A continuous coordinate along any axis
///
/// # Returns
/// The lattice index of the segment enclosing `position`.
pub fn position_to_lattice(position: f64) -> i32 {
    let x = position + MINOR_WIDTH / 2.0;
    // epsilon prevents .999 repeating from flooring one segment short
    let epsilon = MINOR_WIDTH / 100.0;
    let pitch = MAJOR_WIDTH + MINOR_WIDTH;
    let even = (x / pitch + epsilon).floor() as i32 * 2;
    let diff = x - even as f64 * pitch / 2.0;
    if diff.abs() < MINOR_WIDTH { even } else { even + 1 }
}

/// Maps a 3D world position to its lattice coordinate triple.
///
/// Applied independently per axis; the collision loop calls this every frame
/// to test the player's bounding region against the occupancy map.
///
/// # Arguments
/// * `position` - The world position to bucket
///
/// # Returns
/// The `(x, y, z)` lattice coordinate enclosing `position`.
pub fn lattice_index_for_position(position: Vec3) -> (i32, i32, i32) {
    (
        position_to_lattice(position.x()),
        position_to_lattice(position.y()),
        position_to_lattice(position.z()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    /// Tests that widths alternate wall/room with index parity
    #[test]
    fn test_width_table() {
        for index in 0..=20 {
            if index % 2 == 0 {
                assert_eq!(width(index), MINOR_WIDTH, "even index {} is a wall", index);
            } else {
                assert_eq!(width(index), MAJOR_WIDTH, "odd index {} is a room", index);
            }
        }
    }

    /// Tests that offsets strictly increase with the lattice index
    #[test]
    fn test_offset_monotonic() {
        for index in -4..=20 {
            assert!(
                offset(index) < offset(index + 1),
                "offset({}) should be below offset({})",
                index,
                index + 1
            );
        }
    }

    /// Tests the round-trip property over a size-10 maze's index range
    #[test]
    fn test_offset_round_trip() {
        for index in 0..=20 {
            assert_eq!(
                position_to_lattice(offset(index)),
                index,
                "round-trip failed for lattice index {}",
                index
            );
        }
    }

    /// Tests bucketing of positions that are not segment centers
    #[test]
    fn test_position_within_segments() {
        // Just inside the wall band around the boundary between rooms 0 and 1
        let boundary = offset(2);
        assert_eq!(position_to_lattice(boundary - MINOR_WIDTH * 0.4), 2);
        assert_eq!(position_to_lattice(boundary + MINOR_WIDTH * 0.4), 2);

        // Deep inside room 0 and room 1
        assert_eq!(position_to_lattice(offset(1) + 0.3), 1);
        assert_eq!(position_to_lattice(offset(3) - 0.3), 3);
    }

    /// Tests that negative positions (outside the entrance face) bucket
    /// correctly, since the camera spawns at offset(-2)
    #[test]
    fn test_negative_indices() {
        assert_eq!(position_to_lattice(offset(-1)), -1);
        assert_eq!(position_to_lattice(offset(-2)), -2);
    }

    /// Tests the per-axis application on a full 3D position
    #[test]
    fn test_lattice_index_for_position() {
        let position = Vec3::new(offset(1), offset(2), offset(5));
        assert_eq!(lattice_index_for_position(position), (1, 2, 5));

        let nudged = position + Vec3::new(0.2, 0.0, -0.2) * 1.0;
        assert_eq!(lattice_index_for_position(nudged), (1, 2, 5));
    }

    #[test]
    fn quickcheck_round_trip() {
        fn prop(index: i16) -> bool {
            let index = i32::from(index);
            position_to_lattice(offset(index)) == index
        }
        quickcheck(prop as fn(i16) -> bool);
    }

    #[test]
    fn quickcheck_width_parity() {
        fn prop(index: i16) -> bool {
            let expected = if index % 2 == 0 { MINOR_WIDTH } else { MAJOR_WIDTH };
            width(i32::from(index)) == expected
        }
        quickcheck(prop as fn(i16) -> bool);
    }
}
