//! Dense 3D lattice storage.
//!
//! The maze lattice is a cube of `segment_count` cells per axis. [`Grid3`]
//! stores it as a single flat buffer with a 3-index-to-1-index mapping, so
//! generation and analysis never deal with nested vectors or share mutable
//! state through closures.

/// A dense cubic 3D array indexed by lattice coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3<T> {
    segment_count: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid3<T> {
    /// Creates a grid of `segment_count` cells per axis, every cell set to
    /// `fill`.
    pub fn new(segment_count: usize, fill: T) -> Self {
        Self {
            segment_count,
            data: vec![fill; segment_count * segment_count * segment_count],
        }
    }
}

impl<T> Grid3<T> {
    /// The lattice extent per axis.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Total number of lattice cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maps a lattice coordinate to its flat cell number.
    ///
    /// # Panics
    /// If any component is outside `0..segment_count`; out-of-range access is
    /// a programming error, never a runtime condition.
    pub fn cell_number(&self, (x, y, z): (i32, i32, i32)) -> usize {
        let s = self.segment_count as i32;
        assert!(
            x >= 0 && x < s && y >= 0 && y < s && z >= 0 && z < s,
            "lattice coordinate ({}, {}, {}) out of bounds for {} segments",
            x,
            y,
            z,
            self.segment_count
        );
        (x + s * y + s * s * z) as usize
    }

    /// Maps a flat cell number back to its lattice coordinate.
    pub fn coordinate(&self, number: usize) -> (i32, i32, i32) {
        let s = self.segment_count;
        (
            (number % s) as i32,
            (number / s % s) as i32,
            (number / (s * s)) as i32,
        )
    }

    /// Returns the cell at a lattice coordinate.
    pub fn get(&self, coordinate: (i32, i32, i32)) -> &T {
        let number = self.cell_number(coordinate);
        &self.data[number]
    }

    /// Overwrites the cell at a lattice coordinate.
    pub fn set(&mut self, coordinate: (i32, i32, i32), value: T) {
        let number = self.cell_number(coordinate);
        self.data[number] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the 3-index-to-1-index mapping and its inverse
    #[test]
    fn test_cell_number_round_trip() {
        let grid = Grid3::new(5, 0u8);
        for number in 0..grid.len() {
            let coordinate = grid.coordinate(number);
            assert_eq!(
                grid.cell_number(coordinate),
                number,
                "cell number {} did not round-trip through {:?}",
                number,
                coordinate
            );
        }
    }

    /// Tests reads and writes through lattice coordinates
    #[test]
    fn test_get_set() {
        let mut grid = Grid3::new(3, false);
        assert!(!*grid.get((1, 2, 0)));
        grid.set((1, 2, 0), true);
        assert!(*grid.get((1, 2, 0)));
        assert!(!*grid.get((0, 2, 1)));
    }

    /// Tests that out-of-range coordinates are rejected loudly
    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid3::new(3, 0u8);
        grid.cell_number((1, -1, 1));
    }
}
