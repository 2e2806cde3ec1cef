//! World position vector type.

use std::ops::{Add, Mul, Sub};

/// A 3D world position or displacement, in world units.
///
/// Lattice coordinates are integers; everything continuous (player position,
/// wall placement offsets) uses `Vec3`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3([f64; 3]);

impl Vec3 {
    /// Creates a new vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3([x, y, z])
    }

    /// Returns the components as an array reference.
    pub fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// The x component.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// The y component.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// The z component.
    pub fn z(&self) -> f64 {
        self.0[2]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(values: [f64; 3]) -> Self {
        Vec3(values)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> Self {
        vec.0
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self([
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        ])
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self([
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        ])
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self([self.x() * scalar, self.y() * scalar, self.z() * scalar])
    }
}
