//! Math utilities and types for maze geometry and collision queries.
//!
//! This module provides the world position type and the coordinate
//! transformations between the maze lattice and world space.
//!
//! # Module Organization
//!
//! - [`vec`] module contains the [`vec::Vec3`] world position type
//! - [`coordinates`] module contains lattice/world conversions and
//!   direction/special-position helpers

pub mod coordinates;
pub mod vec;
