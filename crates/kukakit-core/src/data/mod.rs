//! Data models for robot motion points
//!
//! This module provides:
//! - The KRL `E6POS` motion point with per-point spline timing
//! - Status/turn flag pairs tagging where a point came from
//! - A three component vector for circle centers and orientation triples

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status (`S`) and turn (`T`) flags of a KRL position
///
/// The robot controller uses these to disambiguate the arm configuration.
/// The generators treat them as opaque codes and tag their points with a
/// fixed pair so the origin of a point stays recognisable in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxFlags {
    /// Status flag
    pub s: i32,
    /// Turn flag
    pub t: i32,
}

impl AuxFlags {
    /// Flags carried by analytically generated circle points
    pub const CIRCLE: AuxFlags = AuxFlags { s: 2, t: 43 };

    /// Flags carried by points imported from a spline table
    pub const TABLE: AuxFlags = AuxFlags { s: 6, t: 19 };
}

impl fmt::Display for AuxFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S {},T {}", self.s, self.t)
    }
}

/// Three component value used for circle centers and A/B/C orientation triples
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
}

impl Vector3 {
    pub const fn new(p1: f64, p2: f64, p3: f64) -> Self {
        Self { p1, p2, p3 }
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

/// A single KRL `E6POS` sample on a spline trajectory
///
/// `index` is the global 1-based point number used to name the declaration
/// (`XP<index>`). It is never reset between chunks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct E6Pos {
    /// Global point number, starting at 1
    pub index: usize,
    /// Time elapsed since the start of the whole spline
    pub time_code: f64,
    /// Time elapsed since the previous time mark, 0 if this point is not a mark
    pub time_mark: f64,
    /// X position (mm)
    pub x: f64,
    /// Y position (mm)
    pub y: f64,
    /// Z position (mm)
    pub z: f64,
    /// A orientation (degrees)
    pub a: f64,
    /// B orientation (degrees)
    pub b: f64,
    /// C orientation (degrees)
    pub c: f64,
    /// Status flag
    pub s: i32,
    /// Turn flag
    pub t: i32,
    pub e1: f64,
    pub e2: f64,
    pub e3: f64,
    pub e4: f64,
    pub e5: f64,
    pub e6: f64,
}

impl E6Pos {
    /// Create a point at the given pose with zeroed timing and external axes
    pub fn new(index: usize, position: Vector3, orientation: Vector3, flags: AuxFlags) -> Self {
        Self {
            index,
            x: position.p1,
            y: position.p2,
            z: position.p3,
            a: orientation.p1,
            b: orientation.p2,
            c: orientation.p3,
            s: flags.s,
            t: flags.t,
            ..Self::default()
        }
    }

    /// Status/turn flags of this point
    pub fn flags(&self) -> AuxFlags {
        AuxFlags {
            s: self.s,
            t: self.t,
        }
    }

    /// True when this point carries an explicit time mark
    pub fn is_time_mark(&self) -> bool {
        self.time_mark != 0.0
    }

    /// External axes E1..E6 in order
    pub fn external_axes(&self) -> [f64; 6] {
        [self.e1, self.e2, self.e3, self.e4, self.e5, self.e6]
    }
}

/// An ordered run of points describing one complete motion path
pub type Trajectory = Vec<E6Pos>;
