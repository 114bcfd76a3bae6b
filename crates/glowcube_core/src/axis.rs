use std::fmt;

use cgmath::{Point3, Vector3};

use crate::Float;

/// Coordinate axis in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (`Right`/`Left` faces).
    X,
    /// Y axis (`Up`/`Down` faces).
    Y,
    /// Z axis (`Front`/`Back` faces).
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit_vector(self) -> Vector3<Float> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Returns the point's coordinate along the axis.
    pub fn of(self, point: Point3<Float>) -> Float {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
