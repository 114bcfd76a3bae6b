use std::fmt;

use cgmath::Point3;

use crate::{Axis, FACE_LAYER_THRESHOLD, Float};

/// Sign of a nonzero coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Returns `-1.0` or `1.0`.
    pub fn to_float(self) -> Float {
        match self {
            Sign::Neg => -1.0,
            Sign::Pos => 1.0,
        }
    }

    /// Returns `-1` or `1`.
    pub fn to_int(self) -> i8 {
        self as i8
    }
}

/// One of the six outer faces of the cube, carrying its axis and threshold
/// sign as data.
///
/// A face identifies both a set of sticker colors and a rotatable layer:
/// the nine cubies whose current position satisfies [`Face::contains`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    /// +X face.
    Right,
    /// −X face.
    Left,
    /// +Y face.
    Up,
    /// −Y face.
    Down,
    /// +Z face.
    Front,
    /// −Z face.
    Back,
}

impl Face {
    /// All six faces, in the same order as the enum (and as each cubie's
    /// sticker array).
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Sign of the face along its axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::Right | Face::Up | Face::Front => Sign::Pos,
            Face::Left | Face::Down | Face::Back => Sign::Neg,
        }
    }

    /// Returns whether a cubie at `position` currently belongs to this
    /// face's layer.
    ///
    /// The test is purely spatial: the signed coordinate along the face's
    /// axis must exceed [`FACE_LAYER_THRESHOLD`]. No snapping or
    /// normalization is applied to `position`.
    pub fn contains(self, position: Point3<Float>) -> bool {
        self.axis().of(position) * self.sign().to_float() > FACE_LAYER_THRESHOLD
    }

    /// Standard cube-notation letter for the face.
    pub fn letter(self) -> char {
        match self {
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Face for a standard cube-notation letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<Face> {
        match c.to_ascii_uppercase() {
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CUBIE_PITCH;

    #[test]
    fn face_letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
            assert_eq!(Face::from_letter(face.letter().to_ascii_lowercase()), Some(face));
        }
        assert_eq!(Face::from_letter('q'), None);
    }

    #[test]
    fn layer_predicate_uses_signed_threshold() {
        let outer = Point3::new(CUBIE_PITCH, 0.0, 0.0);
        assert!(Face::Right.contains(outer));
        assert!(!Face::Left.contains(outer));
        assert!(!Face::Up.contains(outer));

        // The middle slice belongs to no face.
        let center = Point3::new(0.0, 0.0, 0.0);
        for face in Face::ALL {
            assert!(!face.contains(center));
        }
    }

    #[test]
    fn each_axis_has_two_opposite_faces() {
        for face in Face::ALL {
            let opposites = Face::ALL
                .into_iter()
                .filter(|f| f.axis() == face.axis() && f.sign() != face.sign())
                .count();
            assert_eq!(opposites, 1);
        }
    }
}
