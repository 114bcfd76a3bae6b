use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Face, Float};

/// Direction of a quarter turn, as seen looking at the face from outside
/// the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    Cw,
    /// Counterclockwise.
    Ccw,
}

impl TwistDirection {
    /// Sign of the rotation angle about the face's outward normal.
    ///
    /// By the right-hand rule, a counterclockwise turn (viewed from
    /// outside) is a positive rotation about the outward normal.
    pub fn sign(self) -> Float {
        match self {
            TwistDirection::Cw => -1.0,
            TwistDirection::Ccw => 1.0,
        }
    }

    /// Reverse direction.
    #[must_use]
    pub fn rev(self) -> TwistDirection {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }
}

/// A move request: one quarter turn of one face layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face layer to rotate.
    pub face: Face,
    /// Turn direction.
    pub direction: TwistDirection,
}

impl Twist {
    /// All 12 canonical moves (6 faces × 2 directions).
    pub const ALL: [Twist; 12] = [
        Twist::new(Face::Right, TwistDirection::Cw),
        Twist::new(Face::Right, TwistDirection::Ccw),
        Twist::new(Face::Left, TwistDirection::Cw),
        Twist::new(Face::Left, TwistDirection::Ccw),
        Twist::new(Face::Up, TwistDirection::Cw),
        Twist::new(Face::Up, TwistDirection::Ccw),
        Twist::new(Face::Down, TwistDirection::Cw),
        Twist::new(Face::Down, TwistDirection::Ccw),
        Twist::new(Face::Front, TwistDirection::Cw),
        Twist::new(Face::Front, TwistDirection::Ccw),
        Twist::new(Face::Back, TwistDirection::Cw),
        Twist::new(Face::Back, TwistDirection::Ccw),
    ];

    /// Constructs a move request.
    pub const fn new(face: Face, direction: TwistDirection) -> Twist {
        Twist { face, direction }
    }

    /// Sign of the rotation angle about the face's *axis* unit vector.
    ///
    /// This folds the face's own sign into the turn direction: a clockwise
    /// turn of `R` (+X) is a negative rotation about +X, while a clockwise
    /// turn of `L` (−X) is a positive one.
    pub fn angle_sign(self) -> Float {
        self.direction.sign() * self.face.sign().to_float()
    }

    /// Inverse move.
    #[must_use]
    pub fn rev(self) -> Twist {
        Twist {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            TwistDirection::Cw => write!(f, "{}", self.face),
            TwistDirection::Ccw => write!(f, "{}'", self.face),
        }
    }
}

/// Error emitted when parsing a string that is not standard cube notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid twist notation {0:?}")]
pub struct ParseTwistError(
    /// The rejected input.
    pub String,
);

impl FromStr for Twist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTwistError(s.to_string());
        let mut chars = s.chars();
        let face = Face::from_letter(chars.next().ok_or_else(err)?).ok_or_else(err)?;
        let direction = match chars.next() {
            None => TwistDirection::Cw,
            Some('\'') if chars.next().is_none() => TwistDirection::Ccw,
            _ => return Err(err()),
        };
        Ok(Twist { face, direction })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn twelve_distinct_canonical_moves() {
        let distinct: HashSet<Twist> = Twist::ALL.into_iter().collect();
        assert_eq!(distinct.len(), 12);
        for face in Face::ALL {
            assert!(Twist::ALL.iter().any(|t| t.face == face));
        }
    }

    #[test]
    fn notation_round_trips() {
        for twist in Twist::ALL {
            assert_eq!(twist.to_string().parse(), Ok(twist));
        }
        assert_eq!("u'".parse::<Twist>(), Ok(Twist {
            face: Face::Up,
            direction: TwistDirection::Ccw,
        }));
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for bad in ["", "X", "R2", "R''", "RU", " R"] {
            assert!(bad.parse::<Twist>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn angle_sign_folds_face_sign() {
        let r = Twist {
            face: Face::Right,
            direction: TwistDirection::Cw,
        };
        let l = Twist {
            face: Face::Left,
            direction: TwistDirection::Cw,
        };
        assert_eq!(r.angle_sign(), -1.0);
        assert_eq!(l.angle_sign(), 1.0);
        assert_eq!(r.rev().angle_sign(), 1.0);
    }
}
