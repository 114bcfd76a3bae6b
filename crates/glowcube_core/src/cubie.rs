use std::fmt;

use cgmath::{InnerSpace, One, Point3, Quaternion, Rotation};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{Axis, CUBIE_PITCH, Face, Float};

/// Number of cubies in one face layer.
pub const FACE_LAYER_SIZE: usize = 9;

/// Cubies currently occupying one face layer.
pub type FaceLayer = SmallVec<[CubieId; FACE_LAYER_SIZE]>;

/// Sticker color on one side of a cubie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sticker {
    /// `R` face color.
    Red,
    /// `L` face color.
    Orange,
    /// `U` face color.
    White,
    /// `D` face color.
    Yellow,
    /// `F` face color.
    Green,
    /// `B` face color.
    Blue,
    /// Interior side with no visible sticker.
    Hidden,
}

impl Sticker {
    /// Color of the face's stickers on a solved cube.
    pub fn for_face(face: Face) -> Sticker {
        match face {
            Face::Right => Sticker::Red,
            Face::Left => Sticker::Orange,
            Face::Up => Sticker::White,
            Face::Down => Sticker::Yellow,
            Face::Front => Sticker::Green,
            Face::Back => Sticker::Blue,
        }
    }

    /// Single-letter abbreviation (`.` for hidden sides).
    pub fn letter(self) -> char {
        match self {
            Sticker::Red => 'R',
            Sticker::Orange => 'O',
            Sticker::White => 'W',
            Sticker::Yellow => 'Y',
            Sticker::Green => 'G',
            Sticker::Blue => 'B',
            Sticker::Hidden => '.',
        }
    }
}

/// ID of a cubie in a [`CubieStore`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(
    /// Index into the store's cubie list.
    pub u8,
);

impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the 27 rigid sub-blocks of the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    /// Current center position. Continuous; mutated only by the animation
    /// engine.
    pub position: Point3<Float>,
    /// Current orientation. Continuous; mutated only by the animation
    /// engine.
    pub orientation: Quaternion<Float>,
    /// Sticker colors indexed by [`Face::ALL`] order, fixed at
    /// construction from the cubie's initial lattice coordinates.
    stickers: [Sticker; 6],
}

impl Cubie {
    fn at_lattice(ix: i8, iy: i8, iz: i8) -> Self {
        let stickers = Face::ALL.map(|face| {
            let coord = match face.axis() {
                Axis::X => ix,
                Axis::Y => iy,
                Axis::Z => iz,
            };
            if coord == face.sign().to_int() {
                Sticker::for_face(face)
            } else {
                Sticker::Hidden
            }
        });
        Cubie {
            position: Point3::new(ix as Float, iy as Float, iz as Float) * CUBIE_PITCH,
            orientation: Quaternion::one(),
            stickers,
        }
    }

    /// Sticker color on the cubie's own (body-fixed) `face` side.
    pub fn sticker(&self, face: Face) -> Sticker {
        self.stickers[face as usize]
    }

    /// Sticker color currently pointing in the world-space direction of
    /// `face`, accounting for the cubie's orientation.
    pub fn sticker_toward(&self, face: Face) -> Sticker {
        let world_normal = face.axis().unit_vector() * face.sign().to_float();
        let local_normal = self.orientation.invert().rotate_vector(world_normal);
        let toward = Face::ALL
            .into_iter()
            .max_by(|a, b| {
                let dot = |f: &Face| {
                    local_normal.dot(f.axis().unit_vector() * f.sign().to_float())
                };
                dot(a).total_cmp(&dot(b))
            })
            .unwrap_or(face);
        self.sticker(toward)
    }
}

/// Error from a face-rotation request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// The face-layer selection matched the wrong number of cubies, so the
    /// move was refused and no transform was touched.
    #[error("face {face} layer selected {count} cubies; expected {FACE_LAYER_SIZE}")]
    SelectionMismatch {
        /// Requested face.
        face: Face,
        /// Number of cubies that matched the face's spatial predicate.
        count: usize,
    },
}

/// Owner of the 27 cubie transforms that together represent the puzzle's
/// physical configuration.
///
/// Cubies are created once from the 3×3×3 lattice and never destroyed;
/// only their positions and orientations change.
#[derive(Debug, Clone, PartialEq)]
pub struct CubieStore {
    cubies: Vec<Cubie>,
}

impl Default for CubieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CubieStore {
    /// Constructs the solved cube: exactly 27 cubies, one per lattice
    /// coordinate in `{-1, 0, 1}³`, spaced [`CUBIE_PITCH`] apart.
    pub fn new() -> Self {
        let mut cubies = vec![];
        for ix in -1..=1 {
            for iy in -1..=1 {
                for iz in -1..=1 {
                    cubies.push(Cubie::at_lattice(ix, iy, iz));
                }
            }
        }
        CubieStore { cubies }
    }

    /// Number of cubies (always 27).
    pub fn len(&self) -> usize {
        self.cubies.len()
    }

    /// Always false; the store is never empty.
    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
    }

    /// Iterates over all cubies with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (CubieId, &Cubie)> {
        self.cubies
            .iter()
            .enumerate()
            .map(|(i, cubie)| (CubieId(i as u8), cubie))
    }

    /// Returns the cubie with the given ID.
    pub fn get(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.0 as usize]
    }

    /// Returns the cubie with the given ID, mutably.
    pub fn get_mut(&mut self, id: CubieId) -> &mut Cubie {
        &mut self.cubies[id.0 as usize]
    }

    /// Returns the cubies whose *current* position lies in `face`'s layer.
    ///
    /// No count validation is performed; see [`CubieStore::select_face`].
    pub fn face_layer(&self, face: Face) -> FaceLayer {
        self.iter()
            .filter(|(_, cubie)| face.contains(cubie.position))
            .map(|(id, _)| id)
            .collect()
    }

    /// Selects `face`'s layer for a move, validating that it contains
    /// exactly [`FACE_LAYER_SIZE`] cubies.
    ///
    /// A mismatched count means a cubie has drifted off the lattice (or a
    /// caller corrupted a transform); rotating such a selection would
    /// permanently scramble the cube's geometry, so the move must not
    /// proceed.
    pub fn select_face(&self, face: Face) -> Result<FaceLayer, TwistError> {
        let layer = self.face_layer(face);
        if layer.len() != FACE_LAYER_SIZE {
            return Err(TwistError::SelectionMismatch {
                face,
                count: layer.len(),
            });
        }
        Ok(layer)
    }

    /// Rounds each listed cubie's position to the nearest lattice point,
    /// discarding floating-point error accumulated during an animation.
    pub fn snap_to_lattice(&mut self, ids: &[CubieId]) {
        let snap = |x: Float| (x / CUBIE_PITCH).round() * CUBIE_PITCH;
        for &id in ids {
            let position = &mut self.get_mut(id).position;
            *position = position.map(snap);
        }
    }
}
