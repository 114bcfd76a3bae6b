//! 3×3×3 twisty-cube model: cubies, faces, twists, and face-layer selection.
//!
//! The cube is represented spatially: each of the 27 cubies carries a
//! continuous position and orientation, and face membership is recomputed
//! from the current positions on every move. Completed moves snap the moved
//! layer back to the lattice, so floating-point error never accumulates
//! across moves.

pub use {approx, cgmath, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Distance between adjacent cubie centers (cubie size plus gap).
pub const CUBIE_PITCH: Float = 1.1;

/// A cubie belongs to a face layer when its signed coordinate along the
/// face's axis exceeds this value.
pub const FACE_LAYER_THRESHOLD: Float = 1.0;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

mod axis;
mod cubie;
mod face;
mod twist;

pub use axis::Axis;
pub use cubie::{Cubie, CubieId, CubieStore, FACE_LAYER_SIZE, FaceLayer, Sticker, TwistError};
pub use face::{Face, Sign};
pub use twist::{ParseTwistError, Twist, TwistDirection};
