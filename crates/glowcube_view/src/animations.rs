use std::f64::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Quaternion, Rad, Rotation, Rotation3};
use glowcube_core::{CubieStore, FaceLayer, Float, Twist, TwistError};

/// Number of animation steps in one quarter turn.
pub const TWIST_STEP_COUNT: u32 = 10;

/// An in-flight quarter-turn animation.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    /// The move being animated.
    pub twist: Twist,
    /// Face layer captured when the move started, frozen for the whole
    /// move. Face membership is *not* re-evaluated mid-animation.
    pub cubie_ids: FaceLayer,
    /// Signed rotation applied about the face's axis on each step.
    pub angle_per_step: Rad<Float>,
    /// Steps left before the quarter turn is complete.
    pub steps_remaining: u32,
}

/// Twist animation state machine: idle, or animating exactly one move.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    current: Option<TwistAnimation>,
}

impl TwistAnimationState {
    /// Starts animating `twist`. Must only be called while idle; the
    /// simulation queues moves that arrive mid-animation.
    ///
    /// Fails, leaving every transform untouched, if the face layer does
    /// not contain exactly nine cubies.
    pub fn start(&mut self, store: &CubieStore, twist: Twist) -> Result<(), TwistError> {
        debug_assert!(self.is_idle(), "twist started while one is in flight");
        let cubie_ids = store.select_face(twist.face)?;
        let angle = FRAC_PI_2 * twist.angle_sign() / Float::from(TWIST_STEP_COUNT);
        self.current = Some(TwistAnimation {
            twist,
            cubie_ids,
            angle_per_step: Rad(angle),
            steps_remaining: TWIST_STEP_COUNT,
        });
        Ok(())
    }

    /// Steps the animation forward by one increment, mutating the captured
    /// cubies' transforms in place. Returns whether the puzzle should be
    /// redrawn next frame.
    ///
    /// Each increment composes onto the live transforms rather than
    /// interpolating from an absolute start state; the lattice snap on the
    /// final step discards whatever floating-point error that accumulated.
    pub fn proceed(&mut self, store: &mut CubieStore) -> bool {
        let Some(anim) = &mut self.current else {
            return false;
        };

        let axis = anim.twist.face.axis().unit_vector();
        let rotation = Quaternion::from_axis_angle(axis, anim.angle_per_step);
        for &id in &anim.cubie_ids {
            let cubie = store.get_mut(id);
            cubie.position = rotation.rotate_point(cubie.position);
            cubie.orientation = (rotation * cubie.orientation).normalize();
        }

        anim.steps_remaining -= 1;
        let done = anim.steps_remaining == 0;
        if done {
            if let Some(finished) = self.current.take() {
                store.snap_to_lattice(&finished.cubie_ids);
            }
        }
        true
    }

    /// The in-flight animation, if any.
    pub fn current(&self) -> Option<&TwistAnimation> {
        self.current.as_ref()
    }

    /// Returns whether no animation is in flight.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use glowcube_core::{Face, TwistDirection, assert_approx_eq};
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_to_completion(anim: &mut TwistAnimationState, store: &mut CubieStore) -> u32 {
        let mut steps = 0;
        while !anim.is_idle() {
            assert!(anim.proceed(store));
            steps += 1;
            assert!(steps <= TWIST_STEP_COUNT);
        }
        steps
    }

    #[test]
    fn quarter_turn_takes_step_count_frames() {
        let mut store = CubieStore::new();
        let mut anim = TwistAnimationState::default();
        anim.start(&mut store, Twist::new(Face::Right, TwistDirection::Cw))
            .unwrap();
        assert_eq!(anim.current().unwrap().steps_remaining, TWIST_STEP_COUNT);

        assert_eq!(run_to_completion(&mut anim, &mut store), TWIST_STEP_COUNT);
        assert!(!anim.proceed(&mut store));
    }

    #[test]
    fn up_layer_rotates_ninety_degrees_about_y() {
        let mut store = CubieStore::new();
        let layer = store.face_layer(Face::Up);
        let before: Vec<_> = layer.iter().map(|&id| store.get(id).position).collect();

        // Positive rotation about +Y is a counterclockwise U turn.
        let mut anim = TwistAnimationState::default();
        anim.start(&mut store, Twist::new(Face::Up, TwistDirection::Ccw))
            .unwrap();
        run_to_completion(&mut anim, &mut store);

        let quarter = Quaternion::from_axis_angle(
            cgmath::Vector3::unit_y(),
            Rad(FRAC_PI_2),
        );
        for (&id, &start) in layer.iter().zip(&before) {
            assert_approx_eq!(store.get(id).position, quarter.rotate_point(start));
        }
        // The captured layer is the 9 cubies that started with y > 1, and
        // they still form the U layer afterwards.
        assert_eq!(store.face_layer(Face::Up), layer);
    }

    #[test]
    fn four_quarter_turns_restore_the_cube() {
        let mut store = CubieStore::new();
        let before = store.clone();

        let mut anim = TwistAnimationState::default();
        for _ in 0..4 {
            anim.start(&mut store, Twist::new(Face::Front, TwistDirection::Cw))
                .unwrap();
            run_to_completion(&mut anim, &mut store);
        }

        for (id, cubie) in store.iter() {
            let start = before.get(id);
            assert_approx_eq!(cubie.position, start.position);
            // Compare as rotation matrices; a 360° quaternion is the
            // negation of the identity.
            assert_approx_eq!(
                cgmath::Matrix3::from(cubie.orientation),
                cgmath::Matrix3::from(start.orientation),
            );
        }
    }

    #[test]
    fn completed_moves_leave_positions_on_the_lattice() {
        let mut store = CubieStore::new();
        let mut anim = TwistAnimationState::default();
        for twist in [
            Twist::new(Face::Right, TwistDirection::Cw),
            Twist::new(Face::Up, TwistDirection::Ccw),
            Twist::new(Face::Back, TwistDirection::Cw),
        ] {
            anim.start(&mut store, twist).unwrap();
            run_to_completion(&mut anim, &mut store);
        }

        for (_, cubie) in store.iter() {
            let p = cubie.position / glowcube_core::CUBIE_PITCH;
            assert_approx_eq!(p.x, p.x.round());
            assert_approx_eq!(p.y, p.y.round());
            assert_approx_eq!(p.z, p.z.round());
        }
        // Every face still selects cleanly.
        for face in Face::ALL {
            assert!(store.select_face(face).is_ok());
        }
    }

    #[test]
    fn selection_mismatch_leaves_transforms_unchanged() {
        let mut store = CubieStore::new();
        let id = store.face_layer(Face::Right)[0];
        store.get_mut(id).position.x = 0.5;
        let before = store.clone();

        let mut anim = TwistAnimationState::default();
        let result = anim.start(&mut store, Twist::new(Face::Right, TwistDirection::Cw));
        assert!(matches!(
            result,
            Err(TwistError::SelectionMismatch { face: Face::Right, count: 8 })
        ));
        assert!(anim.is_idle());
        assert_eq!(store, before);
    }
}
