use cgmath::{Deg, Point3, Rad};
use glowcube_core::Float;

/// Canonical camera distance from the cube's center.
pub const CAMERA_DISTANCE: Float = 6.0;

/// Canonical display tilt of the whole assembly (pitch, yaw).
pub const ASSEMBLY_TILT: (Deg<Float>, Deg<Float>) = (Deg(30.0), Deg(45.0));

/// Whole-assembly rotation applied per orbit input.
pub const ORBIT_STEP: Deg<Float> = Deg(10.0);

/// Perspective camera parameters, consumed by the external renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position.
    pub position: Point3<Float>,
    /// Vertical field of view.
    pub fov_y: Deg<Float>,
    /// Viewport aspect ratio (width / height).
    pub aspect: Float,
    /// Near clip plane.
    pub near: Float,
    /// Far clip plane.
    pub far: Float,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Point3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_y: Deg(75.0),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Recomputes the projection for a new viewport size. Pure passthrough
    /// from the window-resize signal.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = Float::from(width) / Float::from(height);
        }
    }

    /// Resets the camera to the canonical pose, keeping the current
    /// viewport aspect ratio.
    pub fn reset(&mut self) {
        *self = Camera {
            aspect: self.aspect,
            ..Camera::default()
        };
    }
}

/// Free orientation of the whole assembly, distinct from the individual
/// cubie transforms. Mutated directly by orbit inputs; never queued.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AssemblyPose {
    /// Rotation about the X axis.
    pub pitch: Rad<Float>,
    /// Rotation about the Y axis.
    pub yaw: Rad<Float>,
}

impl Default for AssemblyPose {
    fn default() -> Self {
        AssemblyPose {
            pitch: ASSEMBLY_TILT.0.into(),
            yaw: ASSEMBLY_TILT.1.into(),
        }
    }
}

impl AssemblyPose {
    /// Applies one orbit input.
    pub fn orbit(&mut self, direction: OrbitDirection) {
        let step = Rad::from(ORBIT_STEP);
        match direction {
            OrbitDirection::Up => self.pitch += step,
            OrbitDirection::Down => self.pitch -= step,
            OrbitDirection::Right => self.yaw += step,
            OrbitDirection::Left => self.yaw -= step,
        }
    }

    /// Restores the canonical display tilt.
    pub fn reset(&mut self) {
        *self = AssemblyPose::default();
    }
}

/// Whole-assembly orbit input (the arrow keys, in the reference UI).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrbitDirection {
    /// Pitch the assembly up.
    Up,
    /// Pitch the assembly down.
    Down,
    /// Yaw the assembly left.
    Left,
    /// Yaw the assembly right.
    Right,
}

#[cfg(test)]
mod tests {
    use glowcube_core::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn orbit_steps_accumulate_and_reset() {
        let mut pose = AssemblyPose::default();
        pose.orbit(OrbitDirection::Up);
        pose.orbit(OrbitDirection::Up);
        pose.orbit(OrbitDirection::Left);
        assert_approx_eq!(pose.pitch.0, Rad::from(Deg(50.0)).0);
        assert_approx_eq!(pose.yaw.0, Rad::from(Deg(35.0)).0);

        pose.reset();
        assert_eq!(pose, AssemblyPose::default());
    }

    #[test]
    fn viewport_resize_updates_aspect_and_survives_reset() {
        let mut camera = Camera::default();
        camera.set_viewport(1920, 1080);
        assert_approx_eq!(camera.aspect, 1920.0 / 1080.0);

        camera.position = Point3::new(1.0, 2.0, 3.0);
        camera.reset();
        assert_eq!(camera.position, Point3::new(0.0, 0.0, CAMERA_DISTANCE));
        assert_approx_eq!(camera.aspect, 1920.0 / 1080.0);

        // Degenerate sizes are ignored.
        camera.set_viewport(100, 0);
        assert_approx_eq!(camera.aspect, 1920.0 / 1080.0);
    }
}
