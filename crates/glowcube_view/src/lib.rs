//! Face-rotation animation engine for the glowcube puzzle: twist animation
//! state machine, FIFO move queue, auto-play driver, and camera rig.
//!
//! The engine is single-threaded and cooperative. The embedding frame loop
//! calls [`CubeSimulation::step`] once per tick (frame, timer, or test
//! clock); each call advances the in-flight animation by exactly one step
//! and reports whether a redraw is needed. Rendering itself is an external
//! collaborator that reads the cubie transforms.

mod animations;
mod autoplay;
mod simulation;
mod view;

pub use animations::{TWIST_STEP_COUNT, TwistAnimation, TwistAnimationState};
pub use autoplay::{AUTOPLAY_PERIOD, AutoPlay};
pub use simulation::CubeSimulation;
pub use view::{ASSEMBLY_TILT, AssemblyPose, CAMERA_DISTANCE, Camera, ORBIT_STEP, OrbitDirection};
