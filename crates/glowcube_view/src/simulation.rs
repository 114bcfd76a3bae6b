use std::collections::VecDeque;

use glowcube_core::{CubieStore, Twist, TwistError};
use log::error;

use crate::animations::TwistAnimationState;
use crate::autoplay::AutoPlay;
use crate::view::{AssemblyPose, Camera, OrbitDirection};

/// Cube simulation, which owns the cubie transforms, the twist animation
/// state, the pending move queue, and the auto-play driver.
///
/// One instance is one independent puzzle; nothing is shared between
/// instances. The embedding frame loop calls [`CubeSimulation::step`] once
/// per tick.
#[derive(Debug)]
pub struct CubeSimulation {
    /// The 27 cubie transforms. The animation state is their only writer
    /// while a move is in flight.
    cubies: CubieStore,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
    /// Moves waiting behind the in-flight one, in submission order.
    pending: VecDeque<Twist>,
    /// Auto-play driver.
    autoplay: AutoPlay,
    /// Whole-assembly orientation.
    assembly: AssemblyPose,
    /// Total number of moves that have run to completion.
    completed_moves: u64,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSimulation {
    /// Constructs a solved, idle simulation.
    pub fn new() -> Self {
        Self::with_autoplay(AutoPlay::new())
    }

    /// Constructs a simulation whose auto-play driver is deterministic.
    pub fn with_autoplay_seed(seed: u64) -> Self {
        Self::with_autoplay(AutoPlay::from_seed(seed))
    }

    fn with_autoplay(autoplay: AutoPlay) -> Self {
        CubeSimulation {
            cubies: CubieStore::new(),
            twist_anim: TwistAnimationState::default(),
            pending: VecDeque::new(),
            autoplay,
            assembly: AssemblyPose::default(),
            completed_moves: 0,
        }
    }

    /// Read access to the cubie transforms, for rendering and reporting.
    pub fn cubies(&self) -> &CubieStore {
        &self.cubies
    }

    /// Whole-assembly orientation, for rendering.
    pub fn assembly(&self) -> AssemblyPose {
        self.assembly
    }

    /// Submits a move request.
    ///
    /// If no move is animating, the move starts immediately and its first
    /// animation step runs on the next [`CubeSimulation::step`]. Otherwise
    /// it is appended to the FIFO queue behind the in-flight move. Every
    /// accepted request eventually runs exactly once, in submission order;
    /// there is no merging, deduplication, or cancellation.
    pub fn twist(&mut self, twist: Twist) -> Result<(), TwistError> {
        if self.twist_anim.is_idle() && self.pending.is_empty() {
            self.twist_anim.start(&self.cubies, twist)
        } else {
            self.pending.push_back(twist);
            Ok(())
        }
    }

    /// Advances the engine by one cooperative frame tick: polls the
    /// auto-play driver, advances the in-flight animation by one step, and
    /// starts the next queued move when the in-flight one completes.
    /// Returns whether the puzzle should be redrawn.
    pub fn step(&mut self) -> bool {
        if let Some(twist) = self.autoplay.poll() {
            if let Err(e) = self.twist(twist) {
                error!("auto-play move dropped: {e}");
            }
        }

        let was_animating = !self.twist_anim.is_idle();
        let mut needs_redraw = self.twist_anim.proceed(&mut self.cubies);

        if self.twist_anim.is_idle() {
            if was_animating {
                self.completed_moves += 1;
            }
            // A queued move that fails selection when it finally starts is
            // dropped (with a diagnostic) and the next one is tried.
            while let Some(next) = self.pending.pop_front() {
                match self.twist_anim.start(&self.cubies, next) {
                    Ok(()) => {
                        needs_redraw = true;
                        break;
                    }
                    Err(e) => error!("queued move {next} dropped: {e}"),
                }
            }
        }

        needs_redraw
    }

    /// Returns whether a move is currently animating.
    pub fn is_animating(&self) -> bool {
        !self.twist_anim.is_idle()
    }

    /// The move currently being animated, if any.
    pub fn current_twist(&self) -> Option<Twist> {
        self.twist_anim.current().map(|anim| anim.twist)
    }

    /// Number of moves queued behind the in-flight one.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total number of moves that have run to completion since
    /// construction. Still counts a completion when the next queued move
    /// starts in the same tick.
    pub fn completed_moves(&self) -> u64 {
        self.completed_moves
    }

    /// Starts or stops the auto-play driver. Never interrupts an in-flight
    /// move.
    pub fn toggle_autoplay(&mut self) {
        self.autoplay.toggle();
    }

    /// Returns whether auto-play is running.
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Rotates the whole assembly. Immediate and unlimited; orbit inputs
    /// are never queued because they touch state disjoint from the cubie
    /// transforms.
    pub fn orbit(&mut self, direction: OrbitDirection) {
        self.assembly.orbit(direction);
    }

    /// Resets the camera and the whole-assembly orientation to the
    /// canonical view. Does not touch cubie transforms.
    pub fn reset_view(&mut self, camera: &mut Camera) {
        camera.reset();
        self.assembly.reset();
    }
}
