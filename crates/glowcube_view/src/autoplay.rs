use glowcube_core::Twist;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use web_time::{Duration, Instant};

/// Time between auto-play moves.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(500);

/// Timer-driven generator of random face moves.
///
/// The driver only produces move requests; it never interrupts an
/// animation. Moves are drawn uniformly from all 12 canonical moves, with
/// no exclusion of the previous move (so a move may be immediately undone
/// by its inverse).
#[derive(Debug, Clone)]
pub struct AutoPlay {
    /// Deadline for the next move, or `None` when stopped.
    next_tick: Option<Instant>,
    period: Duration,
    rng: StdRng,
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlay {
    /// Constructs a stopped driver with an OS-seeded RNG.
    pub fn new() -> Self {
        AutoPlay {
            next_tick: None,
            period: AUTOPLAY_PERIOD,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Constructs a stopped driver with a deterministic RNG, for tests and
    /// reproducible demos.
    pub fn from_seed(seed: u64) -> Self {
        AutoPlay {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Overrides the tick period (tests use [`Duration::ZERO`]).
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Begins issuing a random move every tick period. Idempotent; the
    /// first move is issued one full period after starting.
    pub fn start(&mut self) {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + self.period);
        }
    }

    /// Stops issuing moves. Idempotent.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Flips between running and stopped.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Returns whether the driver is running.
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Called once per frame; returns a uniformly random move when the
    /// tick period has elapsed.
    pub fn poll(&mut self) -> Option<Twist> {
        let deadline = self.next_tick?;
        if Instant::now() < deadline {
            return None;
        }
        self.next_tick = Some(deadline + self.period);
        Twist::ALL.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stop_before_first_tick_yields_nothing() {
        let mut autoplay = AutoPlay::from_seed(0);
        autoplay.start();
        autoplay.stop();
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.poll(), None);
    }

    #[test]
    fn stopped_driver_never_ticks() {
        let mut autoplay = AutoPlay::from_seed(0).with_period(Duration::ZERO);
        assert_eq!(autoplay.poll(), None);
    }

    #[test]
    fn poll_before_period_elapses_yields_nothing() {
        let mut autoplay = AutoPlay::from_seed(0);
        autoplay.start();
        // The 500 ms period cannot have elapsed yet.
        assert_eq!(autoplay.poll(), None);
        assert!(autoplay.is_running());
    }

    #[test]
    fn elapsed_period_yields_canonical_moves() {
        let mut autoplay = AutoPlay::from_seed(42).with_period(Duration::ZERO);
        autoplay.start();
        for _ in 0..100 {
            let twist = autoplay.poll().expect("period elapsed");
            assert!(Twist::ALL.contains(&twist));
        }
    }

    #[test]
    fn toggle_flips_running_state() {
        let mut autoplay = AutoPlay::from_seed(0);
        assert!(!autoplay.is_running());
        autoplay.toggle();
        assert!(autoplay.is_running());
        autoplay.toggle();
        assert!(!autoplay.is_running());
        // start/stop are idempotent
        autoplay.start();
        autoplay.start();
        assert!(autoplay.is_running());
        autoplay.stop();
        autoplay.stop();
        assert!(!autoplay.is_running());
    }
}
