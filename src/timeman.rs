//! Time Management

use std::time::{Duration, Instant};

use crate::coretypes::PlyKind;

const OVERHEAD: Duration = Duration::from_millis(10); // Expected amount of time loss in ms.

// Returns true if the duration since the start of search is gte to the provided time to move.
fn is_out_of_time(start_time: Instant, move_time: Duration) -> bool {
    start_time.elapsed() + OVERHEAD >= move_time
}

/// There are 3 supported search modes, Infinite, Depth, and MoveTime.
/// Infinite mode: do not stop searching. Search must be signaled externally to stop.
/// Depth mode: search to a given depth.
/// MoveTime mode: search for a specified time per move.
///
/// MoveTime is the mode of tournament play, where the match harness hands the
/// engine a wall-clock budget for each decision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    Infinite,           // Search until told to stop.
    Depth(Depth),       // Search to a given depth. Requires `depth`.
    MoveTime(MoveTime), // Search for a specified amount of time. Requires `movetime`.
}

impl Mode {
    /// Returns true if a search should not deepen to `ply`.
    /// Consulted between iterative-deepening iterations and periodically
    /// inside a search, so a single deep iteration cannot run long over the
    /// deadline.
    pub fn stop(&self, ply: PlyKind, start_time: Instant) -> bool {
        match self {
            Mode::Infinite => Infinite::stop(),
            Mode::Depth(depth_mode) => depth_mode.stop(ply, start_time),
            Mode::MoveTime(movetime_mode) => movetime_mode.stop(ply, start_time),
        }
    }

    /// Returns a new Infinite Mode.
    pub fn infinite() -> Self {
        Self::Infinite
    }

    /// Returns a new Depth Mode.
    pub fn depth(ply: PlyKind, movetime: Option<Duration>) -> Self {
        Self::Depth(Depth {
            depth: ply,
            movetime,
        })
    }

    /// Returns a new MoveTime mode.
    pub fn movetime(movetime: Duration, ply: Option<PlyKind>) -> Self {
        Self::MoveTime(MoveTime {
            movetime,
            depth: ply,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Infinite;

impl Infinite {
    fn stop() -> bool {
        false
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Depth {
    pub depth: PlyKind,
    movetime: Option<Duration>,
}

impl Depth {
    /// Depth mode stops when its depth limit is passed, or optionally if movetime is met.
    fn stop(&self, ply: PlyKind, start_time: Instant) -> bool {
        if ply > self.depth {
            return true;
        }

        if let Some(movetime) = self.movetime {
            if is_out_of_time(start_time, movetime) {
                return true;
            }
        }

        false
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveTime {
    movetime: Duration,
    depth: Option<PlyKind>,
}

impl MoveTime {
    /// MoveTime mode stops after a given time has passed, or optionally if its depth is passed.
    fn stop(&self, ply: PlyKind, start_time: Instant) -> bool {
        if is_out_of_time(start_time, self.movetime) {
            return true;
        }
        if let Some(depth) = self.depth {
            if ply > depth {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_mode_stops_past_depth() {
        let mode = Mode::depth(3, None);
        let start = Instant::now();
        assert!(!mode.stop(1, start));
        assert!(!mode.stop(3, start));
        assert!(mode.stop(4, start));
    }

    #[test]
    fn movetime_mode_stops_when_expired() {
        let start = Instant::now();

        let expired = Mode::movetime(Duration::ZERO, None);
        assert!(expired.stop(1, start));

        let generous = Mode::movetime(Duration::from_secs(3600), None);
        assert!(!generous.stop(1, start));
    }

    #[test]
    fn infinite_mode_never_stops() {
        let start = Instant::now();
        assert!(!Mode::infinite().stop(PlyKind::MAX, start));
    }
}
