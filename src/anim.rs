//! Per-rectangle animation progress.
//!
//! Each rectangle carries one `Progress`: a scalar in [0,1] plus the sign of
//! travel. A leg runs from one resting endpoint to the other in fixed steps
//! driven purely by tick count, so the motion is deterministic regardless of
//! how the caller schedules ticks.

/// Outcome of [`Progress::begin_cycle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleStart {
    /// A new leg started toward the opposite endpoint.
    Started,
    /// A leg is already in flight; the call had no effect.
    AlreadyRunning,
}

/// Outcome of [`Progress::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The node was at rest; the call had no effect.
    Idle,
    /// The leg moved one step and is still in flight.
    Continuing,
    /// The leg reached its endpoint; the node is back at rest.
    Completed,
}

/// Expand/collapse progress for one rectangle.
///
/// `prev_scale` remembers the resting endpoint the current leg departed from
/// (exactly 0.0 or 1.0); `dir` is 0 while at rest. Invariant: `dir == 0`
/// implies `scale == prev_scale`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Progress {
    scale: f64,
    prev_scale: f64,
    dir: i8,
}

impl Progress {
    /// Current interpolation value for rendering. Transiently overshoots the
    /// [0,1] band by less than one step right before the completion snap.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0
    }

    /// Starts a new leg toward the opposite resting endpoint. Refused while a
    /// leg is running, so at most one leg per node is ever in flight.
    pub fn begin_cycle(&mut self) -> CycleStart {
        if self.dir != 0 {
            return CycleStart::AlreadyRunning;
        }
        // At rest the scale is exactly 0 or 1, so this yields +1 or -1.
        self.dir = (1.0 - 2.0 * self.prev_scale) as i8;
        CycleStart::Started
    }

    /// Advances the running leg by `step`. Once the distance travelled from
    /// the departure endpoint exceeds `threshold`, the scale snaps to the far
    /// endpoint exactly (cancelling accumulated float drift) and the node
    /// returns to rest.
    pub fn advance(&mut self, step: f64, threshold: f64) -> Step {
        if self.dir == 0 {
            return Step::Idle;
        }
        self.scale += step * f64::from(self.dir);
        if (self.scale - self.prev_scale).abs() > threshold {
            self.scale = self.prev_scale + f64::from(self.dir);
            self.dir = 0;
            self.prev_scale = self.scale;
            Step::Completed
        } else {
            Step::Continuing
        }
    }
}
