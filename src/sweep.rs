//! Full-rotation sweep of the crank.
use crate::{JansenLeg, JointFrame, SolveError};
use std::f64::consts::TAU;
use tracing::debug;

/// What to do when one angle of a sweep fails to solve.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum SweepMode {
    /// Abort the sweep at the first failing angle.
    #[default]
    Stop,
    /// Drop the failing angle and keep sweeping.
    Skip,
}

/// A per-angle failure kept aside during a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepFailure {
    /// The crank angle that failed (radians)
    pub angle: f64,
    /// Why it failed
    pub error: SolveError,
}

/// Solved frames in increasing-angle order, with failures kept aside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// Successfully solved frames
    pub frames: Vec<JointFrame>,
    /// Angles that failed to solve
    pub failures: Vec<SweepFailure>,
}

impl Trajectory {
    /// True when every sampled angle solved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Path traced by the crank tip.
    pub fn crank_path(&self) -> Vec<[f64; 2]> {
        self.frames.iter().map(|f| f.crank).collect()
    }

    /// Path traced by the foot.
    pub fn foot_path(&self) -> Vec<[f64; 2]> {
        self.frames.iter().map(|f| f.foot).collect()
    }
}

impl JansenLeg {
    /// Sweep `res` evenly spaced crank angles over `[0, 2π)`.
    pub fn sweep(&self, res: usize, mode: SweepMode) -> Trajectory {
        let interval = TAU / res as f64;
        self.sweep_angles((0..res).map(move |i| i as f64 * interval), mode)
    }

    /// Sweep an arbitrary angle sequence.
    pub fn sweep_angles<I>(&self, angles: I, mode: SweepMode) -> Trajectory
    where
        I: IntoIterator<Item = f64>,
    {
        let mut traj = Trajectory::default();
        for angle in angles {
            match self.solve(angle) {
                Ok(frame) => traj.frames.push(frame),
                Err(error) => {
                    debug!(angle, %error, "sweep sample failed");
                    traj.failures.push(SweepFailure { angle, error });
                    if mode == SweepMode::Stop {
                        break;
                    }
                }
            }
        }
        traj
    }
}
