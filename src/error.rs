//! Error types of the solver pipeline.
//!
//! Configuration problems ([`ConfigError`]) are fatal before any angle is
//! solved. Per-angle problems ([`SolveError`]) are local to their angle and
//! never abort a sweep on their own; the sweep policy decides that.
use crate::geom::Circle;
use crate::leg::Stage;
use thiserror::Error;

/// Why two circles fail to intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    /// Disjoint, the centers are farther apart than the radii reach.
    Outside,
    /// One circle lies strictly inside the other.
    Inside,
    /// The discriminant went negative from rounding near tangency.
    Tangency,
}

impl std::fmt::Display for Separation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::Outside => "outside",
            Self::Inside => "inside",
            Self::Tangency => "tangency",
        })
    }
}

/// Failures of the two-circle intersection primitive.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// Coincident centers leave the intersection undefined.
    #[error("degenerate circles with coincident centers: {0} vs {1}")]
    DegenerateCircles(Circle, Circle),
    /// The circle boundaries never cross.
    #[error("no intersection ({sep}) between {c1} and {c2}")]
    NoIntersection {
        /// First circle
        c1: Circle,
        /// Second circle
        c2: Circle,
        /// How the circles miss each other
        sep: Separation,
    },
}

/// Static link-length rejections, raised once per configuration before any
/// solve runs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// A [`LinkSet`](crate::LinkSet) was built from a slice of the wrong length.
    #[error("expected 11 links, got {got}")]
    WrongLinkCount {
        /// Number of lengths supplied
        got: usize,
    },
    /// Rod lengths must be positive.
    #[error("rod {index} must have a positive length")]
    NonPositive {
        /// Offending rod index
        index: usize,
    },
    /// Rods 1 and 3 cannot span the crank at full extension.
    #[error("cannot extend rods 1 and 3 enough: reach {reach:.4} >= {limit:.4}")]
    Reach13 {
        /// Farthest crank-tip distance from the second pivot
        reach: f64,
        /// Combined length of rods 1 and 3
        limit: f64,
    },
    /// Rods 2 and 4 cannot span the crank at full extension.
    #[error("cannot extend rods 2 and 4 enough: reach {reach:.4} >= {limit:.4}")]
    Reach24 {
        /// Farthest crank-tip distance from the second pivot
        reach: f64,
        /// Combined length of rods 2 and 4
        limit: f64,
    },
    /// Rod 3 must be shorter than rods 5 + 6.
    #[error("rod 3 must be shorter than rods 5 + 6")]
    Triangle356,
    /// Rod 7 must be shorter than rods 9 + 10.
    #[error("rod 7 must be shorter than rods 9 + 10")]
    Triangle7910,
}

/// Per-angle solve failures, recoverable by skipping the angle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// A pipeline stage's circles did not intersect.
    #[error("stage {stage} failed: {source}")]
    Stage {
        /// Which rod pair could not be closed
        stage: Stage,
        /// The underlying intersection failure
        source: GeomError,
    },
    /// The foot came out at or above a joint it must hang below, so the
    /// wrong branch was kept or the leg folded past a singularity.
    #[error("implausible geometry: foot y {foot_y:.4} >= joint {joint} y {joint_y:.4}")]
    Implausible {
        /// Solved foot height
        foot_y: f64,
        /// The joint the foot must stay below
        joint: Stage,
        /// That joint's height
        joint_y: f64,
    },
}
