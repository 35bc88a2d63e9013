//! The Jansen leg linkage and its per-angle solver.
//!
//! One leg is a crank plus ten more rods hung between two fixed pivots. For
//! a given crank angle the joint positions are found by five circle
//! intersections chained in dependency order:
//!
//! ```text
//! crank -> { j13, j24 } -> j56 -> j78 -> foot
//! ```
//!
//! Each solve is a pure function of the configuration and the angle; nothing
//! carries over between angles.
use crate::{
    error::{ConfigError, SolveError},
    geom::{self, Axis, Circle, Extremum},
};
use tracing::warn;

/// The eleven rod lengths of one leg, indexed 0..=10.
///
/// Rod 0 is the crank; the rest follow the pairing in the [`Stage`] names.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkSet(pub [f64; 11]);

impl LinkSet {
    /// Theo Jansen's "holy numbers", the rod proportions of the original
    /// Strandbeest leg.
    ///
    /// See <https://www.strandbeest.com/explains>.
    pub const HOLY: Self = Self([15., 50., 61.9, 41.5, 39.3, 55.8, 40.1, 36.7, 39.4, 65.7, 49.]);
}

impl std::ops::Index<usize> for LinkSet {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl TryFrom<&[f64]> for LinkSet {
    type Error = ConfigError;

    fn try_from(v: &[f64]) -> Result<Self, ConfigError> {
        <[f64; 11]>::try_from(v)
            .map(Self)
            .map_err(|_| ConfigError::WrongLinkCount { got: v.len() })
    }
}

/// One intersection stage of the per-angle pipeline, named by the rod pair
/// it closes.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Stage {
    /// Rods 1 and 3, the shoulder above the crank.
    J13,
    /// Rods 2 and 4, the hip below the crank.
    J24,
    /// Rods 5 and 6, back of the upper triangle.
    J56,
    /// Rods 7 and 8, the knee.
    J78,
    /// Rods 9 and 10, the foot.
    Foot,
}

impl Stage {
    /// Which of the two intersection candidates belongs to this leg's
    /// assembly branch.
    ///
    /// The table encodes the resting orientation of the mechanism (crank
    /// turning counterclockwise, second pivot left of and below the crank
    /// pivot). Flip entries here if that convention changes.
    pub const fn branch(self) -> (Axis, Extremum) {
        match self {
            Self::J13 => (Axis::Y, Extremum::Max),
            Self::J24 => (Axis::Y, Extremum::Min),
            Self::J56 => (Axis::X, Extremum::Min),
            Self::J78 => (Axis::X, Extremum::Min),
            Self::Foot => (Axis::Y, Extremum::Min),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::J13 => "1-3",
            Self::J24 => "2-4",
            Self::J56 => "5-6",
            Self::J78 => "7-8",
            Self::Foot => "9-10",
        })
    }
}

/// All joint positions solved for one crank angle.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointFrame {
    /// Crank angle of this frame (radians)
    pub angle: f64,
    /// Crank tip
    pub crank: [f64; 2],
    /// Rods 1-3 junction
    pub j13: [f64; 2],
    /// Rods 2-4 junction
    pub j24: [f64; 2],
    /// Rods 5-6 junction
    pub j56: [f64; 2],
    /// Rods 7-8 junction
    pub j78: [f64; 2],
    /// End effector
    pub foot: [f64; 2],
}

impl JointFrame {
    /// The six moving joints in pipeline order.
    pub const fn joints(&self) -> [[f64; 2]; 6] {
        [self.crank, self.j13, self.j24, self.j56, self.j78, self.foot]
    }
}

/// Frame offset from the crank pivot to the second fixed pivot in the
/// reference proportions. These two lengths belong to the rigid frame, not
/// to the [`LinkSet`].
pub const FRAME_OFFSET: [f64; 2] = [-38., -7.8];

/// One Strandbeest leg: two fixed pivots plus eleven rods.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct JansenLeg {
    /// Crank pivot
    pub origin: [f64; 2],
    /// Second fixed pivot
    pub anchor: [f64; 2],
    /// Rod lengths
    pub links: LinkSet,
}

impl JansenLeg {
    /// Create a leg, rejecting configurations whose rods cannot assemble.
    pub fn new(origin: [f64; 2], anchor: [f64; 2], links: LinkSet) -> Result<Self, ConfigError> {
        let leg = Self { origin, anchor, links };
        leg.validate()?;
        Ok(leg)
    }

    /// The reference proportions with the crank pivot at `origin`.
    pub fn holy(origin: [f64; 2]) -> Self {
        let [x, y] = origin;
        let anchor = [x + FRAME_OFFSET[0], y + FRAME_OFFSET[1]];
        Self { origin, anchor, links: LinkSet::HOLY }
    }

    /// The original Strandbeest leg, crank pivot at the origin.
    pub const fn example() -> Self {
        Self {
            origin: [0., 0.],
            anchor: FRAME_OFFSET,
            links: LinkSet::HOLY,
        }
    }

    /// Static assembly check, run once per configuration.
    ///
    /// The crank tip at full extension must stay within reach of both rod
    /// pairs hung from the second pivot, and the two chained triangles must
    /// close even when flattened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.links;
        for (index, len) in l.0.iter().enumerate() {
            if !(*len > 0.) {
                return Err(ConfigError::NonPositive { index });
            }
        }
        let [ox, oy] = self.origin;
        let [ax, ay] = self.anchor;
        let reach = (ox - ax).hypot(oy - ay) + l[0];
        if reach >= l[1] + l[3] {
            return Err(ConfigError::Reach13 { reach, limit: l[1] + l[3] });
        }
        if reach >= l[2] + l[4] {
            return Err(ConfigError::Reach24 { reach, limit: l[2] + l[4] });
        }
        if l[3] >= l[5] + l[6] {
            return Err(ConfigError::Triangle356);
        }
        if l[7] >= l[9] + l[10] {
            return Err(ConfigError::Triangle7910);
        }
        Ok(())
    }

    /// Solve all joint positions at crank angle `angle` (radians).
    ///
    /// A failure in any stage short-circuits the rest of the pipeline for
    /// this angle; the frame is all-or-nothing.
    pub fn solve(&self, angle: f64) -> Result<JointFrame, SolveError> {
        let l = &self.links;
        let [ox, oy] = self.origin;
        let crank = [ox + l[0] * angle.cos(), oy + l[0] * angle.sin()];
        let j13 = stage(Stage::J13, Circle::new(crank, l[1]), Circle::new(self.anchor, l[3]))?;
        let j24 = stage(Stage::J24, Circle::new(crank, l[2]), Circle::new(self.anchor, l[4]))?;
        let j56 = stage(Stage::J56, Circle::new(j13, l[5]), Circle::new(self.anchor, l[6]))?;
        let j78 = stage(Stage::J78, Circle::new(j56, l[8]), Circle::new(j24, l[7]))?;
        let foot = stage(Stage::Foot, Circle::new(j78, l[9]), Circle::new(j24, l[10]))?;
        // The foot must hang below the hip and the knee, otherwise the wrong
        // branch survived the selection.
        for (joint, [_, joint_y]) in [(Stage::J24, j24), (Stage::J78, j78)] {
            if foot[1] >= joint_y {
                return Err(SolveError::Implausible { foot_y: foot[1], joint, joint_y });
            }
        }
        Ok(JointFrame { angle, crank, j13, j24, j56, j78, foot })
    }
}

fn stage(stage: Stage, c1: Circle, c2: Circle) -> Result<[f64; 2], SolveError> {
    let (axis, ext) = stage.branch();
    geom::select(c1, c2, axis, ext).map_err(|source| {
        warn!(%stage, %source, "no intersection");
        SolveError::Stage { stage, source }
    })
}
