//! Two-circle intersection primitives.
//!
//! Everything downstream of the crank is solved by intersecting a pair of
//! circles and keeping one of the two candidates, so this module is the whole
//! numeric core of the crate.
use crate::error::{GeomError, Separation};

/// A circle on the plane, by center and radius.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: [f64; 2],
    /// Radius, non-negative
    pub r: f64,
}

impl Circle {
    /// Create a new circle.
    pub const fn new(center: [f64; 2], r: f64) -> Self {
        Self { center, r }
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [x, y] = self.center;
        write!(f, "circle(({x:.4}, {y:.4}), r={:.4})", self.r)
    }
}

/// Coordinate axis used to discriminate the two intersection candidates.
#[repr(usize)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    /// Compare x coordinates
    X = 0,
    /// Compare y coordinates
    Y = 1,
}

/// Which extremum along an [`Axis`] to keep.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Extremum {
    /// Keep the lesser coordinate
    Min,
    /// Keep the greater coordinate
    Max,
}

/// Both points where the circle boundaries cross.
///
/// A tangent pair yields the same point twice. Coincident centers are
/// rejected as [`GeomError::DegenerateCircles`] since in this mechanism they
/// always signal a folded configuration, never a valid one.
///
/// The derivation follows <https://math.stackexchange.com/a/1367732>. Near
/// tangency the discriminant `2b - a^2 - 1` can dip below zero from rounding
/// alone; that is reported as a miss, not clamped to a root.
pub fn intersect(c1: Circle, c2: Circle) -> Result<([f64; 2], [f64; 2]), GeomError> {
    let Circle { center: [x1, y1], r: r1 } = c1;
    let Circle { center: [x2, y2], r: r2 } = c2;
    if x1 == x2 && y1 == y2 {
        return Err(GeomError::DegenerateCircles(c1, c2));
    }
    let d = (x1 - x2).hypot(y1 - y2);
    if d > r1 + r2 {
        return Err(GeomError::NoIntersection { c1, c2, sep: Separation::Outside });
    }
    if d < (r1 - r2).abs() {
        return Err(GeomError::NoIntersection { c1, c2, sep: Separation::Inside });
    }
    let a = (r1 * r1 - r2 * r2) / (d * d);
    let b = (r1 * r1 + r2 * r2) / (d * d);
    let disc = 2. * b - a * a - 1.;
    if disc < 0. {
        return Err(GeomError::NoIntersection { c1, c2, sep: Separation::Tangency });
    }
    let xm = (x1 + x2) / 2. + a / 2. * (x2 - x1);
    let ym = (y1 + y2) / 2. + a / 2. * (y2 - y1);
    let h = disc.sqrt() / 2.;
    let p = [xm + h * (y2 - y1), ym + h * (x1 - x2)];
    let q = [xm - h * (y2 - y1), ym - h * (x1 - x2)];
    Ok((p, q))
}

/// Intersect two circles and keep the candidate extremal on `axis`.
///
/// Use [`intersect`] to get both candidates instead.
pub fn select(c1: Circle, c2: Circle, axis: Axis, ext: Extremum) -> Result<[f64; 2], GeomError> {
    let (p, q) = intersect(c1, c2)?;
    let i = axis as usize;
    let keep_p = match ext {
        Extremum::Min => p[i] <= q[i],
        Extremum::Max => p[i] >= q[i],
    };
    Ok(if keep_p { p } else { q })
}
