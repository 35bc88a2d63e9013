//! Simulator for Theo Jansen's Strandbeest leg, an eleven-rod planar linkage
//! driven by a single crank.
//!
//! The crank tip is placed trigonometrically; every other joint is the
//! intersection of two circles, chained through five stages. Sweeping the
//! crank over a full rotation traces the walking "foot" path.
//!
//! ```
//! use jansen_leg::{JansenLeg, SweepMode};
//!
//! let leg = JansenLeg::example();
//! let traj = leg.sweep(100, SweepMode::Stop);
//! assert!(traj.is_complete());
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::error::*;
pub use crate::geom::*;
pub use crate::leg::*;
pub use crate::sweep::*;

mod error;
pub mod geom;
mod leg;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
mod sweep;
#[cfg(test)]
mod tests;
