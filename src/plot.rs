//! Plot leg postures and traced paths, and export sweep animations.
//!
//! # Still Image Example
//!
//! ```
//! use jansen_leg::{plot::*, JansenLeg, SweepMode};
//!
//! let leg = JansenLeg::example();
//! let traj = leg.sweep(36, SweepMode::Stop);
//! let mut buf = String::new();
//! let svg = SVGBackend::with_string(&mut buf, (800, 800));
//! plot_leg(svg, &leg, &traj.frames[0], Some(&traj)).unwrap();
//! ```
use crate::{JansenLeg, JointFrame, Trajectory};
use plotters::coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift};
#[doc(no_inline)]
pub use plotters::prelude::*;
use std::path::Path;

/// Plotting result type.
pub type PResult<T, B> = Result<T, DrawingAreaErrorKind<<B as DrawingBackend>::ErrorType>>;
type Canvas<B> = DrawingArea<B, Shift>;
type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// 1:1 bounding box around every joint of the given frames, padded by 10
/// units a side.
pub fn bounding_box<'a>(frames: impl IntoIterator<Item = &'a JointFrame>) -> [f64; 4] {
    let [mut x_min, mut x_max] = [f64::INFINITY, -f64::INFINITY];
    let [mut y_min, mut y_max] = [f64::INFINITY, -f64::INFINITY];
    for [x, y] in frames.into_iter().flat_map(JointFrame::joints) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let cx = (x_min + x_max) * 0.5;
    let cy = (y_min + y_max) * 0.5;
    let r = (x_max - x_min).max(y_max - y_min) * 0.5 + 10.;
    [cx - r, cx + r, cy - r, cy + r]
}

/// Plot one posture, optionally with the traced crank and foot paths.
pub fn plot_leg<B, R>(
    root: R,
    leg: &JansenLeg,
    frame: &JointFrame,
    traj: Option<&Trajectory>,
) -> PResult<(), B>
where
    B: DrawingBackend,
    Canvas<B>: From<R>,
{
    let root = Canvas::from(root);
    root.fill(&WHITE)?;
    let [x_min, x_max, y_min, y_max] = match traj {
        Some(traj) => bounding_box(&traj.frames),
        None => bounding_box([frame]),
    };
    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (4).percent())
        .margin((4).percent())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;
    if let Some(traj) = traj {
        draw_paths(&mut chart, traj)?;
    }
    draw_frame(&mut chart, leg, frame)?;
    Ok(())
}

/// Export a GIF of the sweep, one frame per solved [`JointFrame`].
///
/// `frame_delay` is in milliseconds. Axes are omitted since the bitmap
/// backend carries no font rasterizer here.
pub fn animate<P>(
    path: P,
    leg: &JansenLeg,
    traj: &Trajectory,
    frame_delay: u32,
) -> PResult<(), BitMapBackend<'static>>
where
    P: AsRef<Path>,
{
    let [x_min, x_max, y_min, y_max] = bounding_box(&traj.frames);
    let root = BitMapBackend::gif(path, (800, 800), frame_delay)
        .map_err(|e| DrawingAreaErrorKind::BackendError(plotters_backend::DrawingErrorKind::DrawingError(e)))?
        .into_drawing_area();
    for frame in &traj.frames {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin((4).percent())
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
        draw_paths(&mut chart, traj)?;
        draw_frame(&mut chart, leg, frame)?;
        root.present()?;
    }
    Ok(())
}

fn draw_paths<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>, traj: &Trajectory) -> PResult<(), DB> {
    chart.draw_series(LineSeries::new(to_xy(traj.crank_path()), CYAN.stroke_width(1)))?;
    chart.draw_series(LineSeries::new(to_xy(traj.foot_path()), BLUE.stroke_width(2)))?;
    Ok(())
}

fn draw_frame<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    leg: &JansenLeg,
    frame: &JointFrame,
) -> PResult<(), DB> {
    let o = leg.origin;
    let p = leg.anchor;
    let JointFrame { crank, j13, j24, j56, j78, foot, .. } = *frame;
    chart.draw_series(LineSeries::new(to_xy([o, crank]), CYAN.stroke_width(2)))?;
    let rods = [
        [crank, j13, p],
        [crank, j24, p],
        [j13, j56, p],
        [j56, j78, j24],
        [j78, foot, j24],
    ];
    for rod in rods {
        chart.draw_series(LineSeries::new(to_xy(rod), GREEN.stroke_width(1)))?;
    }
    let pivots = [o, p, foot].map(|[x, y]| Circle::new((x, y), 4, RED.filled()));
    chart.draw_series(pivots)?;
    chart.draw_series([Circle::new((crank[0], crank[1]), 3, GREEN.filled())])?;
    Ok(())
}

fn to_xy(pts: impl IntoIterator<Item = [f64; 2]>) -> impl Iterator<Item = (f64, f64)> {
    pts.into_iter().map(|[x, y]| (x, y))
}
