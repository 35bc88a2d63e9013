use crate::*;
use approx::assert_abs_diff_eq;

const EPS: f64 = 1e-9;

fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

#[test]
fn coincident_centers_are_degenerate() {
    let c1 = Circle::new([2., 3.], 1.);
    let c2 = Circle::new([2., 3.], 4.);
    assert!(matches!(
        intersect(c1, c2),
        Err(GeomError::DegenerateCircles(..))
    ));
}

#[test]
fn disjoint_circles_do_not_intersect() {
    let c1 = Circle::new([0., 0.], 1.);
    let c2 = Circle::new([5., 0.], 1.);
    assert!(matches!(
        intersect(c1, c2),
        Err(GeomError::NoIntersection { sep: Separation::Outside, .. })
    ));
}

#[test]
fn contained_circle_does_not_intersect() {
    let c1 = Circle::new([0., 0.], 10.);
    let c2 = Circle::new([1., 0.], 2.);
    assert!(matches!(
        intersect(c1, c2),
        Err(GeomError::NoIntersection { sep: Separation::Inside, .. })
    ));
}

#[test]
fn intersections_lie_on_both_circles() {
    let c1 = Circle::new([1.5, -2.], 4.);
    let c2 = Circle::new([4., 1.], 3.5);
    let (p, q) = intersect(c1, c2).unwrap();
    for pt in [p, q] {
        assert_abs_diff_eq!(dist(pt, c1.center), c1.r, epsilon = EPS);
        assert_abs_diff_eq!(dist(pt, c2.center), c2.r, epsilon = EPS);
    }
    assert!(dist(p, q) > EPS);
}

#[test]
fn intersect_is_symmetric_in_its_arguments() {
    let c1 = Circle::new([0., 0.], 5.);
    let c2 = Circle::new([3., 4.], 4.);
    let (p1, q1) = intersect(c1, c2).unwrap();
    let (p2, q2) = intersect(c2, c1).unwrap();
    let same = |a: [f64; 2], b: [f64; 2]| dist(a, b) < EPS;
    assert!(
        (same(p1, p2) && same(q1, q2)) || (same(p1, q2) && same(q1, p2)),
        "expected the same unordered pair"
    );
}

#[test]
fn tangent_circles_meet_at_one_point() {
    let (p, q) = intersect(Circle::new([0., 0.], 1.), Circle::new([2., 0.], 1.)).unwrap();
    for [x, y] in [p, q] {
        assert_abs_diff_eq!(x, 1., epsilon = EPS);
        assert_abs_diff_eq!(y, 0., epsilon = EPS);
    }
}

#[test]
fn select_keeps_the_extremal_candidate() {
    let c1 = Circle::new([0., 0.], 5.);
    let c2 = Circle::new([8., 0.], 5.);
    let top = select(c1, c2, Axis::Y, Extremum::Max).unwrap();
    assert_abs_diff_eq!(top[0], 4., epsilon = EPS);
    assert_abs_diff_eq!(top[1], 3., epsilon = EPS);
    let bottom = select(c1, c2, Axis::Y, Extremum::Min).unwrap();
    assert_abs_diff_eq!(bottom[0], 4., epsilon = EPS);
    assert_abs_diff_eq!(bottom[1], -3., epsilon = EPS);
    // Same pair rotated a quarter turn discriminates on x.
    let c1 = Circle::new([0., 0.], 5.);
    let c2 = Circle::new([0., 8.], 5.);
    let left = select(c1, c2, Axis::X, Extremum::Min).unwrap();
    assert_abs_diff_eq!(left[0], -3., epsilon = EPS);
    assert_abs_diff_eq!(left[1], 4., epsilon = EPS);
    let right = select(c1, c2, Axis::X, Extremum::Max).unwrap();
    assert_abs_diff_eq!(right[0], 3., epsilon = EPS);
    assert_abs_diff_eq!(right[1], 4., epsilon = EPS);
}

#[test]
fn holy_geometry() {
    let leg = JansenLeg::example();
    assert_abs_diff_eq!(leg.anchor[0], -38.);
    assert_abs_diff_eq!(leg.anchor[1], -7.8);
    assert_eq!(leg.links, LinkSet::HOLY);
    assert_eq!(leg.links.0[..3], [15., 50., 61.9]);
    leg.validate().unwrap();
    // Frame placement translates with the origin.
    let moved = JansenLeg::holy([2., 1.]);
    assert_abs_diff_eq!(moved.anchor[0], -36.);
    assert_abs_diff_eq!(moved.anchor[1], -6.8);
    assert_eq!(moved.links, leg.links);
}

#[test]
fn link_set_from_slice() {
    let links = LinkSet::try_from(&LinkSet::HOLY.0[..]).unwrap();
    assert_eq!(links, LinkSet::HOLY);
    assert_eq!(
        LinkSet::try_from(&[1., 2.][..]),
        Err(ConfigError::WrongLinkCount { got: 2 })
    );
}

#[test]
fn over_extended_crank_is_rejected() {
    let leg = JansenLeg::example();
    let mut links = leg.links;
    // Reach becomes dist(origin, anchor) + 60 > 50 + 41.5.
    links.0[0] = 60.;
    assert!(matches!(
        JansenLeg::new(leg.origin, leg.anchor, links),
        Err(ConfigError::Reach13 { .. })
    ));
}

#[test]
fn broken_triangles_are_rejected() {
    let leg = JansenLeg::example();
    let mut links = leg.links;
    links.0[3] = 100.;
    assert_eq!(
        JansenLeg::new(leg.origin, leg.anchor, links).unwrap_err(),
        ConfigError::Triangle356
    );
    let mut links = leg.links;
    links.0[7] = 200.;
    assert_eq!(
        JansenLeg::new(leg.origin, leg.anchor, links).unwrap_err(),
        ConfigError::Triangle7910
    );
    let mut links = leg.links;
    links.0[2] = 0.;
    assert_eq!(
        JansenLeg::new(leg.origin, leg.anchor, links).unwrap_err(),
        ConfigError::NonPositive { index: 2 }
    );
}

#[test]
fn solved_joints_preserve_rod_lengths() {
    let leg = JansenLeg::example();
    let l = &leg.links;
    let f = leg.solve(1.).unwrap();
    assert_abs_diff_eq!(dist(leg.origin, f.crank), l[0], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.crank, f.j13), l[1], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.crank, f.j24), l[2], epsilon = EPS);
    assert_abs_diff_eq!(dist(leg.anchor, f.j13), l[3], epsilon = EPS);
    assert_abs_diff_eq!(dist(leg.anchor, f.j24), l[4], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.j13, f.j56), l[5], epsilon = EPS);
    assert_abs_diff_eq!(dist(leg.anchor, f.j56), l[6], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.j24, f.j78), l[7], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.j56, f.j78), l[8], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.j78, f.foot), l[9], epsilon = EPS);
    assert_abs_diff_eq!(dist(f.j24, f.foot), l[10], epsilon = EPS);
}

#[test]
fn holy_sweep_is_complete() {
    let traj = JansenLeg::example().sweep(100, SweepMode::Stop);
    assert!(traj.is_complete());
    assert_eq!(traj.frames.len(), 100);
    for f in &traj.frames {
        assert!(f.foot[1] < f.j24[1]);
        assert!(f.foot[1] < f.j78[1]);
    }
    assert_eq!(traj.foot_path().len(), 100);
}

#[test]
fn sweep_failure_policies() {
    // Rods far too short to ever close the first stage; bypasses `new` on
    // purpose since this cannot assemble at any angle.
    let leg = JansenLeg {
        origin: [0., 0.],
        anchor: [-38., -7.8],
        links: LinkSet([15., 1., 1., 1., 1., 1., 1., 1., 1., 1., 1.]),
    };
    assert!(leg.validate().is_err());
    let stopped = leg.sweep(100, SweepMode::Stop);
    assert!(stopped.frames.is_empty());
    assert_eq!(stopped.failures.len(), 1);
    assert_abs_diff_eq!(stopped.failures[0].angle, 0.);
    assert!(matches!(
        stopped.failures[0].error,
        SolveError::Stage {
            stage: Stage::J13,
            source: GeomError::NoIntersection { .. },
        }
    ));
    let skipped = leg.sweep(100, SweepMode::Skip);
    assert!(skipped.frames.is_empty());
    assert_eq!(skipped.failures.len(), 100);
}

#[test]
fn branch_table_matches_the_reference_orientation() {
    assert_eq!(Stage::J13.branch(), (Axis::Y, Extremum::Max));
    assert_eq!(Stage::J24.branch(), (Axis::Y, Extremum::Min));
    assert_eq!(Stage::J56.branch(), (Axis::X, Extremum::Min));
    assert_eq!(Stage::J78.branch(), (Axis::X, Extremum::Min));
    assert_eq!(Stage::Foot.branch(), (Axis::Y, Extremum::Min));
}

#[test]
fn errors_name_the_failing_stage() {
    let err = JansenLeg {
        origin: [0., 0.],
        anchor: [-38., -7.8],
        links: LinkSet([15., 1., 1., 1., 1., 1., 1., 1., 1., 1., 1.]),
    }
    .solve(0.)
    .unwrap_err();
    assert!(err.to_string().contains("1-3"));
    let err = ConfigError::Triangle7910;
    assert!(err.to_string().contains("9 + 10"));
}

#[cfg(feature = "plot")]
#[test]
fn bounding_box_is_square_and_padded() {
    let traj = JansenLeg::example().sweep(36, SweepMode::Stop);
    let [x_min, x_max, y_min, y_max] = plot::bounding_box(&traj.frames);
    assert_abs_diff_eq!(x_max - x_min, y_max - y_min, epsilon = EPS);
    for f in &traj.frames {
        for [x, y] in f.joints() {
            assert!(x > x_min && x < x_max);
            assert!(y > y_min && y < y_max);
        }
    }
}
