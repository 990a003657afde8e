//! Validates frontier growth, integration determinism, branch policy
//! and ribbon acceptance for both generator families

use filigree::generator::{Momentum, PathConfig, RadialConfig, RadialPattern, RibbonPath};
use filigree::geometry::{ObstacleSet, Point};
use filigree::io::cli::compose_paths;
use filigree::io::configuration::{
    MIN_CENTERLINE_POINTS, PATH_COLOR, PATH_SPEED, RIBBON_BASE_HALF_WIDTH,
    RIBBON_HALF_WIDTH_GAIN,
};
use filigree::render::{Canvas, Color};
use rand::{SeedableRng, rngs::StdRng};
use std::f64::consts::PI;

fn seed_pattern(radius: f64) -> RadialPattern {
    RadialPattern::new(
        Point::new(0.0, 0.0),
        radius,
        Color::opaque(1.0, 1.0, 1.0),
        RadialConfig::default(),
        42,
    )
}

#[test]
fn test_frontier_grows_by_branching_factor_per_iteration() {
    let mut pattern = seed_pattern(100.0);
    assert_eq!(pattern.frontier_len(), 1);
    for n in 1..=5 {
        pattern.iterate(None);
        assert_eq!(pattern.frontier_len(), 3_usize.pow(n));
    }
}

#[test]
fn test_single_subdivision_places_children_on_the_parent_ring() {
    let mut pattern = seed_pattern(10.0);
    pattern.iterate(None);

    let children: Vec<_> = pattern.frontier().collect();
    assert_eq!(children.len(), 3);

    for child in &children {
        assert!((child.radius() - 5.0).abs() < 1e-12);
        assert!((child.center.distance(Point::new(0.0, 0.0)) - 5.0).abs() < 1e-9);
    }

    // Every prescribed direction angle is taken by exactly one child
    for i in 0..3 {
        let angle = (i as f64 * 2.0 - 0.5) * PI / 3.0;
        let expected = Point::from_polar(5.0, angle);
        let matches = children
            .iter()
            .filter(|c| c.center.distance(expected) < 1e-9)
            .count();
        assert_eq!(matches, 1, "no unique child at angle {angle}");
    }
}

#[test]
fn test_drawing_during_iteration_touches_the_canvas() {
    let mut canvas = Canvas::new(64, 64);
    canvas.fill(Color::BLACK);
    let mut pattern = RadialPattern::new(
        Point::new(32.0, 32.0),
        16.0,
        Color::opaque(1.0, 1.0, 1.0),
        RadialConfig::default(),
        42,
    );
    pattern.iterate(Some(&mut canvas));
    assert_eq!(canvas.pixel(32, 32).0, [255, 255, 255, 255]);
}

#[test]
fn test_integration_is_deterministic_for_a_fixed_seed() {
    let run = || {
        let obstacles = ObstacleSet::with_border(512.0, 512.0);
        let mut rng = StdRng::seed_from_u64(99);
        let mut path = RibbonPath::new(
            Point::new(256.0, 256.0),
            Momentum::new([0.3, -0.05, 0.004, 0.001]),
            PATH_SPEED,
            PATH_COLOR,
            PathConfig::default(),
        );
        path.generate(&obstacles, &mut rng);
        (path.centerline().to_vec(), path.children().len())
    };

    let (centerline_a, children_a) = run();
    let (centerline_b, children_b) = run();
    assert_eq!(centerline_a, centerline_b);
    assert_eq!(children_a, children_b);
    assert!(!centerline_a.is_empty());
}

#[test]
fn test_zero_momentum_traces_a_straight_line_to_the_border() {
    let obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut path = RibbonPath::new(
        Point::new(50.0, 256.0),
        Momentum::zero(),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 0.0,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);

    let centerline = path.centerline();
    assert!(centerline.len() > MIN_CENTERLINE_POINTS);
    for pair in centerline.windows(2) {
        assert_eq!(pair[0].y, 256.0);
        assert!((pair[1].x - pair[0].x - 2.0).abs() < 1e-12);
    }

    // The dead-end probe looks 10 speeds ahead, so the line stops
    // short of the border rather than on it
    let last = centerline[centerline.len() - 1];
    assert!(last.x < 512.0);
    assert!(last.x > 512.0 - 2.0 * 10.0 - 2.0 - 1.0);
}

#[test]
fn test_ribbon_profile_is_symmetric_about_a_straight_centerline() {
    let obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut path = RibbonPath::new(
        Point::new(50.0, 256.0),
        Momentum::zero(),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 0.0,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);
    path.build_ribbon(&obstacles);

    let total = path.centerline().len();
    assert_eq!(path.left_side().len(), total);
    assert_eq!(path.right_side().len(), total);

    for i in 0..total {
        let profile = (PI * i as f64 / total as f64).sin().powi(3);
        let expected = RIBBON_HALF_WIDTH_GAIN * profile + RIBBON_BASE_HALF_WIDTH;
        let above = 256.0 - path.left_side()[i].y;
        let below = path.right_side()[i].y - 256.0;
        assert!((above - expected).abs() < 1e-9);
        assert!((below - expected).abs() < 1e-9);
    }
}

#[test]
fn test_short_centerlines_are_never_drawn_or_registered() {
    let mut canvas = Canvas::new(512, 512);
    canvas.fill(Color::BLACK);
    let mut obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(5);

    // Starting right next to the border dead-ends almost immediately
    let path = RibbonPath::new(
        Point::new(505.0, 256.0),
        Momentum::zero(),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 0.0,
            ..PathConfig::default()
        },
    );
    path.draw(&mut canvas, &mut obstacles, &mut rng);

    assert_eq!(obstacles.len(), 1, "only the border may be registered");
}

#[test]
fn test_out_of_bounds_spawn_candidates_never_produce_children() {
    let obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(11);

    // Positive turn rate spawns on the downward side; starting near the
    // bottom edge pushes every candidate off the canvas
    let mut path = RibbonPath::new(
        Point::new(100.0, 510.0),
        Momentum::new([0.0, 1e-4, 0.0, 0.0]),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 1.0,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);

    assert!(path.centerline().len() > 10);
    assert!(path.children().is_empty());
}

#[test]
fn test_in_bounds_spawns_inherit_depth_and_spawn_in_order() {
    let obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(11);
    let mut path = RibbonPath::new(
        Point::new(100.0, 256.0),
        Momentum::new([0.0, 1e-4, 0.0, 0.0]),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 1.0,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);

    assert!(!path.children().is_empty());
    for child in path.children() {
        assert_eq!(child.depth(), 1);
    }
}

#[test]
fn test_depth_cap_suppresses_branching() {
    let obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(11);
    let mut path = RibbonPath::new(
        Point::new(100.0, 256.0),
        Momentum::new([0.0, 1e-4, 0.0, 0.0]),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 1.0,
            max_depth: 0,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);
    assert!(path.children().is_empty());
}

#[test]
fn test_disjoint_unbranched_paths_both_register() {
    let mut canvas = Canvas::new(512, 512);
    canvas.fill(Color::BLACK);
    let mut obstacles = ObstacleSet::with_border(512.0, 512.0);
    let mut rng = StdRng::seed_from_u64(3);
    let config = PathConfig {
        branch_probability: 0.0,
        ..PathConfig::default()
    };

    for y in [100.0, 300.0] {
        let path = RibbonPath::new(
            Point::new(50.0, y),
            Momentum::zero(),
            2.0,
            PATH_COLOR,
            config,
        );
        path.draw(&mut canvas, &mut obstacles, &mut rng);
    }

    assert_eq!(obstacles.len(), 3);

    // The two straight ribbons are far apart and inside the border
    let registered: Vec<_> = obstacles.iter().collect();
    for (i, a) in registered.iter().enumerate() {
        for b in registered.iter().skip(i + 1) {
            assert!(!a.crosses_polyline(b));
        }
    }
}

#[test]
fn test_registered_ribbons_never_intersect() {
    // Re-run the intersection test post hoc over the final registry:
    // no accepted ribbon may cross any other obstacle, border included
    let (_canvas, obstacles) = compose_paths(512, 512, 12, 2024, || {});
    let registered: Vec<_> = obstacles.iter().collect();

    for (i, a) in registered.iter().enumerate() {
        for b in registered.iter().skip(i + 1) {
            assert!(!a.crosses_polyline(b));
        }
    }
}

#[test]
fn test_max_step_cap_bounds_runaway_integration() {
    // A huge arena never dead-ends; the safety cap must stop the loop
    let obstacles = ObstacleSet::with_border(1e9, 1e9);
    let mut rng = StdRng::seed_from_u64(4);
    let mut path = RibbonPath::new(
        Point::new(5e8, 5e8),
        Momentum::zero(),
        2.0,
        PATH_COLOR,
        PathConfig {
            branch_probability: 0.0,
            max_steps: 500,
            ..PathConfig::default()
        },
    );
    path.generate(&obstacles, &mut rng);
    assert_eq!(path.centerline().len(), 500);
}
