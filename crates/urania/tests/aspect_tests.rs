use urania::aspects::{collect_candidates, AspectCalculator, AspectKind, AspectSettings, OrbTable};
use urania::ephemeris::{HouseSystem, PointCategory, RawHouses};
use urania::houses::HouseFrame;
use urania::points::{AngleKind, AspectPoint, Motion, PointId};

fn body(name: &str, lon: f64, speed: f64) -> AspectPoint {
    AspectPoint {
        id: PointId::Body(name.to_string()),
        longitude: lon,
        category: PointCategory::Main,
        motion: Motion::Moving(speed),
    }
}

fn uniform_orbs(orb: f64) -> OrbTable {
    OrbTable {
        main: orb,
        luminary: orb,
        angle: orb,
        node: orb,
        chiron: orb,
        lilith: orb,
    }
}

fn bodies_only(orbs: OrbTable) -> AspectSettings {
    AspectSettings {
        include_angles: false,
        include_frame_points: false,
        include_cusps: false,
        orbs,
        ..AspectSettings::default()
    }
}

#[test]
fn test_exact_sextile_with_zero_orb() {
    let calculator = AspectCalculator::new();
    let points = vec![body("A", 10.0, 1.0), body("B", 70.0, 1.0)];

    let aspects = calculator.compute_aspects(&points, &bodies_only(uniform_orbs(0.0)));

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Sextile);
    assert_eq!(aspects[0].orb, 0.0);
    assert_eq!(aspects[0].separation, 60.0);
    assert!(aspects[0].is_exact);
}

#[test]
fn test_orb_boundary_is_inclusive() {
    let calculator = AspectCalculator::new();
    let points = vec![body("A", 0.0, 0.0), body("B", 63.0, 0.0)];

    let aspects = calculator.compute_aspects(&points, &bodies_only(uniform_orbs(3.0)));
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Sextile);
    assert_eq!(aspects[0].orb, 3.0);

    let aspects = calculator.compute_aspects(&points, &bodies_only(uniform_orbs(2.9)));
    assert!(aspects.is_empty());
}

#[test]
fn test_pair_takes_wider_category_orb() {
    let calculator = AspectCalculator::new();
    let mut sun = body("Sun", 0.0, 1.0);
    sun.category = PointCategory::Luminary;
    let node = AspectPoint {
        id: PointId::Body("True Node".into()),
        longitude: 97.5,
        category: PointCategory::Node,
        motion: Motion::Moving(-0.05),
    };

    let aspect = calculator
        .calculate_aspect(&sun, &node, &AspectKind::MAJOR, &OrbTable::default())
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Square);
    assert_eq!(aspect.orb, 7.5);
}

#[test]
fn test_straddling_separation_yields_lowest_angle_once() {
    let calculator = AspectCalculator::new();
    let points = vec![body("A", 100.0, 0.0), body("B", 130.0, 0.0)];

    let aspects = calculator.compute_aspects(&points, &bodies_only(uniform_orbs(30.0)));

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Conjunction);
    assert_eq!(aspects[0].orb, 30.0);
}

#[test]
fn test_applying_flips_with_speed_sign() {
    let calculator = AspectCalculator::new();
    let settings = bodies_only(OrbTable::default());

    // 58° apart: moving apart closes on the sextile
    let points = vec![body("A", 10.0, -1.0), body("B", 68.0, 0.0)];
    let aspects = calculator.compute_aspects(&points, &settings);
    assert_eq!(aspects.len(), 1);
    assert!(aspects[0].is_applying);

    let points = vec![body("A", 10.0, 1.0), body("B", 68.0, 0.0)];
    let aspects = calculator.compute_aspects(&points, &settings);
    assert_eq!(aspects.len(), 1);
    assert!(!aspects[0].is_applying);
}

#[test]
fn test_applying_only_filter() {
    let calculator = AspectCalculator::new();
    let points = vec![
        body("A", 10.0, -1.0),
        body("B", 68.0, 0.0),
        body("C", 190.0, 1.0),
    ];
    let settings = AspectSettings {
        applying_only: true,
        ..bodies_only(OrbTable::default())
    };

    let aspects = calculator.compute_aspects(&points, &settings);

    // A-C opposition at 180 is exact and separating; only A-B survives
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].b, PointId::Body("B".into()));
}

fn equal_frame() -> HouseFrame {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = 30.0 * i as f64;
    }
    let raw = RawHouses {
        cusps,
        asc: 0.0,
        mc: 270.0,
        armc: 272.0,
        vertex: 200.0,
    };
    HouseFrame::from_raw(&raw, HouseSystem::Equal, 0.0, 23.44)
}

fn involves(aspect: &urania::Aspect, x: &PointId, y: &PointId) -> bool {
    (&aspect.a == x && &aspect.b == y) || (&aspect.a == y && &aspect.b == x)
}

#[test]
fn test_trivial_geometry_suppressed() {
    let frame = equal_frame();
    let settings = AspectSettings {
        include_frame_points: false,
        ..AspectSettings::default()
    };
    let points = collect_candidates(&[], &frame, &[], &settings);
    let aspects = AspectCalculator::new().compute_aspects(&points, &settings);

    let asc = PointId::Angle(AngleKind::Asc);
    let mc = PointId::Angle(AngleKind::Mc);
    assert!(!aspects.iter().any(|a| involves(a, &asc, &PointId::Cusp(1))));
    assert!(!aspects.iter().any(|a| involves(a, &mc, &PointId::Cusp(10))));
    assert!(!aspects
        .iter()
        .any(|a| involves(a, &PointId::Cusp(1), &PointId::Cusp(7))));
    // Squares between cusps are kept
    assert!(aspects
        .iter()
        .any(|a| involves(a, &PointId::Cusp(1), &PointId::Cusp(4))));
}

#[test]
fn test_trivial_geometry_kept_when_disabled() {
    let frame = equal_frame();
    let settings = AspectSettings {
        include_frame_points: false,
        skip_trivial_geometry: false,
        ..AspectSettings::default()
    };
    let points = collect_candidates(&[], &frame, &[], &settings);
    let aspects = AspectCalculator::new().compute_aspects(&points, &settings);

    let asc = PointId::Angle(AngleKind::Asc);
    let found = aspects
        .iter()
        .find(|a| involves(a, &asc, &PointId::Cusp(1)))
        .unwrap();
    assert_eq!(found.kind, AspectKind::Conjunction);
    assert_eq!(found.orb, 0.0);
    assert!(!found.is_applying);
}

#[test]
fn test_one_record_per_pair() {
    let frame = equal_frame();
    let settings = AspectSettings::default().with_quincunx();
    let points = collect_candidates(&[], &frame, &[], &settings);
    let aspects = AspectCalculator::new().compute_aspects(&points, &settings);

    let mut pairs: Vec<(String, String)> = aspects
        .iter()
        .map(|a| {
            let (x, y) = (a.a.to_string(), a.b.to_string());
            if x < y {
                (x, y)
            } else {
                (y, x)
            }
        })
        .collect();
    let total = pairs.len();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), total);
}

#[test]
fn test_sorted_by_orb() {
    let calculator = AspectCalculator::new();
    let points = vec![
        body("A", 0.0, 0.0),
        body("B", 93.0, 0.0),
        body("C", 181.0, 0.0),
        body("D", 242.0, 0.0),
    ];
    let aspects = calculator.compute_aspects(&points, &bodies_only(OrbTable::default()));
    assert!(aspects.windows(2).all(|w| w[0].orb <= w[1].orb));
    assert_eq!(aspects[0].orb, 1.0);
}
