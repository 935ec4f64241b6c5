use crate::angles::{minimal_separation, round_to};
use crate::aspects::motion::{is_applying, is_exact};
use crate::aspects::orbs::OrbTable;
use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::ephemeris::PointCategory;
use crate::houses::HouseFrame;
use crate::lots::Lot;
use crate::points::{AngleKind, AspectPoint, BodyReading, PointId};
use log::debug;
use std::cmp::Ordering;

/// Decimal places kept for orb and separation
const OUTPUT_PRECISION: i32 = 4;

/// Build the candidate list for the pairwise scan.
///
/// Order: bodies (failed ones dropped), ASC and MC, DSC/IC/Vertex/Anti-Vertex,
/// cusps 1..12, then lots. Points without a finite longitude are left out.
pub fn collect_candidates(
    bodies: &[BodyReading],
    frame: &HouseFrame,
    lots: &[Lot],
    settings: &AspectSettings,
) -> Vec<AspectPoint> {
    let mut points: Vec<AspectPoint> = bodies
        .iter()
        .filter_map(|reading| reading.as_ref().ok())
        .map(AspectPoint::from)
        .collect();

    if settings.include_angles {
        for (kind, lon) in [(AngleKind::Asc, frame.asc), (AngleKind::Mc, frame.mc)] {
            points.push(AspectPoint::stationary(PointId::Angle(kind), lon, kind.category()));
        }
    }

    if settings.include_frame_points {
        for (kind, lon) in [
            (AngleKind::Dsc, frame.dsc()),
            (AngleKind::Ic, frame.ic()),
            (AngleKind::Vertex, frame.vertex),
            (AngleKind::AntiVertex, frame.anti_vertex()),
        ] {
            points.push(AspectPoint::stationary(PointId::Angle(kind), lon, kind.category()));
        }
    }

    if settings.include_cusps {
        for (i, lon) in frame.cusps.iter().enumerate() {
            points.push(AspectPoint::stationary(
                PointId::Cusp(i as u8 + 1),
                *lon,
                PointCategory::Angle,
            ));
        }
    }

    for lot in lots {
        points.push(AspectPoint::stationary(
            PointId::Lot(lot.kind),
            lot.longitude,
            PointCategory::Main,
        ));
    }

    points.retain(|p| {
        let keep = p.longitude.is_finite();
        if !keep {
            debug!("dropping {} from the aspect scan: no usable longitude", p.id);
        }
        keep
    });
    points
}

/// Pairs that coincide by construction of the house system.
///
/// ASC/Cusp 1, MC/Cusp 10, and cusps whose numbers differ by a multiple of 6.
/// Bodies and lots are never trivial.
pub fn is_trivial_pair(a: &PointId, b: &PointId) -> bool {
    match (a, b) {
        (PointId::Angle(AngleKind::Asc), PointId::Cusp(1))
        | (PointId::Cusp(1), PointId::Angle(AngleKind::Asc))
        | (PointId::Angle(AngleKind::Mc), PointId::Cusp(10))
        | (PointId::Cusp(10), PointId::Angle(AngleKind::Mc)) => true,
        (PointId::Cusp(x), PointId::Cusp(y)) => {
            (i16::from(*x) - i16::from(*y)).rem_euclid(6) == 0
        }
        _ => false,
    }
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Scan every unordered pair of `points` and return the matches, tightest first.
    pub fn compute_aspects(&self, points: &[AspectPoint], settings: &AspectSettings) -> Vec<Aspect> {
        let kinds = settings.kinds_by_angle();
        let mut skipped = 0usize;
        let mut aspects = Vec::new();

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let (a, b) = (&points[i], &points[j]);
                if settings.skip_trivial_geometry && is_trivial_pair(&a.id, &b.id) {
                    skipped += 1;
                    continue;
                }
                if let Some(aspect) = self.calculate_aspect(a, b, &kinds, &settings.orbs) {
                    aspects.push(aspect);
                }
            }
        }

        if settings.applying_only {
            aspects.retain(|aspect| aspect.is_applying);
        }
        aspects.sort_by(compare_aspects);

        debug!(
            "aspect scan: {} candidates, {} aspects, {} trivial pairs skipped",
            points.len(),
            aspects.len(),
            skipped
        );
        aspects
    }

    /// Match one pair against `kinds`, which must be in ascending angle order.
    ///
    /// The first angle within the pair's orb wins; later angles are not tried.
    pub fn calculate_aspect(
        &self,
        a: &AspectPoint,
        b: &AspectPoint,
        kinds: &[AspectKind],
        orbs: &OrbTable,
    ) -> Option<Aspect> {
        let separation = minimal_separation(a.longitude, b.longitude);
        let allowed = orbs.allowed(a.category, b.category);

        kinds.iter().find_map(|kind| {
            let deviation = (separation - kind.angle()).abs();
            if deviation > allowed {
                return None;
            }
            Some(Aspect {
                a: a.id.clone(),
                b: b.id.clone(),
                kind: *kind,
                exact_angle: kind.angle(),
                separation: round_to(separation, OUTPUT_PRECISION),
                orb: round_to(deviation, OUTPUT_PRECISION),
                is_applying: is_applying(a, b, kind.angle()),
                is_exact: is_exact(deviation),
            })
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tightest orb first, then smaller angle, then point labels
fn compare_aspects(x: &Aspect, y: &Aspect) -> Ordering {
    x.orb
        .total_cmp(&y.orb)
        .then(x.exact_angle.total_cmp(&y.exact_angle))
        .then_with(|| x.a.to_string().cmp(&y.a.to_string()))
        .then_with(|| x.b.to_string().cmp(&y.b.to_string()))
}
