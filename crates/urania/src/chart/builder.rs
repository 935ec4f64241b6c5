use crate::aspects::{collect_candidates, AspectCalculator, AspectSettings};
use crate::chart::packing::{pack_body, pack_point};
use crate::chart::settings::ChartSettings;
use crate::chart::types::{Chart, ChartMeta};
use crate::ephemeris::{
    julian_day_ut, BodyCatalog, BodySpec, EphemerisProvider, GeoLocation, HousePositionSource,
    Zodiac, MARS, MOON, SUN, VENUS,
};
use crate::error::ChartError;
use crate::houses::{classify_sect, HouseFrame, HouseResolver, Sect};
use crate::lots::{LotCalculator, LotInputs};
use crate::points::{AngleKind, Body, BodyFailure, BodyReading};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

/// One chart to cast
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
    pub settings: ChartSettings,
}

impl ChartRequest {
    pub fn new(instant: DateTime<Utc>, location: GeoLocation) -> Self {
        Self {
            instant,
            location,
            settings: ChartSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = settings;
        self
    }
}

fn longitude_of(bodies: &[BodyReading], code: i32) -> Option<f64> {
    bodies
        .iter()
        .filter_map(|reading| reading.as_ref().ok())
        .find(|body| body.code == code)
        .map(|body| body.longitude)
}

/// Resolve a chart from body readings and a house frame.
///
/// Never fails: failed bodies are packed with their error and left out of
/// the geometry, and unknown house positions only drop that placement.
pub fn compute_chart<S: HousePositionSource + ?Sized>(
    bodies: &[BodyReading],
    frame: &HouseFrame,
    source: &S,
    settings: &AspectSettings,
) -> Chart {
    let resolver = HouseResolver::new(frame, source);

    let sect = match longitude_of(bodies, SUN) {
        Some(sun) => classify_sect(&resolver, sun),
        None => {
            warn!("Sun unavailable; assuming a day chart");
            Sect::Diurnal
        }
    };

    let inputs = LotInputs {
        sun: longitude_of(bodies, SUN),
        moon: longitude_of(bodies, MOON),
        venus: longitude_of(bodies, VENUS),
        mars: longitude_of(bodies, MARS),
    };
    let lots = LotCalculator::new().compute(sect, frame.asc, &inputs);

    let candidates = collect_candidates(bodies, frame, &lots, settings);
    let aspects = AspectCalculator::new().compute_aspects(&candidates, settings);

    let mut points = Vec::with_capacity(6 + lots.len());
    for (kind, longitude) in [
        (AngleKind::Asc, frame.asc),
        (AngleKind::Mc, frame.mc),
        (AngleKind::Dsc, frame.dsc()),
        (AngleKind::Ic, frame.ic()),
        (AngleKind::Vertex, frame.vertex),
        (AngleKind::AntiVertex, frame.anti_vertex()),
    ] {
        points.push(pack_point(kind.name(), longitude, &resolver));
    }
    for lot in &lots {
        points.push(pack_point(lot.kind.name(), lot.longitude, &resolver));
    }

    Chart {
        meta: None,
        sect,
        houses: *frame,
        bodies: bodies.iter().map(|reading| pack_body(reading, &resolver)).collect(),
        points,
        aspects,
    }
}

/// One catalog body. A reading with a non-finite longitude or speed counts
/// as a failed query.
fn read_body<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    spec: &BodySpec,
    zodiac: Zodiac,
) -> BodyReading {
    let message = match provider.body_position(jd_ut, spec.code, zodiac) {
        Ok(position) if !position.longitude.is_finite() => "non-finite longitude".to_string(),
        Ok(position) if !position.speed.is_finite() => "non-finite speed".to_string(),
        Ok(position) => return Ok(Body::from_reading(spec, &position)),
        Err(e) => e.to_string(),
    };
    warn!("{} unavailable: {}", spec.name, message);
    Err(BodyFailure {
        name: spec.name.clone(),
        message,
    })
}

/// Query the provider for everything a chart needs, then resolve it.
pub fn cast_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    catalog: &BodyCatalog,
    request: &ChartRequest,
) -> Result<Chart, ChartError> {
    let location = request.location;
    if !location.is_valid() {
        return Err(ChartError::InvalidLocation {
            lat: location.lat,
            lon: location.lon,
        });
    }

    let settings = &request.settings;
    let jd_ut = julian_day_ut(request.instant);
    debug!(
        "casting chart at JD {:.6} for ({}, {}) with {} houses",
        jd_ut, location.lat, location.lon, settings.house_system
    );

    let bodies: Vec<BodyReading> = catalog
        .iter()
        .map(|spec| read_body(provider, jd_ut, spec, settings.zodiac))
        .collect();

    let raw = provider
        .house_cusps(jd_ut, location, settings.house_system, settings.zodiac)
        .map_err(ChartError::HouseFrame)?;
    let obliquity = provider
        .true_obliquity(jd_ut)
        .map_err(ChartError::Obliquity)?;
    let frame = HouseFrame::from_raw(&raw, settings.house_system, location.lat, obliquity);

    let mut chart = compute_chart(&bodies, &frame, provider, &settings.aspects);
    chart.meta = Some(ChartMeta {
        instant: request.instant,
        julian_day: jd_ut,
        location,
        zodiac: settings.zodiac,
        house_system: settings.house_system,
    });

    info!(
        "cast {} chart: {} bodies ({} failed), {} points, {} aspects",
        if chart.sect.is_diurnal() { "day" } else { "night" },
        chart.bodies.len(),
        chart.bodies.iter().filter(|b| b.error().is_some()).count(),
        chart.points.len(),
        chart.aspects.len()
    );
    Ok(chart)
}
