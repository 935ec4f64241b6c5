//! Identities and motion of everything that can take part in an aspect.

use crate::ephemeris::{BodySpec, PointCategory, RawPosition};
use crate::lots::LotKind;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Angular velocity of a point in the aspect graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Degrees per day, signed
    Moving(f64),
    Stationary,
}

impl Motion {
    pub fn speed(&self) -> f64 {
        match self {
            Motion::Moving(speed) => *speed,
            Motion::Stationary => 0.0,
        }
    }
}

/// Points of the house frame itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AngleKind {
    Asc,
    Mc,
    Dsc,
    Ic,
    Vertex,
    AntiVertex,
}

impl AngleKind {
    pub fn name(&self) -> &'static str {
        match self {
            AngleKind::Asc => "ASC",
            AngleKind::Mc => "MC",
            AngleKind::Dsc => "DSC",
            AngleKind::Ic => "IC",
            AngleKind::Vertex => "Vertex",
            AngleKind::AntiVertex => "Anti-Vertex",
        }
    }

    /// ASC and MC take the angle orb; the derived frame points do not
    pub fn category(&self) -> PointCategory {
        match self {
            AngleKind::Asc | AngleKind::Mc => PointCategory::Angle,
            _ => PointCategory::Main,
        }
    }
}

/// Identifier of one node in the aspect graph; serializes as its label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointId {
    Body(String),
    Angle(AngleKind),
    /// House cusp, 1..=12
    Cusp(u8),
    Lot(LotKind),
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Body(name) => f.write_str(name),
            PointId::Angle(angle) => f.write_str(angle.name()),
            PointId::Cusp(n) => write!(f, "Cusp {}", n),
            PointId::Lot(lot) => f.write_str(lot.name()),
        }
    }
}

impl Serialize for PointId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A body with a successful ephemeris reading
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    /// Provider body code
    pub code: i32,
    pub category: PointCategory,
    /// Normalized ecliptic longitude
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub motion: Motion,
}

impl Body {
    pub fn from_reading(spec: &BodySpec, position: &RawPosition) -> Self {
        Self {
            name: spec.name.clone(),
            code: spec.code,
            category: spec.category,
            longitude: crate::angles::normalize(position.longitude),
            latitude: position.latitude,
            distance: position.distance,
            motion: Motion::Moving(position.speed),
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.motion {
            Motion::Moving(speed) => Some(speed),
            Motion::Stationary => None,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.motion.speed() < 0.0
    }
}

/// A body whose ephemeris query failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of querying one catalog body
pub type BodyReading = Result<Body, BodyFailure>;

/// One candidate in the pairwise aspect scan
#[derive(Debug, Clone, PartialEq)]
pub struct AspectPoint {
    pub id: PointId,
    pub longitude: f64,
    pub category: PointCategory,
    pub motion: Motion,
}

impl AspectPoint {
    pub fn stationary(id: PointId, longitude: f64, category: PointCategory) -> Self {
        Self {
            id,
            longitude,
            category,
            motion: Motion::Stationary,
        }
    }
}

impl From<&Body> for AspectPoint {
    fn from(body: &Body) -> Self {
        Self {
            id: PointId::Body(body.name.clone()),
            longitude: body.longitude,
            category: body.category,
            motion: body.motion,
        }
    }
}
