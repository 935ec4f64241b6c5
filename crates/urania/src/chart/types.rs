use crate::aspects::Aspect;
use crate::ephemeris::{GeoLocation, HouseSystem, PointCategory, Zodiac};
use crate::houses::{HouseFrame, Sect};
use crate::zodiac::Sign;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Output record for a body with a reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBody {
    pub name: String,
    pub category: PointCategory,
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub speed: f64,
    pub retrograde: bool,
    pub sign: Sign,
    pub degree_in_sign: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_position: Option<f64>,
}

/// Output record for one body; a failed body keeps only its name and error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PackedBody {
    Placed(PlacedBody),
    Failed { name: String, error: String },
}

impl PackedBody {
    pub fn name(&self) -> &str {
        match self {
            PackedBody::Placed(body) => &body.name,
            PackedBody::Failed { name, .. } => name,
        }
    }

    pub fn placed(&self) -> Option<&PlacedBody> {
        match self {
            PackedBody::Placed(body) => Some(body),
            PackedBody::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PackedBody::Placed(_) => None,
            PackedBody::Failed { error, .. } => Some(error),
        }
    }
}

/// Output record for an angle or lot; these never move
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedPoint {
    #[serde(skip)]
    pub name: String,
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_position: Option<f64>,
}

/// How the chart was requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMeta {
    pub instant: DateTime<Utc>,
    pub julian_day: f64,
    pub location: GeoLocation,
    pub zodiac: Zodiac,
    pub house_system: HouseSystem,
}

/// A fully resolved chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ChartMeta>,
    pub sect: Sect,
    pub houses: HouseFrame,
    pub bodies: Vec<PackedBody>,
    /// Serialized as a map keyed by point name, in insertion order
    #[serde(serialize_with = "serialize_points")]
    pub points: Vec<PackedPoint>,
    pub aspects: Vec<Aspect>,
}

impl Chart {
    pub fn body(&self, name: &str) -> Option<&PackedBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn point(&self, name: &str) -> Option<&PackedPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    /// Aspects involving the named point, in either position
    pub fn aspects_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Aspect> + 'a {
        self.aspects
            .iter()
            .filter(move |a| a.a.to_string() == name || a.b.to_string() == name)
    }
}

fn serialize_points<S: Serializer>(points: &[PackedPoint], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(points.len()))?;
    for point in points {
        map.serialize_entry(&point.name, point)?;
    }
    map.end()
}
