use crate::aspects::orbs::OrbTable;
use crate::points::PointId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical aspect angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// The five Ptolemaic aspects
    pub const MAJOR: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle in degrees
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Quincunx => "quincunx",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One matched pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub a: PointId,
    pub b: PointId,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    /// Canonical angle that matched
    pub exact_angle: f64,
    /// Minimal separation between the two points, rounded to 4 places
    pub separation: f64,
    /// Deviation from the canonical angle, rounded to 4 places
    pub orb: f64,
    pub is_applying: bool,
    pub is_exact: bool,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectSettings {
    /// Add ASC and MC as candidates
    pub include_angles: bool,
    /// Add DSC, IC, Vertex and Anti-Vertex as candidates
    pub include_frame_points: bool,
    /// Add the twelve cusps as candidates
    pub include_cusps: bool,
    /// Skip pairs that coincide by construction of the house system
    pub skip_trivial_geometry: bool,
    pub orbs: OrbTable,
    /// Canonical angles to test
    pub kinds: Vec<AspectKind>,
    /// Keep only applying aspects
    pub applying_only: bool,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            include_angles: true,
            include_frame_points: true,
            include_cusps: true,
            skip_trivial_geometry: true,
            orbs: OrbTable::default(),
            kinds: AspectKind::MAJOR.to_vec(),
            applying_only: false,
        }
    }
}

impl AspectSettings {
    /// Requested kinds, deduplicated, in ascending angle order
    pub fn kinds_by_angle(&self) -> Vec<AspectKind> {
        let mut kinds = self.kinds.clone();
        kinds.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
        kinds.dedup();
        kinds
    }

    pub fn with_quincunx(mut self) -> Self {
        if !self.kinds.contains(&AspectKind::Quincunx) {
            self.kinds.push(AspectKind::Quincunx);
        }
        self
    }
}
