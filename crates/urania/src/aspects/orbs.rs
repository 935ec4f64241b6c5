use crate::ephemeris::PointCategory;
use serde::{Deserialize, Serialize};

/// Maximum orb per point category, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbTable {
    pub main: f64,
    pub luminary: f64,
    pub angle: f64,
    pub node: f64,
    pub chiron: f64,
    pub lilith: f64,
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            main: 6.0,
            luminary: 8.0,
            angle: 4.0,
            node: 3.0,
            chiron: 3.0,
            lilith: 3.0,
        }
    }
}

impl OrbTable {
    pub fn for_category(&self, category: PointCategory) -> f64 {
        match category {
            PointCategory::Main => self.main,
            PointCategory::Luminary => self.luminary,
            PointCategory::Angle => self.angle,
            PointCategory::Node => self.node,
            PointCategory::Chiron => self.chiron,
            PointCategory::Lilith => self.lilith,
        }
    }

    /// Orb allowed for a pair: the wider of the two categories
    pub fn allowed(&self, a: PointCategory, b: PointCategory) -> f64 {
        self.for_category(a).max(self.for_category(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let orbs = OrbTable::default();
        assert_eq!(orbs.for_category(PointCategory::Main), 6.0);
        assert_eq!(orbs.for_category(PointCategory::Luminary), 8.0);
        assert_eq!(orbs.for_category(PointCategory::Angle), 4.0);
    }

    #[test]
    fn test_pair_takes_wider_orb() {
        let orbs = OrbTable::default();
        assert_eq!(orbs.allowed(PointCategory::Node, PointCategory::Luminary), 8.0);
        assert_eq!(orbs.allowed(PointCategory::Angle, PointCategory::Lilith), 4.0);
        assert_eq!(orbs.allowed(PointCategory::Chiron, PointCategory::Chiron), 3.0);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let orbs: OrbTable = serde_json::from_str(r#"{ "main": 5.0 }"#).unwrap();
        assert_eq!(orbs.main, 5.0);
        assert_eq!(orbs.luminary, 8.0);
    }
}
