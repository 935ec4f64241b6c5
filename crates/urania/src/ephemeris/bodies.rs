//! The set of bodies a chart asks the provider for.

use serde::{Deserialize, Serialize};

/// Offset added to a minor-planet number to form its body code
pub const ASTEROID_OFFSET: i32 = 10_000;

pub const SUN: i32 = 0;
pub const MOON: i32 = 1;
pub const VENUS: i32 = 3;
pub const MARS: i32 = 4;

/// Orb category of a point, fixed when the point is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    Luminary,
    Angle,
    Node,
    Chiron,
    Lilith,
    #[default]
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub code: i32,
    #[serde(default)]
    pub category: PointCategory,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, code: i32, category: PointCategory) -> Self {
        Self {
            name: name.into(),
            code,
            category,
        }
    }
}

// Swiss Ephemeris body codes
const STANDARD_BODIES: &[(&str, i32, PointCategory)] = &[
    ("Sun", 0, PointCategory::Luminary),
    ("Moon", 1, PointCategory::Luminary),
    ("Mercury", 2, PointCategory::Main),
    ("Venus", 3, PointCategory::Main),
    ("Mars", 4, PointCategory::Main),
    ("Jupiter", 5, PointCategory::Main),
    ("Saturn", 6, PointCategory::Main),
    ("Uranus", 7, PointCategory::Main),
    ("Neptune", 8, PointCategory::Main),
    ("Pluto", 9, PointCategory::Main),
    ("Mean Node", 10, PointCategory::Node),
    ("True Node", 11, PointCategory::Node),
    ("Lilith (Mean)", 12, PointCategory::Lilith),
    ("Lilith (Oscu)", 13, PointCategory::Lilith),
    ("Chiron", 15, PointCategory::Chiron),
    ("Pholus", 16, PointCategory::Chiron),
    ("Ceres", 17, PointCategory::Main),
    ("Pallas", 18, PointCategory::Main),
    ("Juno", 19, PointCategory::Main),
    ("Vesta", 20, PointCategory::Main),
];

/// Ordered list of bodies to compute; order is preserved in the chart output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    bodies: Vec<BodySpec>,
}

impl BodyCatalog {
    pub fn new(bodies: Vec<BodySpec>) -> Self {
        Self { bodies }
    }

    /// Classical planets, nodes, Liliths, centaurs and the four main asteroids
    pub fn standard() -> Self {
        Self {
            bodies: STANDARD_BODIES
                .iter()
                .map(|(name, code, category)| BodySpec::new(*name, *code, *category))
                .collect(),
        }
    }

    /// Append minor planets parsed from a `"433:Eros,7066:Nessus"` list.
    ///
    /// Bodies whose code is already present are not added twice.
    pub fn with_asteroids(mut self, spec: &str) -> Self {
        for body in parse_asteroid_list(spec) {
            if !self.bodies.iter().any(|b| b.code == body.code) {
                self.bodies.push(body);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodySpec> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&BodySpec> {
        self.bodies.iter().find(|b| b.name == name)
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse `number[:name]` chunks separated by commas.
///
/// Chunks whose number does not parse are skipped; a missing name becomes
/// `Asteroid <number>`.
pub fn parse_asteroid_list(spec: &str) -> Vec<BodySpec> {
    spec.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| {
            let (number, name) = match chunk.split_once(':') {
                Some((number, name)) => (number.trim(), name.trim()),
                None => (chunk, ""),
            };
            let number: i32 = number.parse().ok()?;
            let name = if name.is_empty() {
                format!("Asteroid {}", number)
            } else {
                name.to_string()
            };
            Some(BodySpec::new(name, ASTEROID_OFFSET + number, PointCategory::Main))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_categories() {
        let catalog = BodyCatalog::standard();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.find("Sun").unwrap().category, PointCategory::Luminary);
        assert_eq!(catalog.find("True Node").unwrap().category, PointCategory::Node);
        assert_eq!(catalog.find("Lilith (Oscu)").unwrap().category, PointCategory::Lilith);
        assert_eq!(catalog.find("Pholus").unwrap().category, PointCategory::Chiron);
        assert_eq!(catalog.find("Ceres").unwrap().category, PointCategory::Main);
    }

    #[test]
    fn test_parse_asteroid_list() {
        let bodies = parse_asteroid_list("433:Eros, 7066:Nessus,136199 ,bad:Thing,,");
        assert_eq!(bodies.len(), 3);
        assert_eq!(bodies[0], BodySpec::new("Eros", 10_433, PointCategory::Main));
        assert_eq!(bodies[1].name, "Nessus");
        assert_eq!(bodies[2].name, "Asteroid 136199");
        assert_eq!(bodies[2].code, 146_199);
    }

    #[test]
    fn test_with_asteroids_skips_duplicates() {
        let catalog = BodyCatalog::standard().with_asteroids("433:Eros,433:Eros again");
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.iter().last().unwrap().name, "Eros");
    }
}
