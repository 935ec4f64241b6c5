use crate::aspects::AspectSettings;
use crate::ephemeris::{HouseSystem, Zodiac};
use serde::{Deserialize, Serialize};

/// Everything that shapes a chart besides the instant and location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub zodiac: Zodiac,
    pub house_system: HouseSystem,
    pub aspects: AspectSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Ayanamsa;

    #[test]
    fn test_defaults() {
        let settings = ChartSettings::default();
        assert_eq!(settings.zodiac, Zodiac::Tropical);
        assert_eq!(settings.house_system, HouseSystem::Placidus);
        assert!(settings.aspects.skip_trivial_geometry);
    }

    #[test]
    fn test_partial_json() {
        let settings: ChartSettings = serde_json::from_str(
            r#"{
                "zodiac": { "type": "sidereal", "ayanamsa": "fagan_bradley" },
                "house_system": "whole_sign",
                "aspects": { "applying_only": true }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.zodiac, Zodiac::Sidereal(Ayanamsa::FaganBradley));
        assert_eq!(settings.house_system, HouseSystem::WholeSign);
        assert!(settings.aspects.applying_only);
        assert!(settings.aspects.include_cusps);
    }
}
