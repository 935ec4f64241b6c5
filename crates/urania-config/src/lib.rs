use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::aspects::AspectSettings;
use urania::chart::ChartSettings;
use urania::ephemeris::{Ayanamsa, BodyCatalog, HouseSystem, Zodiac};

/// Extra minor planets, e.g. `433:Eros,7066:Nessus`
pub const ASTEROIDS_ENV: &str = "URANIA_ASTEROIDS";

const PROFILE_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

/// Everything a chart profile decides
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProfile {
    pub settings: ChartSettings,
    pub catalog: BodyCatalog,
}

impl Default for ChartProfile {
    fn default() -> Self {
        Self {
            settings: ChartSettings::default(),
            catalog: BodyCatalog::standard(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileToml {
    house_system: Option<String>,
    zodiac: Option<String>,
    ayanamsa: Option<String>,
    bodies: BodiesToml,
    aspects: AspectSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BodiesToml {
    /// Restrict the standard catalog to these names, in catalog order
    only: Option<Vec<String>>,
    asteroids: Option<String>,
}

/// Try an explicit path, else the common relative paths for `configs/chart.toml`.
pub fn read_profile_toml_text(explicit: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = explicit {
        return fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read profile {}: {e}", path.display()));
    }
    for p in &PROFILE_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            debug!("loaded chart profile from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load chart.toml from {:?}", PROFILE_PATHS);
}

fn parse_zodiac(zodiac: Option<&str>, ayanamsa: Option<&str>) -> anyhow::Result<Zodiac> {
    let ayanamsa = ayanamsa
        .map(str::parse::<Ayanamsa>)
        .transpose()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    match zodiac.map(|z| z.trim().to_lowercase()).as_deref() {
        None | Some("tropical") => {
            if ayanamsa.is_some() {
                anyhow::bail!("ayanamsa is only meaningful with zodiac = \"sidereal\"");
            }
            Ok(Zodiac::Tropical)
        }
        Some("sidereal") => Ok(Zodiac::Sidereal(ayanamsa.unwrap_or_default())),
        Some(other) => anyhow::bail!("Unknown zodiac {other:?} (expected tropical or sidereal)"),
    }
}

fn build_catalog(bodies: &BodiesToml) -> anyhow::Result<BodyCatalog> {
    let standard = BodyCatalog::standard();
    let mut catalog = match &bodies.only {
        None => standard,
        Some(names) => {
            for name in names {
                if standard.find(name).is_none() {
                    anyhow::bail!("bodies.only names an unknown body: {name}");
                }
            }
            BodyCatalog::new(
                standard
                    .iter()
                    .filter(|spec| names.contains(&spec.name))
                    .cloned()
                    .collect(),
            )
        }
    };
    if let Some(spec) = &bodies.asteroids {
        catalog = catalog.with_asteroids(spec);
    }
    Ok(catalog)
}

/// Parse a profile without consulting the environment.
pub fn load_profile_from_str(text: &str) -> anyhow::Result<ChartProfile> {
    let raw: ProfileToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse chart profile: {e}"))?;

    let house_system = match raw.house_system.as_deref() {
        Some(s) => s
            .parse::<HouseSystem>()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        None => HouseSystem::default(),
    };
    let zodiac = parse_zodiac(raw.zodiac.as_deref(), raw.ayanamsa.as_deref())?;
    let catalog = build_catalog(&raw.bodies)?;

    Ok(ChartProfile {
        settings: ChartSettings {
            zodiac,
            house_system,
            aspects: raw.aspects,
        },
        catalog,
    })
}

/// Append asteroids from [`ASTEROIDS_ENV`] when it is set.
pub fn apply_env_asteroids(mut profile: ChartProfile) -> ChartProfile {
    if let Ok(spec) = std::env::var(ASTEROIDS_ENV) {
        debug!("adding asteroids from {}: {}", ASTEROIDS_ENV, spec);
        profile.catalog = profile.catalog.with_asteroids(&spec);
    }
    profile
}

/// Load the profile at `explicit`, or the first `configs/chart.toml` found.
pub fn load_profile(explicit: Option<&Path>) -> anyhow::Result<ChartProfile> {
    let text = read_profile_toml_text(explicit)?;
    Ok(apply_env_asteroids(load_profile_from_str(&text)?))
}

/// Like [`load_profile`], but falls back to built-in defaults when no profile
/// path was given and none of the default locations exist.
pub fn load_profile_or_default(explicit: Option<&Path>) -> anyhow::Result<ChartProfile> {
    if explicit.is_some() {
        return load_profile(explicit);
    }
    match read_profile_toml_text(None) {
        Ok(text) => Ok(apply_env_asteroids(load_profile_from_str(&text)?)),
        Err(_) => {
            debug!("no chart.toml found; using built-in defaults");
            Ok(apply_env_asteroids(ChartProfile::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urania::aspects::AspectKind;

    #[test]
    fn test_empty_profile_is_default() {
        let profile = load_profile_from_str("").unwrap();
        assert_eq!(profile, ChartProfile::default());
    }

    #[test]
    fn test_full_profile() {
        let profile = load_profile_from_str(
            r#"
            house_system = "W"
            zodiac = "sidereal"
            ayanamsa = "chitrapaksha"

            [bodies]
            only = ["Sun", "Moon", "Venus", "Mars"]
            asteroids = "433:Eros"

            [aspects]
            include_cusps = false
            kinds = ["conjunction", "square", "quincunx"]

            [aspects.orbs]
            main = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(profile.settings.house_system, HouseSystem::WholeSign);
        assert_eq!(profile.settings.zodiac, Zodiac::Sidereal(Ayanamsa::Lahiri));
        assert!(!profile.settings.aspects.include_cusps);
        assert!(profile.settings.aspects.include_angles);
        assert_eq!(
            profile.settings.aspects.kinds,
            vec![AspectKind::Conjunction, AspectKind::Square, AspectKind::Quincunx]
        );
        assert_eq!(profile.settings.aspects.orbs.main, 5.0);
        assert_eq!(profile.settings.aspects.orbs.luminary, 8.0);

        let names: Vec<&str> = profile.catalog.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Sun", "Moon", "Venus", "Mars", "Eros"]);
        assert_eq!(profile.catalog.find("Eros").unwrap().code, 10_433);
    }

    #[test]
    fn test_sidereal_defaults_to_lahiri() {
        let profile = load_profile_from_str(r#"zodiac = "sidereal""#).unwrap();
        assert_eq!(profile.settings.zodiac, Zodiac::Sidereal(Ayanamsa::Lahiri));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load_profile_from_str(r#"house_system = "X""#).is_err());
        assert!(load_profile_from_str(r#"zodiac = "draconic""#).is_err());
        assert!(load_profile_from_str(r#"ayanamsa = "lahiri""#).is_err());
        assert!(load_profile_from_str("[bodies]\nonly = [\"Nibiru\"]").is_err());
        assert!(load_profile_from_str("house_system = ").is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let missing = Path::new("/nonexistent/urania/chart.toml");
        assert!(load_profile(Some(missing)).is_err());
        assert!(load_profile_or_default(Some(missing)).is_err());
    }
}
