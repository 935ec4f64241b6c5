use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use urania::chart::{cast_chart, ChartRequest};
use urania::ephemeris::{CannedEphemeris, GeoLocation, HouseSystem};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cast a chart from a canned ephemeris and print it as JSON")]
struct Args {
    #[arg(long, help = "Canned ephemeris fixture (JSON)")]
    fixture: PathBuf,

    #[arg(long, help = "Chart profile (TOML); defaults to configs/chart.toml when present")]
    profile: Option<PathBuf>,

    #[arg(long, help = "UTC instant, RFC 3339; defaults to now")]
    date: Option<DateTime<Utc>>,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    #[arg(long, help = "Overrides the profile's house system (name or letter)")]
    house_system: Option<HouseSystem>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let profile = urania_config::load_profile_or_default(args.profile.as_deref())?;
    let mut settings = profile.settings;
    if let Some(system) = args.house_system {
        settings.house_system = system;
    }

    let text = fs::read_to_string(&args.fixture)
        .map_err(|e| anyhow::anyhow!("Could not read fixture {}: {e}", args.fixture.display()))?;
    let ephemeris = CannedEphemeris::from_json(&text)?;

    let request = ChartRequest::new(
        args.date.unwrap_or_else(Utc::now),
        GeoLocation {
            lat: args.lat,
            lon: args.lon,
        },
    )
    .with_settings(settings);
    info!(
        "casting {} bodies with {} houses",
        profile.catalog.len(),
        request.settings.house_system
    );

    let chart = cast_chart(&ephemeris, &profile.catalog, &request)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    println!("{}", json);
    Ok(())
}
