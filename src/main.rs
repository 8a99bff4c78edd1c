//! Ridecast - GPX Ride-Time Estimation Engine
//!
//! CLI entry point: parses a GPX file, applies and persists rider
//! settings, and prints the estimate and profile summary. All computation
//! lives in the library; this binary is presentation only.

use anyhow::Context;
use clap::Parser;
use ridecast::profile;
use ridecast::rider;
use ridecast::settings::{self, FileSettingsStore, SettingsStore};
use ridecast::track::gpx::parse_gpx_file;
use ridecast::{estimate_ride, BikeType};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// GPX file to estimate
    gpx_file: PathBuf,

    /// Bike type preset: mountain, gravel, race, trekking
    #[arg(short, long)]
    bike: Option<String>,

    /// Bike weight in kilograms
    #[arg(long)]
    bike_weight: Option<f64>,

    /// Rider weight in kilograms
    #[arg(long)]
    rider_weight: Option<f64>,

    /// Sustained average power in watts
    #[arg(short, long)]
    watts: Option<f64>,

    /// Plot width in units (minimum 320)
    #[arg(long, default_value_t = 1000.0)]
    width: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ridecast v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let store = FileSettingsStore::new();
    let mut config = settings::load_or_default(&store);

    if let Some(bike) = &args.bike {
        let bike_type = parse_bike_type(bike)?;
        config = config.with_bike_type(bike_type);
    }
    if let Some(weight) = args.bike_weight {
        config.bike_weight_kg = weight;
    }
    if let Some(weight) = args.rider_weight {
        config.rider_weight_kg = weight;
    }
    if let Some(watts) = args.watts {
        config.avg_watts = watts;
    }

    // Best-effort persistence; the in-memory configuration stays
    // authoritative when the store is unavailable.
    if let Err(e) = store.save(&config) {
        tracing::warn!("could not persist settings: {}", e);
    }

    let track = parse_gpx_file(&args.gpx_file)
        .with_context(|| format!("could not read {}", args.gpx_file.display()))?;

    if track.points.is_empty() {
        anyhow::bail!("The GPX file does not contain any track points.");
    }

    tracing::info!(
        "parsed {} points over {:.2} km",
        track.points.len(),
        track.total_distance_km()
    );

    println!(
        "Track:          {}",
        track.name.as_deref().unwrap_or("(unnamed)")
    );
    println!("Distance:       {:.2} km", track.total_distance_km());
    println!("Elevation gain: {:.0} m", track.elevation_gain_m());
    println!(
        "Rider:          {} ({:.0} W)",
        rider::rider_type_label(config.avg_watts),
        config.avg_watts
    );
    println!("Bike:           {}", config.bike_type);

    match estimate_ride(&track.points, &config) {
        Some(estimate) => {
            println!("Estimated time: {}", estimate.formatted_duration());
            println!("Average speed:  {:.1} km/h", estimate.average_speed_kph);

            if let Some(track_profile) = profile::build_profile(&track.points, args.width) {
                let ticks = profile::time_ticks(&track_profile, &estimate);
                if !ticks.is_empty() {
                    println!("Checkpoints:");
                    for tick in ticks {
                        println!(
                            "  {:>6}  {:6.2} km  ({:.0}% of route)",
                            tick.label,
                            tick.percent / 100.0 * estimate.total_distance_m / 1000.0,
                            tick.percent
                        );
                    }
                }
            }
        }
        None => {
            println!("Estimate not computable for the current configuration.");
        }
    }

    Ok(())
}

fn parse_bike_type(raw: &str) -> anyhow::Result<BikeType> {
    match raw.to_lowercase().as_str() {
        "mountain" => Ok(BikeType::Mountain),
        "gravel" => Ok(BikeType::Gravel),
        "race" => Ok(BikeType::Race),
        "trekking" => Ok(BikeType::Trekking),
        other => anyhow::bail!("unknown bike type '{}' (expected mountain, gravel, race, or trekking)", other),
    }
}
