//! Ride time estimation.
//!
//! Walks the track segment by segment, solves the steady-state speed for
//! each, and accumulates a distance/time timeline. Everything here is a
//! pure function of (track, configuration); an input that cannot yet
//! produce an estimate yields `None` rather than an error.

use crate::physics::{self, GRAVITY};
use crate::rider::RiderConfig;
use crate::track::TrackPoint;
use serde::{Deserialize, Serialize};

/// Minimum drag area fed to the solver.
const MIN_CDA: f64 = 0.05;
/// Minimum rolling resistance coefficient fed to the solver.
const MIN_CRR: f64 = 0.0001;

/// Cumulative time/distance sample along the estimated ride.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Cumulative ride time in seconds
    pub time_s: f64,
    /// Cumulative distance in meters
    pub distance_m: f64,
}

/// A complete ride estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideEstimate {
    /// Total ride time in seconds
    pub total_time_s: f64,
    /// Average speed in km/h
    pub average_speed_kph: f64,
    /// Total distance in meters
    pub total_distance_m: f64,
    /// Timeline starting at (0, 0), monotonically increasing
    pub timeline: Vec<TimelinePoint>,
}

impl RideEstimate {
    /// Human-readable total duration, e.g. "2h 05m".
    pub fn formatted_duration(&self) -> String {
        format_duration(self.total_time_s)
    }
}

/// Estimate ride time over a track for a rider configuration.
///
/// Returns `None` when the track has fewer than 2 points, when any
/// configuration value is non-positive, or when the derived total time is
/// non-finite or zero — all "not yet computable" states.
pub fn estimate_ride(points: &[TrackPoint], config: &RiderConfig) -> Option<RideEstimate> {
    if points.len() < 2 {
        return None;
    }

    if !config.is_computable() {
        return None;
    }

    let total_mass_kg = config.total_mass_kg();
    let wheel_power = config.wheel_power_watts();
    if wheel_power <= 0.0 || total_mass_kg <= 0.0 {
        return None;
    }

    let mut total_time_s = 0.0;
    let mut total_distance_m = 0.0;
    let mut timeline = vec![TimelinePoint {
        time_s: 0.0,
        distance_m: 0.0,
    }];

    for pair in points.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let delta_distance_m = (current.distance_km - previous.distance_km) * 1000.0;
        // Duplicate or out-of-order points contribute nothing.
        if delta_distance_m <= 0.0 {
            continue;
        }

        let delta_elevation = current.elevation_m - previous.elevation_m;
        let grade = delta_elevation / delta_distance_m;
        let gravity_force = total_mass_kg * GRAVITY * grade;
        let rolling_force = total_mass_kg * GRAVITY * config.crr.max(MIN_CRR);
        let speed = physics::solve_speed(
            wheel_power,
            gravity_force,
            rolling_force,
            config.cda.max(MIN_CDA),
        );

        total_time_s += delta_distance_m / speed;
        total_distance_m += delta_distance_m;
        timeline.push(TimelinePoint {
            time_s: total_time_s,
            distance_m: total_distance_m,
        });
    }

    if !total_time_s.is_finite() || total_time_s <= 0.0 {
        return None;
    }

    let distance_km = total_distance_m / 1000.0;
    let average_speed_kph = distance_km / (total_time_s / 3600.0);

    Some(RideEstimate {
        total_time_s,
        average_speed_kph,
        total_distance_m,
        timeline,
    })
}

/// Distance in meters covered at a given time, interpolated linearly
/// within the timeline segment covering the target.
pub fn distance_at_time(timeline: &[TimelinePoint], target_s: f64) -> f64 {
    if timeline.is_empty() || target_s <= 0.0 {
        return 0.0;
    }

    for pair in timeline.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if target_s <= current.time_s {
            let time_delta = current.time_s - previous.time_s;
            if time_delta <= 0.0 {
                return current.distance_m;
            }

            let ratio = (target_s - previous.time_s) / time_delta;
            return previous.distance_m + ratio * (current.distance_m - previous.distance_m);
        }
    }

    timeline[timeline.len() - 1].distance_m
}

/// Format a duration as up to two of hours/minutes/seconds, e.g.
/// "1h 05m", "12m 30s", "45s". Non-finite or non-positive input is "0m".
pub fn format_duration(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return "0m".to_string();
    }

    let hours = (total_seconds / 3600.0).floor() as u64;
    let minutes = ((total_seconds % 3600.0) / 60.0).floor() as u64;
    let seconds = (total_seconds % 60.0).round() as u64;
    let mut parts = Vec::new();

    if hours > 0 {
        parts.push(format!("{}h", hours));
    }

    if minutes > 0 || hours > 0 {
        if hours > 0 {
            parts.push(format!("{:02}m", minutes));
        } else {
            parts.push(format!("{}m", minutes));
        }
    }

    if hours == 0 && parts.len() < 2 && seconds > 0 {
        if minutes > 0 {
            parts.push(format!("{:02}s", seconds));
        } else {
            parts.push(format!("{}s", seconds));
        }
    }

    parts.join(" ")
}

/// Compact label for a time-axis tick: "1h30m" past the hour, "45m" below.
pub fn format_axis_time_label(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0m".to_string();
    }

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).round() as u64;
    if hours > 0 {
        return format!("{}h{:02}m", hours, minutes);
    }

    format!("{}m", minutes)
}
