//! Track model produced by GPX parsing.
//!
//! A parsed track is an ordered list of points with cumulative distance,
//! plus an optional human-readable name. The engine never mutates a track
//! after parsing; downstream components only read it.

pub mod gpx;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single point along a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// GPS latitude in degrees
    pub lat: f64,
    /// GPS longitude in degrees
    pub lon: f64,
    /// Elevation in meters (0 when the source omitted it)
    pub elevation_m: f64,
    /// Cumulative distance from the track start in kilometers
    pub distance_km: f64,
}

/// A parsed track with optional name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedTrack {
    /// Points in document order; cumulative distance is non-decreasing
    pub points: Vec<TrackPoint>,
    /// Name from `<metadata><name>`, falling back to `<trk><name>`
    pub name: Option<String>,
}

impl ParsedTrack {
    /// Total track distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.distance_km)
    }

    /// Total elevation gain in meters (sum of positive elevation deltas).
    pub fn elevation_gain_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].elevation_m - w[0].elevation_m).max(0.0))
            .sum()
    }

    /// Lowest elevation on the track, if any points exist.
    pub fn min_elevation_m(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.elevation_m)
            .reduce(f64::min)
    }

    /// Highest elevation on the track, if any points exist.
    pub fn max_elevation_m(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.elevation_m)
            .reduce(f64::max)
    }
}

/// Errors that can occur while reading a track.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
