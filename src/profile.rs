//! Elevation profile projection and axis tick generation.
//!
//! Maps track points into normalized plotting coordinates on a bounded
//! width, emits SVG-style path descriptors, and produces "nice number"
//! axis ticks for distance and elevation plus fixed-interval time ticks.
//! The caller supplies the width; responsive sizing is its concern.

use crate::estimate::{self, RideEstimate};
use crate::track::TrackPoint;
use serde::{Deserialize, Serialize};

/// Plot geometry constants
pub const GRAPH_HEIGHT: f64 = 400.0;
pub const GRAPH_PADDING_TOP: f64 = 28.0;
pub const MIN_GRAPH_WIDTH: f64 = 320.0;
const DISTANCE_STEP_KM: f64 = 10.0;
const ELEVATION_STEP_M: f64 = 100.0;
const TIME_TICK_INTERVAL_SECONDS: f64 = 30.0 * 60.0;

/// A labeled axis value and its offset along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Tick value in axis units (km, meters)
    pub value: f64,
    /// Offset in plot units
    pub position: f64,
}

/// A time-axis tick mapped onto the distance axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    /// Ride time at this tick in seconds
    pub time_s: f64,
    /// Compact label, e.g. "1h30m"
    pub label: String,
    /// Horizontal offset in plot units
    pub position: f64,
    /// Horizontal offset as a percentage of the plot width
    pub percent: f64,
}

/// Projection of a track into plotting coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackProfile {
    /// Total track distance in kilometers
    pub total_distance_km: f64,
    /// Lowest elevation on the track in meters
    pub min_elevation: f64,
    /// Highest elevation on the track in meters
    pub max_elevation: f64,
    /// Effective plot width (caller's width, floored to the minimum)
    pub graph_width: f64,
    /// Plot height
    pub graph_height: f64,
    /// Reserved space above the highest point
    pub padding_top: f64,
    /// Polyline through all projected points, `M x y L x y …`
    pub line_path: String,
    /// Closed fill path anchored to the plot's bottom edge
    pub fill_path: String,
    /// Distance-axis ticks
    pub distance_ticks: Vec<AxisTick>,
    /// Elevation-axis ticks
    pub elevation_ticks: Vec<AxisTick>,
}

/// Project track points into a plot profile for the given width.
///
/// Returns `None` for an empty track. Recompute whenever the points or
/// the available width change; there is no caching.
pub fn build_profile(points: &[TrackPoint], width: f64) -> Option<TrackProfile> {
    if points.is_empty() {
        return None;
    }

    let width = width.max(MIN_GRAPH_WIDTH);
    let total_distance_km = points[points.len() - 1].distance_km;
    let min_elevation = points
        .iter()
        .map(|p| p.elevation_m)
        .fold(f64::INFINITY, f64::min);
    let max_elevation = points
        .iter()
        .map(|p| p.elevation_m)
        .fold(f64::NEG_INFINITY, f64::max);
    // Flat tracks keep a unit range so the projection stays well-defined.
    let elevation_range = (max_elevation - min_elevation).max(1.0);
    let usable_height = GRAPH_HEIGHT - GRAPH_PADDING_TOP;

    let coords: Vec<String> = points
        .iter()
        .map(|point| {
            let x = if total_distance_km > 0.0 {
                (point.distance_km / total_distance_km) * width
            } else {
                0.0
            };
            let normalized = (point.elevation_m - min_elevation) / elevation_range;
            let y = GRAPH_PADDING_TOP + (1.0 - normalized) * usable_height;
            format!("{:.2} {:.2}", x, y)
        })
        .collect();

    let line_path = format!("M {}", coords.join(" L "));
    let fill_path = format!(
        "M 0 {} L {} L {} {} Z",
        GRAPH_HEIGHT,
        coords.join(" L "),
        width,
        GRAPH_HEIGHT
    );

    let distance_ticks = axis_tick_values(total_distance_km, DISTANCE_STEP_KM)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: if total_distance_km > 0.0 {
                (value / total_distance_km) * width
            } else {
                0.0
            },
        })
        .collect();

    let elevation_ticks = axis_tick_values(elevation_range, ELEVATION_STEP_M)
        .into_iter()
        .map(|offset| {
            let value = min_elevation + offset;
            let normalized = (value - min_elevation) / elevation_range;
            AxisTick {
                value,
                position: GRAPH_PADDING_TOP + (1.0 - normalized) * usable_height,
            }
        })
        .collect();

    Some(TrackProfile {
        total_distance_km,
        min_elevation,
        max_elevation,
        graph_width: width,
        graph_height: GRAPH_HEIGHT,
        padding_top: GRAPH_PADDING_TOP,
        line_path,
        fill_path,
        distance_ticks,
        elevation_ticks,
    })
}

/// Tick values at nice-step multiples strictly inside (0, range).
fn axis_tick_values(range: f64, approx_step: f64) -> Vec<f64> {
    if range <= 0.0 {
        return Vec::new();
    }

    let step = nice_step(range, approx_step);
    let mut ticks = Vec::new();
    let mut value = step;

    while value < range {
        // Keep tick values clean to 4 decimals.
        ticks.push((value * 10_000.0).round() / 10_000.0);
        value += step;
    }

    ticks
}

/// Choose a round tick step ({1, 2, 5, 10} × 10ⁿ) close to `approx_step`
/// while keeping at least 3 ticks over the range.
fn nice_step(range: f64, approx_step: f64) -> f64 {
    if range <= 0.0 {
        return approx_step;
    }

    let approx_count = (range / approx_step).round().max(1.0);
    let target_count = approx_count.max(3.0);
    let raw_step = range / target_count;
    let power = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / power;
    let multiplier = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|&m| normalized <= m)
        .unwrap_or(10.0);

    multiplier * power
}

/// Time-axis ticks at 30-minute intervals, each positioned at the point
/// along the route the rider reaches by that time.
///
/// Always ends with a tick at the total time; when the total is itself a
/// 30-minute multiple the boundary tick doubles as the final one.
pub fn time_ticks(profile: &TrackProfile, estimate: &RideEstimate) -> Vec<TimeTick> {
    let total_time_s = estimate.total_time_s;
    let total_distance_m = estimate.total_distance_m;
    if !total_time_s.is_finite() || total_time_s <= 0.0 {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let intervals = (total_time_s / TIME_TICK_INTERVAL_SECONDS).floor() as u64;

    for i in 1..=intervals {
        let seconds = i as f64 * TIME_TICK_INTERVAL_SECONDS;
        let distance_m = estimate::distance_at_time(&estimate.timeline, seconds);
        let ratio = if total_distance_m > 0.0 {
            (distance_m / total_distance_m).min(1.0)
        } else {
            (seconds / total_time_s).min(1.0)
        };
        ticks.push(TimeTick {
            time_s: seconds,
            label: estimate::format_axis_time_label(seconds),
            position: ratio * profile.graph_width,
            percent: ratio * 100.0,
        });
    }

    let needs_final = ticks
        .last()
        .map_or(true, |tick| tick.time_s < total_time_s);
    if needs_final {
        let distance_m = estimate::distance_at_time(&estimate.timeline, total_time_s);
        let ratio = if total_distance_m > 0.0 {
            distance_m / total_distance_m
        } else {
            1.0
        };
        ticks.push(TimeTick {
            time_s: total_time_s,
            label: estimate::format_axis_time_label(total_time_s),
            position: ratio * profile.graph_width,
            percent: ratio * 100.0,
        });
    }

    ticks
}
