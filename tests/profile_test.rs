//! Integration tests for profile projection and tick generation.

use ridecast::estimate::TimelinePoint;
use ridecast::{build_profile, time_ticks, RideEstimate, TrackPoint};

fn point(distance_km: f64, elevation_m: f64) -> TrackPoint {
    TrackPoint {
        lat: 45.0,
        lon: 7.0,
        elevation_m,
        distance_km,
    }
}

fn sample_points() -> Vec<TrackPoint> {
    vec![
        point(0.0, 100.0),
        point(10.0, 400.0),
        point(25.0, 250.0),
        point(50.0, 600.0),
    ]
}

#[test]
fn test_empty_track_has_no_profile() {
    assert!(build_profile(&[], 1000.0).is_none());
}

#[test]
fn test_width_is_floored_to_minimum() {
    let profile = build_profile(&sample_points(), 100.0).unwrap();
    assert_eq!(profile.graph_width, 320.0);

    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    assert_eq!(profile.graph_width, 1000.0);
}

#[test]
fn test_projection_bounds() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    assert_eq!(profile.total_distance_km, 50.0);
    assert_eq!(profile.min_elevation, 100.0);
    assert_eq!(profile.max_elevation, 600.0);
    assert_eq!(profile.graph_height, 400.0);
    assert_eq!(profile.padding_top, 28.0);
}

#[test]
fn test_line_path_endpoints() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    // First point: x = 0, lowest elevation → y at the bottom edge.
    assert!(profile.line_path.starts_with("M 0.00 400.00 L "));
    // Last point: x = width, highest elevation → y at the top padding.
    assert!(profile.line_path.ends_with("L 1000.00 28.00"));
}

#[test]
fn test_fill_path_is_closed_to_bottom_edge() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    assert!(profile.fill_path.starts_with("M 0 400 L "));
    assert!(profile.fill_path.ends_with("L 1000 400 Z"));
}

#[test]
fn test_flat_track_uses_unit_elevation_range() {
    let points = vec![point(0.0, 250.0), point(10.0, 250.0)];
    let profile = build_profile(&points, 1000.0).unwrap();
    // All points sit on the bottom edge of the usable area.
    assert!(profile.line_path.starts_with("M 0.00 400.00"));
    assert!(profile.line_path.ends_with("1000.00 400.00"));
}

#[test]
fn test_distance_ticks_inside_range() {
    let points = vec![point(0.0, 100.0), point(95.0, 200.0)];
    let profile = build_profile(&points, 1000.0).unwrap();

    assert!(profile.distance_ticks.len() >= 3);
    // round(95/10) = 10 targets → nice step 10 → ticks at 10..90.
    assert_eq!(profile.distance_ticks.len(), 9);
    for tick in &profile.distance_ticks {
        assert!(tick.value > 0.0 && tick.value < 95.0);
        assert!(tick.position > 0.0 && tick.position < 1000.0);
    }
    assert_eq!(profile.distance_ticks[0].value, 10.0);
}

#[test]
fn test_elevation_ticks_use_data_projection() {
    let points = vec![point(0.0, 0.0), point(10.0, 500.0)];
    let profile = build_profile(&points, 1000.0).unwrap();

    for tick in &profile.elevation_ticks {
        assert!(tick.value > 0.0 && tick.value < 500.0);
        // Higher elevation maps to a smaller y.
        assert!(tick.position > 28.0 && tick.position < 400.0);
    }
    let positions: Vec<f64> = profile.elevation_ticks.iter().map(|t| t.position).collect();
    for pair in positions.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

fn estimate_with_total(total_time_s: f64, total_distance_m: f64) -> RideEstimate {
    // Uniform-speed timeline in 10 steps.
    let timeline: Vec<TimelinePoint> = (0..=10)
        .map(|i| TimelinePoint {
            time_s: total_time_s * i as f64 / 10.0,
            distance_m: total_distance_m * i as f64 / 10.0,
        })
        .collect();
    RideEstimate {
        total_time_s,
        average_speed_kph: total_distance_m / 1000.0 / (total_time_s / 3600.0),
        total_distance_m,
        timeline,
    }
}

#[test]
fn test_time_ticks_90_minutes_no_duplicate_final() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    let estimate = estimate_with_total(5400.0, 45_000.0);

    let ticks = time_ticks(&profile, &estimate);
    let times: Vec<f64> = ticks.iter().map(|t| t.time_s).collect();
    // 5400 is itself a 30-minute boundary: it appears once, not twice.
    assert_eq!(times, vec![1800.0, 3600.0, 5400.0]);
    assert_eq!(ticks[2].label, "1h30m");
    assert!((ticks[2].position - 1000.0).abs() < 1e-6);
    assert!((ticks[2].percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_time_ticks_include_final_partial_interval() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    let estimate = estimate_with_total(4000.0, 30_000.0);

    let ticks = time_ticks(&profile, &estimate);
    let times: Vec<f64> = ticks.iter().map(|t| t.time_s).collect();
    assert_eq!(times, vec![1800.0, 3600.0, 4000.0]);
}

#[test]
fn test_short_ride_gets_single_final_tick() {
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    let estimate = estimate_with_total(1200.0, 8_000.0);

    let ticks = time_ticks(&profile, &estimate);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].time_s, 1200.0);
    assert_eq!(ticks[0].label, "20m");
}

#[test]
fn test_tick_positions_follow_the_timeline_not_the_clock() {
    // Slow first half, fast second half: the 30-minute tick sits well
    // before the geometric midpoint.
    let profile = build_profile(&sample_points(), 1000.0).unwrap();
    let timeline = vec![
        TimelinePoint { time_s: 0.0, distance_m: 0.0 },
        TimelinePoint { time_s: 2400.0, distance_m: 10_000.0 },
        TimelinePoint { time_s: 3000.0, distance_m: 40_000.0 },
    ];
    let estimate = RideEstimate {
        total_time_s: 3000.0,
        average_speed_kph: 48.0,
        total_distance_m: 40_000.0,
        timeline,
    };

    let ticks = time_ticks(&profile, &estimate);
    assert_eq!(ticks[0].time_s, 1800.0);
    // 1800 s into a 2400 s first leg of 10 km → 7.5 km of 40 km.
    assert!((ticks[0].position - 7500.0 / 40_000.0 * 1000.0).abs() < 1e-6);
}
