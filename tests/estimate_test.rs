//! Integration tests for the ride estimator.

use ridecast::physics::{self, GRAVITY};
use ridecast::{estimate_ride, RiderConfig, TrackPoint};

fn point(distance_km: f64, elevation_m: f64) -> TrackPoint {
    TrackPoint {
        lat: 45.0,
        lon: 7.0 + distance_km / 100.0,
        elevation_m,
        distance_km,
    }
}

fn flat_track(length_km: f64, segments: usize) -> Vec<TrackPoint> {
    (0..=segments)
        .map(|i| point(length_km * i as f64 / segments as f64, 250.0))
        .collect()
}

#[test]
fn test_returns_none_for_single_point() {
    let config = RiderConfig::default();
    assert!(estimate_ride(&[point(0.0, 100.0)], &config).is_none());
    assert!(estimate_ride(&[], &config).is_none());
}

#[test]
fn test_returns_none_for_zero_watts() {
    let mut config = RiderConfig::default();
    config.avg_watts = 0.0;
    assert!(estimate_ride(&flat_track(10.0, 10), &config).is_none());
}

#[test]
fn test_returns_none_for_negative_rider_weight() {
    let mut config = RiderConfig::default();
    config.rider_weight_kg = -70.0;
    assert!(estimate_ride(&flat_track(10.0, 10), &config).is_none());
}

#[test]
fn test_flat_track_matches_single_segment_speed() {
    let config = RiderConfig::default();
    let estimate = estimate_ride(&flat_track(20.0, 40), &config).unwrap();

    let mass = config.total_mass_kg();
    let expected_mps = physics::solve_speed(
        config.wheel_power_watts(),
        0.0,
        mass * GRAVITY * config.crr,
        config.cda,
    );
    let expected_kph = expected_mps * 3.6;

    assert!(
        (estimate.average_speed_kph - expected_kph).abs() < 0.01,
        "average {} km/h vs expected {} km/h",
        estimate.average_speed_kph,
        expected_kph
    );
}

#[test]
fn test_totals_match_timeline_tail() {
    let config = RiderConfig::default();
    let points = vec![
        point(0.0, 100.0),
        point(2.0, 150.0),
        point(5.0, 120.0),
        point(9.0, 300.0),
    ];
    let estimate = estimate_ride(&points, &config).unwrap();

    let last = estimate.timeline.last().unwrap();
    assert!((estimate.total_time_s - last.time_s).abs() < 1e-9);
    assert!((estimate.total_distance_m - last.distance_m).abs() < 1e-9);
    assert!((estimate.total_distance_m - 9000.0).abs() < 1e-6);
}

#[test]
fn test_timeline_starts_at_origin_and_increases() {
    let config = RiderConfig::default();
    let points = vec![point(0.0, 100.0), point(1.0, 110.0), point(3.0, 90.0)];
    let estimate = estimate_ride(&points, &config).unwrap();

    let first = estimate.timeline.first().unwrap();
    assert_eq!(first.time_s, 0.0);
    assert_eq!(first.distance_m, 0.0);

    for pair in estimate.timeline.windows(2) {
        assert!(pair[1].time_s > pair[0].time_s);
        assert!(pair[1].distance_m > pair[0].distance_m);
    }
}

#[test]
fn test_duplicate_points_are_skipped() {
    let config = RiderConfig::default();
    let points = vec![
        point(0.0, 100.0),
        point(1.0, 110.0),
        point(1.0, 110.0), // duplicate
        point(2.0, 120.0),
    ];
    let estimate = estimate_ride(&points, &config).unwrap();

    // The duplicate contributes no timeline entry: origin + 2 segments.
    assert_eq!(estimate.timeline.len(), 3);
    assert!((estimate.total_distance_m - 2000.0).abs() < 1e-6);
}

#[test]
fn test_climbing_takes_longer_than_flat() {
    let config = RiderConfig::default();
    let flat = estimate_ride(&flat_track(10.0, 20), &config).unwrap();

    let climb: Vec<TrackPoint> = (0..=20)
        .map(|i| point(10.0 * i as f64 / 20.0, 250.0 + 30.0 * i as f64))
        .collect();
    let climbing = estimate_ride(&climb, &config).unwrap();

    assert!(climbing.total_time_s > flat.total_time_s);
}

#[test]
fn test_steep_descent_still_finite() {
    // Downhill all the way: solver floors at 0.5 m/s at worst, speeds are
    // capped at 60 m/s, so the time stays finite and positive.
    let config = RiderConfig::default();
    let descent: Vec<TrackPoint> = (0..=10)
        .map(|i| point(5.0 * i as f64 / 10.0, 2000.0 - 150.0 * i as f64))
        .collect();
    let estimate = estimate_ride(&descent, &config).unwrap();

    assert!(estimate.total_time_s.is_finite());
    assert!(estimate.total_time_s > 0.0);
    // 5 km at 60 m/s is the fastest possible outcome.
    assert!(estimate.total_time_s >= 5000.0 / 60.0 - 1e-6);
}
