//! Ridecast - GPX Ride-Time Estimation Engine
//!
//! Ingests a GPS track and a rider/bike configuration and produces an
//! elevation-vs-distance profile ready for rendering plus a physics-based
//! estimate of total ride time, average speed, and a distance/time
//! timeline along the route.
//!
//! All computation is synchronous and side-effect-free: each entry point
//! (`parse_gpx`, `estimate_ride`, `build_profile`) is a pure function of
//! its inputs, recomputed in full per call. Acquiring the raw GPX text and
//! rendering the results are the caller's concern.

pub mod estimate;
pub mod geo;
pub mod physics;
pub mod profile;
pub mod rider;
pub mod settings;
pub mod track;

// Re-export commonly used types
pub use estimate::{estimate_ride, RideEstimate, TimelinePoint};
pub use profile::{build_profile, time_ticks, AxisTick, TimeTick, TrackProfile};
pub use rider::{BikeType, RiderConfig};
pub use settings::{FileSettingsStore, SettingsStore};
pub use track::gpx::{parse_gpx, parse_gpx_file};
pub use track::{ParsedTrack, TrackPoint};
