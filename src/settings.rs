//! Persistence of the last-used rider configuration.
//!
//! Storage is an injected capability so the defaulting and validation
//! logic is testable without a real backend. The file store keeps a flat
//! TOML table in the platform data directory. Loading is tolerant:
//! missing or corrupt entries fall back to the defaults, field by field,
//! without raising an error, and save failures never disturb the
//! in-memory configuration.

use crate::rider::{BikeType, RiderConfig};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Capability to load and save the last-used rider configuration.
pub trait SettingsStore {
    /// Load the stored configuration, or None when nothing usable exists.
    fn load(&self) -> Option<RiderConfig>;

    /// Persist the configuration. Callers may ignore the error; the
    /// in-memory configuration stays authoritative either way.
    fn save(&self, config: &RiderConfig) -> Result<(), SettingsError>;
}

/// File-backed settings store (TOML in the platform data directory).
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store at the default platform location.
    pub fn new() -> Self {
        Self {
            path: default_settings_path(),
        }
    }

    /// Store at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Option<RiderConfig> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredSettings = toml::from_str(&content).ok()?;
        Some(stored.into_config())
    }

    fn save(&self, config: &RiderConfig) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(config).map_err(|e| SettingsError::Serialize(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| SettingsError::Io(e.to_string()))
    }
}

/// Load from a store, falling back to the default configuration.
pub fn load_or_default(store: &dyn SettingsStore) -> RiderConfig {
    store.load().unwrap_or_default()
}

/// The application data directory.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ridecast", "Ridecast")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The settings file path.
pub fn default_settings_path() -> PathBuf {
    default_data_dir().join("settings.toml")
}

/// On-disk shape: every field optional so partial or stale entries merge
/// onto the defaults instead of being rejected wholesale.
#[derive(Debug, Deserialize)]
struct StoredSettings {
    bike_type: Option<BikeType>,
    bike_weight_kg: Option<f64>,
    rider_weight_kg: Option<f64>,
    avg_watts: Option<f64>,
    crr: Option<f64>,
    cda: Option<f64>,
    efficiency: Option<f64>,
}

impl StoredSettings {
    fn into_config(self) -> RiderConfig {
        let base = RiderConfig::for_bike(self.bike_type.unwrap_or_default());
        RiderConfig {
            bike_type: base.bike_type,
            bike_weight_kg: finite_or(self.bike_weight_kg, base.bike_weight_kg),
            rider_weight_kg: finite_or(self.rider_weight_kg, base.rider_weight_kg),
            avg_watts: finite_or(self.avg_watts, base.avg_watts),
            crr: finite_or(self.crr, base.crr),
            cda: finite_or(self.cda, base.cda),
            efficiency: finite_or(self.efficiency, base.efficiency),
        }
    }
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}
