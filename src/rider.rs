//! Rider and bike configuration.
//!
//! Bundles everything the estimator needs about the rider: weights, power,
//! and the bike-type presets that seed the resistance coefficients.

use serde::{Deserialize, Serialize};

/// Bike category, selecting preset resistance coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeType {
    Mountain,
    #[default]
    Gravel,
    Race,
    Trekking,
}

impl std::fmt::Display for BikeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.preset().label)
    }
}

/// Preset coefficients for a bike type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BikePreset {
    /// Display label
    pub label: &'static str,
    /// Rolling resistance coefficient
    pub crr: f64,
    /// Effective frontal drag area in m²
    pub cda: f64,
    /// Drivetrain efficiency (0-1)
    pub efficiency: f64,
}

impl BikeType {
    /// Preset coefficients for this bike type.
    pub fn preset(&self) -> BikePreset {
        match self {
            BikeType::Mountain => BikePreset {
                label: "Mountain",
                crr: 0.009,
                cda: 0.47,
                efficiency: 0.94,
            },
            BikeType::Gravel => BikePreset {
                label: "Gravel",
                crr: 0.006,
                cda: 0.36,
                efficiency: 0.96,
            },
            BikeType::Race => BikePreset {
                label: "Race",
                crr: 0.004,
                cda: 0.3,
                efficiency: 0.97,
            },
            BikeType::Trekking => BikePreset {
                label: "Trekking / Commuter",
                crr: 0.007,
                cda: 0.4,
                efficiency: 0.95,
            },
        }
    }

    /// All bike types, in display order.
    pub fn all() -> [BikeType; 4] {
        [
            BikeType::Mountain,
            BikeType::Gravel,
            BikeType::Race,
            BikeType::Trekking,
        ]
    }
}

/// Rider and bike configuration supplied wholesale per estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderConfig {
    /// Bike category
    pub bike_type: BikeType,
    /// Bike weight in kilograms
    pub bike_weight_kg: f64,
    /// Rider weight in kilograms
    pub rider_weight_kg: f64,
    /// Sustained average power in watts
    pub avg_watts: f64,
    /// Rolling resistance coefficient
    pub crr: f64,
    /// Effective frontal drag area in m²
    pub cda: f64,
    /// Drivetrain efficiency (clamped to [0.5, 0.99] before use)
    pub efficiency: f64,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self::for_bike(BikeType::default())
    }
}

impl RiderConfig {
    /// Default configuration for a bike type: 8 kg bike, 70 kg rider, 200 W,
    /// preset-derived coefficients.
    pub fn for_bike(bike_type: BikeType) -> Self {
        let preset = bike_type.preset();
        Self {
            bike_type,
            bike_weight_kg: 8.0,
            rider_weight_kg: 70.0,
            avg_watts: 200.0,
            crr: preset.crr,
            cda: preset.cda,
            efficiency: preset.efficiency,
        }
    }

    /// Apply the presets of a bike type, keeping weights and power.
    pub fn with_bike_type(mut self, bike_type: BikeType) -> Self {
        let preset = bike_type.preset();
        self.bike_type = bike_type;
        self.crr = preset.crr;
        self.cda = preset.cda;
        self.efficiency = preset.efficiency;
        self
    }

    /// Total system mass (rider + bike) in kilograms.
    pub fn total_mass_kg(&self) -> f64 {
        self.bike_weight_kg + self.rider_weight_kg
    }

    /// Mechanical power delivered to the wheel after drivetrain losses.
    pub fn wheel_power_watts(&self) -> f64 {
        self.avg_watts * self.efficiency.clamp(0.5, 0.99)
    }

    /// Whether an estimate can be computed from this configuration.
    ///
    /// All six numeric fields must be strictly positive. A failing
    /// configuration is "not yet computable" rather than an error.
    pub fn is_computable(&self) -> bool {
        self.avg_watts > 0.0
            && self.bike_weight_kg > 0.0
            && self.rider_weight_kg > 0.0
            && self.crr > 0.0
            && self.cda > 0.0
            && self.efficiency > 0.0
    }
}

/// A band of typical sustained power outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerDistribution {
    /// Stable identifier
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Human-readable range, e.g. "120–180 W"
    pub range: &'static str,
    /// Lower bound in watts (inclusive)
    pub min_watts: f64,
    /// Upper bound in watts (inclusive); None for the open-ended top band
    pub max_watts: Option<f64>,
}

/// Canonical power bands from sedentary to professional.
pub const POWER_DISTRIBUTIONS: [PowerDistribution; 5] = [
    PowerDistribution {
        id: "sedentary",
        label: "\"no sports\" adult",
        range: "50–80 W",
        min_watts: 50.0,
        max_watts: Some(79.0),
    },
    PowerDistribution {
        id: "commuter",
        label: "Untrained commuter",
        range: "80–120 W",
        min_watts: 80.0,
        max_watts: Some(119.0),
    },
    PowerDistribution {
        id: "recreational",
        label: "Recreational cyclist",
        range: "120–180 W",
        min_watts: 120.0,
        max_watts: Some(179.0),
    },
    PowerDistribution {
        id: "amateur",
        label: "Trained amateur",
        range: "180–280 W",
        min_watts: 180.0,
        max_watts: Some(279.0),
    },
    PowerDistribution {
        id: "pro",
        label: "Pro",
        range: "280+ W",
        min_watts: 279.0,
        max_watts: None,
    },
];

/// Find the power band covering a wattage, if any.
pub fn distribution_for_watts(watts: f64) -> Option<&'static PowerDistribution> {
    POWER_DISTRIBUTIONS
        .iter()
        .find(|d| watts >= d.min_watts && d.max_watts.map_or(true, |max| watts <= max))
}

/// Display label for the rider band a wattage falls into.
pub fn rider_type_label(watts: f64) -> &'static str {
    distribution_for_watts(watts).map_or("Custom rider", |d| d.label)
}
