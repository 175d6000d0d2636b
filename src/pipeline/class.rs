use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper edge (inclusive) of the light class, in kilograms.
pub const LIGHT_MAX_KG: f64 = 999.0;
/// Upper edge (inclusive) of the medium class, in kilograms.
pub const MEDIUM_MAX_KG: f64 = 9999.0;

/// Payload-mass bucket of a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LaunchClass {
    Light,
    Medium,
    Heavy,
}

impl LaunchClass {
    /// Classes in reporting order.
    pub const ALL: [LaunchClass; 3] = [LaunchClass::Light, LaunchClass::Medium, LaunchClass::Heavy];

    /// Buckets a payload using right-closed intervals over the edges
    /// `0 / 999 / 9999 / inf`.
    ///
    /// | Payload (kg)       | Class  |
    /// |--------------------|--------|
    /// | (0, 999]           | Light  |
    /// | (999, 9999]        | Medium |
    /// | > 9999             | Heavy  |
    /// | <= 0 or missing    | none   |
    pub fn from_payload(payload_kg: f64) -> Option<Self> {
        match payload_kg {
            p if p.is_nan() || p <= 0.0 => None,
            p if p <= LIGHT_MAX_KG => Some(LaunchClass::Light),
            p if p <= MEDIUM_MAX_KG => Some(LaunchClass::Medium),
            _ => Some(LaunchClass::Heavy),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LaunchClass::Light => "Light",
            LaunchClass::Medium => "Medium",
            LaunchClass::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for LaunchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
