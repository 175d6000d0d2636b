use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, Result};

/// Selection policy for a pipeline run.
///
/// Stored as a JSON object on disk; every field is optional and falls back to
/// its default:
/// ```json
/// {
///   "target_orbit": "LEO",
///   "min_qa": 2.0,
///   "spend_threshold": 10000000.0,
///   "default_country": "usa"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Orbit altitude a launch must target, compared exactly.
    pub target_orbit: String,
    /// Launches need a QA rating strictly above this.
    pub min_qa: f64,
    /// Countries need at least this much total launch spend.
    pub spend_threshold: f64,
    /// Country assigned to launches whose company has no known country.
    pub default_country: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_orbit: "LEO".to_string(),
            min_qa: 2.0,
            spend_threshold: 10_000_000.0,
            default_country: "usa".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LaunchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LaunchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The default country in the same normalized form as joined countries.
    pub fn normalized_default_country(&self) -> String {
        self.default_country.trim().to_lowercase()
    }
}
