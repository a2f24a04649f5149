use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Browser configuration
// ---------------------------------------------------------------------------

/// Tunable limits of the browser.  Every field has a default, so a config
/// file only needs to list what it overrides:
///
/// ```json
/// { "compare_capacity": 3, "similar_tolerance": 2.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Maximum number of vehicles in the comparison selection.
    pub compare_capacity: usize,
    /// Maximum reliability gap for a vehicle to count as "similar".
    pub similar_tolerance: f64,
    /// Number of similar vehicles listed on the detail view.
    pub similar_limit: usize,
    /// Number of brands in the ranking chart.
    pub top_brands: usize,
    /// Initial window size in logical points.
    pub window_size: [f32; 2],
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            compare_capacity: 4,
            similar_tolerance: 5.0,
            similar_limit: 4,
            top_brands: 10,
            window_size: [1280.0, 820.0],
        }
    }
}

impl BrowserConfig {
    /// Read a JSON config file, falling back to defaults for absent keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: BrowserConfig =
            serde_json::from_str(&text).context("parsing config JSON")?;
        Ok(config)
    }
}
