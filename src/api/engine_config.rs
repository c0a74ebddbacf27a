use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::DetachPolicy;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    /// Pie radius is `min(width, height) / radius_divisor`.
    #[serde(default = "default_radius_divisor")]
    pub radius_divisor: f64,
    /// Label distance from the center as a fraction of the radius.
    #[serde(default = "default_label_radius_ratio")]
    pub label_radius_ratio: f64,
    #[serde(default = "default_detach_offset_px")]
    pub detach_offset_px: f64,
    #[serde(default)]
    pub detach_policy: DetachPolicy,
}

impl PieChartConfig {
    /// Creates a config with the stock layout for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            radius_divisor: default_radius_divisor(),
            label_radius_ratio: default_label_radius_ratio(),
            detach_offset_px: default_detach_offset_px(),
            detach_policy: DetachPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_radius_divisor(mut self, radius_divisor: f64) -> Self {
        self.radius_divisor = radius_divisor;
        self
    }

    #[must_use]
    pub fn with_label_radius_ratio(mut self, ratio: f64) -> Self {
        self.label_radius_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_detach_offset_px(mut self, offset_px: f64) -> Self {
        self.detach_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_detach_policy(mut self, policy: DetachPolicy) -> Self {
        self.detach_policy = policy;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

fn default_radius_divisor() -> f64 {
    2.5
}

fn default_label_radius_ratio() -> f64 {
    0.6
}

fn default_detach_offset_px() -> f64 {
    12.0
}
