use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One named slice value supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn from_decimal(name: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            name: name.into(),
            value: decimal_to_f64(value, "value")?,
        })
    }

    fn validate(&self, index: usize) -> ChartResult<()> {
        if self.name.is_empty() {
            return Err(ChartError::InvalidDataset {
                index,
                reason: "name must not be empty".to_owned(),
            });
        }
        if !self.value.is_finite() {
            return Err(ChartError::InvalidDataset {
                index,
                reason: format!("value `{}` must be finite", self.value),
            });
        }
        if self.value < 0.0 {
            return Err(ChartError::InvalidDataset {
                index,
                reason: format!("value `{}` must be >= 0", self.value),
            });
        }
        Ok(())
    }
}

/// Ordered, validated sequence of data points.
///
/// Order is significant: the first point starts at angle 0 and each following
/// point continues clockwise from where the previous one ended.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(mut points: Vec<DataPoint>) -> ChartResult<Self> {
        for (index, point) in points.iter_mut().enumerate() {
            point.validate(index)?;
            // `-0.0` passes validation; store it as `0.0`.
            if point.value == 0.0 {
                point.value = 0.0;
            }
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.iter().map(|point| point.value).sum()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

impl TryFrom<Vec<DataPoint>> for Dataset {
    type Error = ChartError;

    fn try_from(points: Vec<DataPoint>) -> ChartResult<Self> {
        Self::new(points)
    }
}

// Deserialization goes through `Dataset::new` so invalid payloads never
// produce a dataset.
impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawDataset {
            points: Vec<DataPoint>,
        }

        let raw = RawDataset::deserialize(deserializer)?;
        Self::new(raw.points).map_err(serde::de::Error::custom)
    }
}
