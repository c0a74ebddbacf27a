use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, SectorDescriptor, point_on_circle};
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Resolved pixel placement of the pie inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    pub label_radius: f64,
    pub detach_offset: f64,
}

impl PieLayout {
    /// Centers the pie and sizes it as `min(width, height) / radius_divisor`.
    pub fn from_viewport(
        viewport: Viewport,
        radius_divisor: f64,
        label_radius_ratio: f64,
        detach_offset: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !radius_divisor.is_finite() || radius_divisor <= 0.0 {
            return Err(ChartError::InvalidData(
                "radius divisor must be finite and > 0".to_owned(),
            ));
        }
        if !label_radius_ratio.is_finite() || label_radius_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "label radius ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !detach_offset.is_finite() || detach_offset < 0.0 {
            return Err(ChartError::InvalidData(
                "detach offset must be finite and >= 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let radius = width.min(height) / radius_divisor;

        Ok(Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius,
            label_radius: radius * label_radius_ratio,
            detach_offset,
        })
    }

    #[must_use]
    pub fn sector_radius(self, detached: bool) -> f64 {
        if detached {
            self.radius + self.detach_offset
        } else {
            self.radius
        }
    }

    /// Outward translation applied to a detached sector along its mid angle.
    #[must_use]
    pub fn detach_translation(self, sector: SectorDescriptor) -> Point {
        point_on_circle(Point::new(0.0, 0.0), self.detach_offset, sector.mid_angle)
    }

    /// Label anchor on the mid angle at the label radius.
    #[must_use]
    pub fn label_anchor(self, sector: SectorDescriptor) -> Point {
        point_on_circle(self.center, self.label_radius, sector.mid_angle)
    }
}
