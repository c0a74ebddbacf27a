//! Proportional sector geometry.
//!
//! Every function here is pure: the same dataset always produces the same
//! descriptors, so callers recompute wholesale whenever the dataset changes.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::degrees_to_radians;
use crate::core::types::{DataPoint, Dataset};
use crate::error::{ChartError, ChartResult};

pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Sweeps at or above this are drawn as a full disc.
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Angular placement of one data point. Angles are in degrees, clockwise in
/// screen coordinates, starting at the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorDescriptor {
    pub index: usize,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub mid_angle: f64,
    pub percentage: f64,
}

impl SectorDescriptor {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    #[must_use]
    pub fn large_arc(self) -> bool {
        self.sweep_angle > 180.0
    }
}

/// Computes one descriptor per data point in input order.
///
/// An empty dataset yields no sectors. A non-empty dataset whose values sum to
/// zero is rejected with [`ChartError::ZeroTotal`] instead of producing NaN
/// angles.
pub fn compute_sectors(dataset: &Dataset) -> ChartResult<Vec<SectorDescriptor>> {
    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let total = dataset.total();
    if total <= 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    if !total.is_finite() {
        return Err(ChartError::InvalidData(
            "dataset total overflows f64".to_owned(),
        ));
    }

    let mut start_angle = 0.0;
    let sectors = dataset
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let percentage = point.value / total * 100.0;
            let sweep_angle = percentage * FULL_CIRCLE_DEGREES / 100.0;
            let sector = SectorDescriptor {
                index,
                start_angle,
                sweep_angle,
                mid_angle: start_angle + sweep_angle / 2.0,
                percentage,
            };
            start_angle += sweep_angle;
            sector
        })
        .collect();

    Ok(sectors)
}

/// Maps polar coordinates around `center` to screen space.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = degrees_to_radians(angle_degrees);
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

pub fn percentage_of(value: f64, total: f64) -> ChartResult<f64> {
    if !total.is_finite() || total <= 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    Ok(value / total * 100.0)
}

/// Builds the display label `"<name> (<percentage>%)"`.
///
/// The percentage is rounded half away from zero to one decimal place.
pub fn format_label(point: &DataPoint, total: f64) -> ChartResult<String> {
    let percentage = percentage_of(point.value, total)?;
    let rounded = (percentage * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    Ok(format!("{} ({rounded:.1}%)", point.name))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc drawn clockwise when `clockwise` is set.
    ArcTo {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        end: Point,
    },
    Close,
}

/// Closed wedge outline: center, edge to the arc start, arc, edge back.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub large_arc: bool,
    pub commands: SmallVec<[PathCommand; 5]>,
}

impl ArcPath {
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.sweep_angle >= FULL_CIRCLE_DEGREES - FULL_CIRCLE_EPSILON
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
            PathCommand::ArcTo { radius, end, .. } => radius.is_finite() && end.is_finite(),
            PathCommand::Close => true,
        })
    }

    /// Serializes the commands as an SVG `d` attribute value.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(out, "M {},{}", fmt_coord(p.x), fmt_coord(p.y)),
                PathCommand::LineTo(p) => write!(out, "L {},{}", fmt_coord(p.x), fmt_coord(p.y)),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    clockwise,
                    end,
                } => write!(
                    out,
                    "A {r},{r} 0 {} {} {},{}",
                    u8::from(large_arc),
                    u8::from(clockwise),
                    fmt_coord(end.x),
                    fmt_coord(end.y),
                    r = fmt_coord(radius),
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Converts an angular sector into a closed wedge outline.
///
/// A sweep covering the whole circle is split into two half arcs: a single arc
/// whose start and end coincide is not drawn by SVG or Cairo.
#[must_use]
pub fn sector_to_arc_path(
    center: Point,
    radius: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> ArcPath {
    let large_arc = sweep_angle > 180.0;
    let start = point_on_circle(center, radius, start_angle);
    let end = point_on_circle(center, radius, start_angle + sweep_angle);

    let mut commands = SmallVec::new();
    commands.push(PathCommand::MoveTo(center));
    commands.push(PathCommand::LineTo(start));

    if sweep_angle >= FULL_CIRCLE_DEGREES - FULL_CIRCLE_EPSILON {
        let opposite = point_on_circle(center, radius, start_angle + 180.0);
        for target in [opposite, start] {
            commands.push(PathCommand::ArcTo {
                radius,
                large_arc: false,
                clockwise: true,
                end: target,
            });
        }
    } else {
        commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            clockwise: true,
            end,
        });
    }
    commands.push(PathCommand::Close);

    ArcPath {
        center,
        radius,
        start_angle,
        sweep_angle,
        large_arc,
        commands,
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid emitting "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
