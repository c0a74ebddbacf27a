//! pie-chart-rs: interactive pie chart engine.
//!
//! Pure sector geometry lives in `core`, click/hover state in `interaction`,
//! backend-agnostic draw frames and backends in `render`, and the engine facade
//! that ties them together in `api`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PieChartConfig, PieChartEngine};
pub use error::{ChartError, ChartResult};
