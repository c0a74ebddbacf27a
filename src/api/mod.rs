mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod render_frame_builder;
mod render_style;
mod validation;

pub use engine::PieChartEngine;
pub use engine_config::PieChartConfig;
pub use engine_snapshot::{EngineSnapshot, SectorSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use render_frame_builder::{PieFrameInput, build_render_frame};
pub use render_style::PieRenderStyle;
