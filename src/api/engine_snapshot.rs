use serde::{Deserialize, Serialize};

use crate::core::{PieLayout, Viewport, format_label};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, SectorState};
use crate::render::Renderer;

use super::PieChartEngine;

/// Per-sector geometry and state captured by [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSnapshot {
    pub index: usize,
    pub name: String,
    pub value: f64,
    pub label: String,
    pub percentage: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub mid_angle: f64,
    pub large_arc: bool,
    pub state: SectorState,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub layout: PieLayout,
    pub total: f64,
    pub sectors: Vec<SectorSnapshot>,
    pub interaction: InteractionState,
}

impl<R: Renderer> PieChartEngine<R> {
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let total = self.dataset.total();
        let sectors = self
            .sectors
            .iter()
            .zip(self.dataset.points())
            .map(|(sector, point)| {
                Ok(SectorSnapshot {
                    index: sector.index,
                    name: point.name.clone(),
                    value: point.value,
                    label: format_label(point, total)?,
                    percentage: sector.percentage,
                    start_angle: sector.start_angle,
                    sweep_angle: sector.sweep_angle,
                    mid_angle: sector.mid_angle,
                    large_arc: sector.large_arc(),
                    state: self.interaction.sector_state(sector.index),
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(EngineSnapshot {
            viewport: self.config.viewport,
            layout: self.layout,
            total,
            sectors,
            interaction: self.interaction.clone(),
        })
    }
}
