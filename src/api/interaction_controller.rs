use tracing::{debug, trace};

use crate::core::sector_at;
use crate::error::ChartResult;
use crate::interaction::{DetachPolicy, InteractionCommand};
use crate::render::Renderer;

use super::PieChartEngine;
use super::validation::validate_sector_index;

impl<R: Renderer> PieChartEngine<R> {
    /// Single update point for interaction state.
    ///
    /// Returns whether the visible state changed, so hosts know when to redraw.
    pub fn dispatch(&mut self, command: InteractionCommand) -> ChartResult<bool> {
        if let Some(index) = command.target_index() {
            validate_sector_index(index, self.sectors.len())?;
        }
        let changed = self.interaction.apply(command);
        debug!(?command, changed, "dispatch interaction command");
        Ok(changed)
    }

    /// Click on a known sector: toggles it between attached and detached.
    pub fn click_sector(&mut self, index: usize) -> ChartResult<bool> {
        self.dispatch(InteractionCommand::ToggleDetached(index))
    }

    /// Click at a pixel position. Returns the clicked sector, if any.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        let hit = self.sector_at(x, y);
        trace!(x, y, ?hit, "pointer click");
        if let Some(index) = hit {
            self.click_sector(index)?;
        }
        Ok(hit)
    }

    /// Hover: highlights the sector under the pointer. Returns whether the
    /// highlight changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        match self.sector_at(x, y) {
            Some(index) => self.dispatch(InteractionCommand::Highlight(index)),
            None => self.dispatch(InteractionCommand::ClearHighlight),
        }
    }

    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        self.dispatch(InteractionCommand::ClearHighlight)
    }

    #[must_use]
    pub fn sector_at(&self, x: f64, y: f64) -> Option<usize> {
        sector_at(
            self.layout,
            &self.sectors,
            |index| self.interaction.is_detached(index),
            x,
            y,
        )
    }

    pub fn set_detach_policy(&mut self, policy: DetachPolicy) {
        self.config.detach_policy = policy;
        self.interaction.set_policy(policy);
    }
}
