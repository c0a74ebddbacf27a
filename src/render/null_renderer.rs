use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_sector_count: usize,
    pub last_detached_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_sector_count = frame.sectors.len();
        self.last_detached_count = frame
            .sectors
            .iter()
            .filter(|sector| sector.is_detached())
            .count();
        self.render_count += 1;
        Ok(())
    }
}
