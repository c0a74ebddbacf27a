use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{DropShadowFilter, SectorPrimitive};

/// Backend-agnostic scene for one pie draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub shadow: DropShadowFilter,
    pub sectors: Vec<SectorPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shadow: DropShadowFilter::default(),
            sectors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: DropShadowFilter) -> Self {
        self.shadow = shadow;
        self
    }

    #[must_use]
    pub fn with_sector(mut self, sector: SectorPrimitive) -> Self {
        self.sectors.push(sector);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.shadow.validate()?;
        for sector in &self.sectors {
            sector.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    #[must_use]
    pub fn sector(&self, index: usize) -> Option<&SectorPrimitive> {
        self.sectors.iter().find(|sector| sector.index == index)
    }
}
