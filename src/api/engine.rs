use tracing::{debug, trace};

use crate::core::{Dataset, PieLayout, SectorDescriptor, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, SectorState};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{PieFrameInput, build_render_frame};
use super::validation::{resolve_layout, validate_render_style};
use super::{PieChartConfig, PieRenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PieChartEngine` owns the dataset, its derived sectors, the interaction
/// state and the renderer. Sectors are recomputed once per dataset change and
/// interaction state only changes through [`PieChartEngine::dispatch`].
pub struct PieChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PieChartConfig,
    pub(super) layout: PieLayout,
    pub(super) dataset: Dataset,
    pub(super) sectors: Vec<SectorDescriptor>,
    pub(super) interaction: InteractionState,
    pub(super) style: PieRenderStyle,
}

impl<R: Renderer> PieChartEngine<R> {
    /// Creates an engine with an empty dataset.
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        let layout = resolve_layout(config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            radius = layout.radius,
            "create pie chart engine"
        );

        Ok(Self {
            renderer,
            config,
            layout,
            dataset: Dataset::default(),
            sectors: Vec::new(),
            interaction: InteractionState::with_policy(config.detach_policy),
            style: PieRenderStyle::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PieChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn layout(&self) -> PieLayout {
        self.layout
    }

    /// Resizes the drawing area; sector angles are unaffected.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let config = PieChartConfig {
            viewport,
            ..self.config
        };
        self.layout = resolve_layout(config)?;
        self.config = config;
        trace!(
            width = viewport.width,
            height = viewport.height,
            "set viewport"
        );
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn sectors(&self) -> &[SectorDescriptor] {
        &self.sectors
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.dataset.total()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn sector_state(&self, index: usize) -> SectorState {
        self.interaction.sector_state(index)
    }

    #[must_use]
    pub fn render_style(&self) -> PieRenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: PieRenderStyle) -> ChartResult<()> {
        self.style = validate_render_style(style)?;
        Ok(())
    }

    /// Materializes the frame the next `render` call would hand to the backend.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(PieFrameInput {
            viewport: self.config.viewport,
            layout: self.layout,
            dataset: &self.dataset,
            sectors: &self.sectors,
            interaction: &self.interaction,
            style: self.style,
        })
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(sectors = frame.sectors.len(), "render pie frame");
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
