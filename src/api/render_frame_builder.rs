use crate::core::{
    Dataset, PieLayout, Point, SectorDescriptor, Viewport, format_label, sector_to_arc_path,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::{LinearGradient, RenderFrame, SectorPrimitive, TextHAlign, TextPrimitive};

use super::PieRenderStyle;

/// Everything one draw pass reads. Nothing in here is mutated by the pass.
#[derive(Debug, Clone, Copy)]
pub struct PieFrameInput<'a> {
    pub viewport: Viewport,
    pub layout: PieLayout,
    pub dataset: &'a Dataset,
    pub sectors: &'a [SectorDescriptor],
    pub interaction: &'a InteractionState,
    pub style: PieRenderStyle,
}

/// Materializes the draw frame for the current dataset and interaction state.
///
/// Detached sectors are drawn at `radius + detach_offset` and shifted outward
/// by `detach_offset` along their mid angle; labels keep their resting place.
pub fn build_render_frame(input: PieFrameInput<'_>) -> ChartResult<RenderFrame> {
    if input.sectors.len() != input.dataset.len() {
        return Err(ChartError::InvalidData(format!(
            "sector count {} does not match dataset length {}",
            input.sectors.len(),
            input.dataset.len()
        )));
    }

    let total = input.dataset.total();
    let count = input.sectors.len();
    let mut frame = RenderFrame::new(input.viewport).with_shadow(input.style.drop_shadow());

    for (sector, point) in input.sectors.iter().zip(input.dataset.points()) {
        let state = input.interaction.sector_state(sector.index);
        let detached = input.interaction.is_detached(sector.index);
        let radius = input.layout.sector_radius(detached);
        let translate = if detached {
            input.layout.detach_translation(*sector)
        } else {
            Point::new(0.0, 0.0)
        };

        let (start, end) = input.style.gradient_colors(sector.index, count);
        let anchor = input.layout.label_anchor(*sector);

        frame = frame.with_sector(SectorPrimitive {
            index: sector.index,
            path: sector_to_arc_path(
                input.layout.center,
                radius,
                sector.start_angle,
                sector.sweep_angle,
            ),
            translate,
            gradient: LinearGradient {
                id: format!("gradient-{}", sector.index),
                start,
                end,
            },
            label: TextPrimitive::new(
                format_label(point, total)?,
                anchor.x,
                anchor.y,
                input.style.label_font_size_px,
                input.style.label_color,
                TextHAlign::Center,
            ),
            state,
            highlighted: input.interaction.is_highlighted(sector.index),
        });
    }

    Ok(frame)
}
