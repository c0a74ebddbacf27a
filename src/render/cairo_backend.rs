use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::primitives::degrees_to_radians;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DropShadowFilter, RenderFrame, Renderer, SectorPrimitive, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub sectors_drawn: usize,
    pub shadows_drawn: usize,
    /// Translucent wedge layers used to approximate shadow blur.
    pub shadow_layers_drawn: usize,
    pub texts_drawn: usize,
}

/// Upper bound on the stacked layers of one blurred shadow.
const MAX_SHADOW_LAYERS: usize = 8;

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen through `Renderer::render` or in place on a host context
/// through `CairoContextRenderer`.
///
/// Cairo has no Gaussian blur, so a drop shadow is drawn as a stack of
/// translucent wedges whose radii spread over twice the filter's standard
/// deviation. A zero deviation gives a single sharp layer.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for sector in &frame.sectors {
            if sector.has_drop_shadow() {
                stats.shadow_layers_drawn += draw_shadow(context, sector, &frame.shadow)?;
                stats.shadows_drawn += 1;
            }
            draw_wedge(context, sector, 0.0, 0.0, 0.0, WedgeFill::Gradient)?;
            stats.sectors_drawn += 1;
        }

        for sector in &frame.sectors {
            draw_label(context, sector);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Number of layers for a shadow blurred by `std_deviation` pixels.
fn shadow_layer_count(std_deviation: f64) -> usize {
    if std_deviation <= 0.0 {
        return 1;
    }
    ((std_deviation * 2.0).ceil() as usize + 1).min(MAX_SHADOW_LAYERS)
}

/// Draws the shadow from its widest, faintest layer inward so overlapping
/// layers darken toward the wedge edge. Returns the layer count.
fn draw_shadow(
    context: &Context,
    sector: &SectorPrimitive,
    shadow: &DropShadowFilter,
) -> ChartResult<usize> {
    let layers = shadow_layer_count(shadow.std_deviation);
    let spread = shadow.std_deviation * 2.0;
    let mut color = shadow.flood_color;
    color.alpha /= layers as f64;

    for layer in (0..layers).rev() {
        let grow = if layers == 1 {
            0.0
        } else {
            spread * layer as f64 / (layers - 1) as f64 - shadow.std_deviation
        };
        draw_wedge(
            context,
            sector,
            shadow.dx,
            shadow.dy,
            grow,
            WedgeFill::Solid(color),
        )?;
    }
    Ok(layers)
}

enum WedgeFill {
    Solid(Color),
    Gradient,
}

fn draw_wedge(
    context: &Context,
    sector: &SectorPrimitive,
    extra_dx: f64,
    extra_dy: f64,
    radius_delta: f64,
    fill: WedgeFill,
) -> ChartResult<()> {
    let path = &sector.path;
    let radius = (path.radius + radius_delta).max(0.0);
    let dx = sector.translate.x + extra_dx;
    let dy = sector.translate.y + extra_dy;
    let cx = path.center.x + dx;
    let cy = path.center.y + dy;
    let start = degrees_to_radians(path.start_angle);
    let end = if path.is_full_circle() {
        start + TAU
    } else {
        degrees_to_radians(path.start_angle + path.sweep_angle)
    };

    context.new_path();
    context.move_to(cx, cy);
    // Cairo's positive angle direction is clockwise on screen, same as SVG sweep=1.
    context.arc(cx, cy, radius, start, end);
    context.close_path();

    match fill {
        WedgeFill::Solid(color) => apply_color(context, color),
        WedgeFill::Gradient => {
            let gradient =
                LinearGradient::new(cx - radius, cy, cx + radius, cy);
            let (from, to) = (sector.gradient.start, sector.gradient.end);
            gradient.add_color_stop_rgba(0.0, from.red, from.green, from.blue, from.alpha);
            gradient.add_color_stop_rgba(1.0, to.red, to.green, to.blue, to.alpha);
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set sector gradient", err))?;
        }
    }

    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill sector", err))
}

fn draw_label(context: &Context, sector: &SectorPrimitive) {
    let text = &sector.label;
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y - f64::from(text_height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
