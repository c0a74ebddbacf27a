use crate::render::{Color, DropShadowFilter};

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieRenderStyle {
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// HSL saturation shared by every sector gradient stop.
    pub gradient_saturation: f64,
    /// HSL lightness shared by every sector gradient stop.
    pub gradient_lightness: f64,
    pub shadow_blur_std_deviation: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    pub shadow_color: Color,
}

impl Default for PieRenderStyle {
    fn default() -> Self {
        Self {
            label_color: Color::rgb(0.0, 0.0, 0.0),
            label_font_size_px: 14.0,
            gradient_saturation: 0.7,
            gradient_lightness: 0.6,
            shadow_blur_std_deviation: 1.0,
            shadow_offset_x: 0.0,
            shadow_offset_y: 2.0,
            shadow_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
        }
    }
}

impl PieRenderStyle {
    #[must_use]
    pub fn drop_shadow(self) -> DropShadowFilter {
        DropShadowFilter {
            std_deviation: self.shadow_blur_std_deviation,
            dx: self.shadow_offset_x,
            dy: self.shadow_offset_y,
            flood_color: self.shadow_color,
            ..DropShadowFilter::default()
        }
    }

    /// Gradient stops for sector `index` of `count`: the hue walks one step
    /// around the color wheel per sector.
    #[must_use]
    pub fn gradient_colors(self, index: usize, count: usize) -> (Color, Color) {
        let step = 360.0 / count.max(1) as f64;
        let hue = |position: usize| position as f64 * step;
        (
            Color::from_hsl(
                hue(index),
                self.gradient_saturation,
                self.gradient_lightness,
            ),
            Color::from_hsl(
                hue(index + 1),
                self.gradient_saturation,
                self.gradient_lightness,
            ),
        )
    }
}
