use crate::core::{ArcPath, Point};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SectorState;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Converts CSS-style HSL (hue in degrees, saturation/lightness in 0..=1).
    #[must_use]
    pub fn from_hsl(hue_degrees: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue_degrees.rem_euclid(360.0) / 360.0;
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        if saturation == 0.0 {
            return Self::rgb(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::rgb(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    /// CSS color text: `#rrggbb` when opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let [red, green, blue] = [self.red, self.green, self.blue].map(channel_to_u8);
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("rgba({red},{green},{blue},{})", self.alpha)
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn hue_to_channel(p: f64, q: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        p + (q - p) * 6.0 * hue
    } else if hue < 0.5 {
        q
    } else if hue < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - hue) * 6.0
    } else {
        p
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the vertical middle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Two-stop left-to-right gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub start: Color,
    pub end: Color,
}

impl LinearGradient {
    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient id must not be empty".to_owned(),
            ));
        }
        self.start.validate()?;
        self.end.validate()
    }
}

/// Shared blur-and-offset shadow referenced by highlighted/detached sectors.
#[derive(Debug, Clone, PartialEq)]
pub struct DropShadowFilter {
    pub id: String,
    pub std_deviation: f64,
    pub dx: f64,
    pub dy: f64,
    pub flood_color: Color,
}

impl Default for DropShadowFilter {
    fn default() -> Self {
        Self {
            id: "drop-shadow".to_owned(),
            std_deviation: 1.0,
            dx: 0.0,
            dy: 2.0,
            flood_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
        }
    }
}

impl DropShadowFilter {
    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "shadow filter id must not be empty".to_owned(),
            ));
        }
        if !self.std_deviation.is_finite() || self.std_deviation < 0.0 {
            return Err(ChartError::InvalidData(
                "shadow std deviation must be finite and >= 0".to_owned(),
            ));
        }
        if !self.dx.is_finite() || !self.dy.is_finite() {
            return Err(ChartError::InvalidData(
                "shadow offset must be finite".to_owned(),
            ));
        }
        self.flood_color.validate()
    }
}

/// Draw command for one wedge plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPrimitive {
    pub index: usize,
    pub path: ArcPath,
    /// Offset applied to the wedge only; labels stay in place.
    pub translate: Point,
    pub gradient: LinearGradient,
    pub label: TextPrimitive,
    pub state: SectorState,
    pub highlighted: bool,
}

impl SectorPrimitive {
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.state == SectorState::Detached
    }

    #[must_use]
    pub fn has_drop_shadow(&self) -> bool {
        self.highlighted || self.is_detached()
    }

    /// Space-separated styling classes, starting with `base`.
    #[must_use]
    pub fn class_names(&self, base: &str) -> String {
        let mut classes = base.to_owned();
        if self.highlighted {
            classes.push_str(" highlighted");
        }
        if self.is_detached() {
            classes.push_str(" detached");
        }
        classes
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "sector {} path coordinates must be finite",
                self.index
            )));
        }
        if !self.path.radius.is_finite() || self.path.radius <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "sector {} radius must be finite and > 0",
                self.index
            )));
        }
        if !self.translate.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "sector {} translation must be finite",
                self.index
            )));
        }
        self.gradient.validate()?;
        self.label.validate()
    }
}
