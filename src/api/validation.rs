use crate::core::PieLayout;
use crate::error::{ChartError, ChartResult};

use super::{PieChartConfig, PieRenderStyle};

pub(super) fn validate_render_style(style: PieRenderStyle) -> ChartResult<PieRenderStyle> {
    style.label_color.validate()?;
    style.shadow_color.validate()?;

    if !style.label_font_size_px.is_finite() || style.label_font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "label font size must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("gradient saturation", style.gradient_saturation),
        ("gradient lightness", style.gradient_lightness),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and in [0, 1]"
            )));
        }
    }
    if !style.shadow_blur_std_deviation.is_finite() || style.shadow_blur_std_deviation < 0.0 {
        return Err(ChartError::InvalidData(
            "shadow blur must be finite and >= 0".to_owned(),
        ));
    }
    if !style.shadow_offset_x.is_finite() || !style.shadow_offset_y.is_finite() {
        return Err(ChartError::InvalidData(
            "shadow offset must be finite".to_owned(),
        ));
    }

    Ok(style)
}

/// Validates config values and resolves the pixel layout they describe.
pub(super) fn resolve_layout(config: PieChartConfig) -> ChartResult<PieLayout> {
    PieLayout::from_viewport(
        config.viewport,
        config.radius_divisor,
        config.label_radius_ratio,
        config.detach_offset_px,
    )
}

pub(super) fn validate_sector_index(index: usize, len: usize) -> ChartResult<usize> {
    if index >= len {
        return Err(ChartError::SectorOutOfRange { index, len });
    }
    Ok(index)
}
