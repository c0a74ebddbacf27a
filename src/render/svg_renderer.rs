use std::fmt::Write;

use crate::core::geometry::fmt_coord;
use crate::error::ChartResult;
use crate::render::{DropShadowFilter, RenderFrame, Renderer, SectorPrimitive, TextHAlign};

/// Renders frames into standalone SVG documents.
///
/// Each sector becomes a `<g>` carrying the `sector`/`highlighted`/`detached`
/// classes so host stylesheets can restyle states without touching geometry.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    xml_declaration: bool,
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes documents with `<?xml ...?>` for standalone `.svg` files.
    #[must_use]
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the most recent successful render.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.last_document.take()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_document = Some(frame_to_svg(frame, self.xml_declaration));
        Ok(())
    }
}

/// Serializes a validated frame; infallible because writes go to a `String`.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame, xml_declaration: bool) -> String {
    let mut out = String::new();
    if xml_declaration {
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.viewport.width,
        h = frame.viewport.height,
    );

    write_shadow_filter(&mut out, &frame.shadow);
    for sector in &frame.sectors {
        write_sector(&mut out, sector, &frame.shadow.id);
    }

    out.push_str("</svg>\n");
    out
}

fn write_shadow_filter(out: &mut String, shadow: &DropShadowFilter) {
    let _ = writeln!(out, "  <defs>");
    let _ = writeln!(out, r#"    <filter id="{}">"#, xml_escape(&shadow.id));
    let _ = writeln!(
        out,
        r#"      <feGaussianBlur in="SourceAlpha" stdDeviation="{}"/>"#,
        fmt_coord(shadow.std_deviation)
    );
    let _ = writeln!(
        out,
        r#"      <feOffset dx="{}" dy="{}" result="offsetblur"/>"#,
        fmt_coord(shadow.dx),
        fmt_coord(shadow.dy)
    );
    let _ = writeln!(
        out,
        r#"      <feFlood flood-color="{}"/>"#,
        shadow.flood_color.to_css()
    );
    let _ = writeln!(out, r#"      <feComposite in2="offsetblur" operator="in"/>"#);
    let _ = writeln!(out, "      <feMerge>");
    let _ = writeln!(out, "        <feMergeNode/>");
    let _ = writeln!(out, r#"        <feMergeNode in="SourceGraphic"/>"#);
    let _ = writeln!(out, "      </feMerge>");
    let _ = writeln!(out, "    </filter>");
    let _ = writeln!(out, "  </defs>");
}

fn write_sector(out: &mut String, sector: &SectorPrimitive, shadow_id: &str) {
    let filter = if sector.has_drop_shadow() {
        format!(r#" filter="url(#{})""#, xml_escape(shadow_id))
    } else {
        String::new()
    };
    let gradient_id = xml_escape(&sector.gradient.id);

    let _ = writeln!(
        out,
        r#"  <g class="{}" data-index="{}">"#,
        sector.class_names("sector"),
        sector.index
    );
    let _ = writeln!(out, "    <defs>");
    let _ = writeln!(out, r#"      <linearGradient id="{gradient_id}">"#);
    let _ = writeln!(
        out,
        r#"        <stop offset="0%" stop-color="{}"/>"#,
        sector.gradient.start.to_css()
    );
    let _ = writeln!(
        out,
        r#"        <stop offset="100%" stop-color="{}"/>"#,
        sector.gradient.end.to_css()
    );
    let _ = writeln!(out, "      </linearGradient>");
    let _ = writeln!(out, "    </defs>");

    let transform = if sector.is_detached() {
        format!(
            r#" transform="translate({},{})""#,
            fmt_coord(sector.translate.x),
            fmt_coord(sector.translate.y)
        )
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        r#"    <path d="{}" fill="url(#{gradient_id})"{transform} class="{}"{filter}/>"#,
        sector.path.to_svg_path_data(),
        sector.class_names("sector-path"),
    );

    let label = &sector.label;
    let anchor = match label.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="middle" font-size="{}" fill="{}" class="{}"{filter}>{}</text>"#,
        fmt_coord(label.x),
        fmt_coord(label.y),
        fmt_coord(label.font_size_px),
        label.color.to_css(),
        sector.class_names("sector-text"),
        xml_escape(&label.text),
    );
    let _ = writeln!(out, "  </g>");
}

/// Escapes the five XML special characters for text and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
