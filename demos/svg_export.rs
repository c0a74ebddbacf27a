//! Prints the four-country sample chart as an SVG document, with the CHINA
//! sector detached.
//!
//! Run with `cargo run --example svg_export > pie.svg`.

use pie_chart_rs::core::{DataPoint, Viewport};
use pie_chart_rs::render::SvgRenderer;
use pie_chart_rs::telemetry::init_default_tracing;
use pie_chart_rs::{ChartResult, PieChartConfig, PieChartEngine};

fn main() -> ChartResult<()> {
    let _ = init_default_tracing();

    let renderer = SvgRenderer::new().with_xml_declaration(true);
    let config = PieChartConfig::new(Viewport::new(700, 700));
    let mut engine = PieChartEngine::new(renderer, config)?;

    engine.set_data(vec![
        DataPoint::new("PAKISTAN", 3.0),
        DataPoint::new("USA", 4.2),
        DataPoint::new("CHINA", 8.5),
        DataPoint::new("BRAZIL", 2.5),
    ])?;
    engine.click_sector(2)?;
    engine.render()?;

    let mut renderer = engine.into_renderer();
    if let Some(document) = renderer.take_document() {
        print!("{document}");
    }
    Ok(())
}
