//! Desktop window showing an interactive pie: click a sector to detach it,
//! hover to highlight.
//!
//! Run with `cargo run --example gtk_pie_lab --features "desktop telemetry"`.

use gtk4 as gtk;
use gtk4::prelude::*;
use pie_chart_rs::core::{DataPoint, Viewport};
use pie_chart_rs::platform_gtk::GtkPieAdapter;
use pie_chart_rs::render::CairoRenderer;
use pie_chart_rs::telemetry::init_default_tracing;
use pie_chart_rs::{PieChartConfig, PieChartEngine};

const WIDTH: i32 = 700;
const HEIGHT: i32 = 700;

fn main() -> gtk::glib::ExitCode {
    let _ = init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.pie_chart.lab")
        .build();
    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &gtk::Application) {
    let engine = CairoRenderer::new(WIDTH, HEIGHT).and_then(|renderer| {
        let config = PieChartConfig::new(Viewport::new(WIDTH as u32, HEIGHT as u32));
        PieChartEngine::new(renderer, config)
    });
    let engine = match engine {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to create pie chart engine: {err}");
            return;
        }
    };

    let adapter = GtkPieAdapter::new(engine);
    if let Err(err) = adapter.set_data(vec![
        DataPoint::new("PAKISTAN", 3.0),
        DataPoint::new("USA", 4.2),
        DataPoint::new("CHINA", 8.5),
        DataPoint::new("BRAZIL", 2.5),
    ]) {
        eprintln!("failed to load sample data: {err}");
        return;
    }

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("pie-chart-rs lab")
        .default_width(WIDTH)
        .default_height(HEIGHT)
        .child(adapter.widget())
        .build();
    window.present();
}
