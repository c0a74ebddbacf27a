use pie_chart_rs::api::{PieChartConfig, PieChartEngine};
use pie_chart_rs::core::{DataPoint, Viewport};
use pie_chart_rs::interaction::SectorState;
use pie_chart_rs::render::NullRenderer;

/// 700x700 viewport: center (350, 350), radius 280, four equal quadrants.
fn quadrant_engine() -> PieChartEngine<NullRenderer> {
    let config = PieChartConfig::new(Viewport::new(700, 700));
    let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![
            DataPoint::new("A", 1.0),
            DataPoint::new("B", 1.0),
            DataPoint::new("C", 1.0),
            DataPoint::new("D", 1.0),
        ])
        .expect("valid data");
    engine
}

#[test]
fn quadrants_resolve_clockwise_from_positive_x() {
    let engine = quadrant_engine();
    assert_eq!(engine.sector_at(450.0, 450.0), Some(0));
    assert_eq!(engine.sector_at(250.0, 450.0), Some(1));
    assert_eq!(engine.sector_at(250.0, 250.0), Some(2));
    assert_eq!(engine.sector_at(450.0, 250.0), Some(3));
}

#[test]
fn points_outside_radius_miss() {
    let engine = quadrant_engine();
    assert_eq!(engine.sector_at(350.0 + 290.0, 350.0), None);
    assert_eq!(engine.sector_at(0.0, 0.0), None);
    assert_eq!(engine.sector_at(f64::NAN, 350.0), None);
}

#[test]
fn detached_sector_extends_its_hit_area() {
    let mut engine = quadrant_engine();
    let reach = 300.0 / std::f64::consts::SQRT_2;
    let (x, y) = (350.0 + reach, 350.0 + reach);

    assert_eq!(engine.sector_at(x, y), None);
    engine.click_sector(0).expect("click");
    assert_eq!(engine.sector_at(x, y), Some(0));
}

#[test]
fn pointer_click_toggles_sector_under_pointer() {
    let mut engine = quadrant_engine();

    assert_eq!(engine.pointer_click(250.0, 250.0).expect("click"), Some(2));
    assert_eq!(engine.sector_state(2), SectorState::Detached);

    assert_eq!(engine.pointer_click(5.0, 5.0).expect("miss"), None);
    assert_eq!(engine.sector_state(2), SectorState::Detached);

    assert_eq!(engine.pointer_click(260.0, 260.0).expect("click"), Some(2));
    assert_eq!(engine.sector_state(2), SectorState::Attached);
}

#[test]
fn pointer_move_highlights_and_leave_clears() {
    let mut engine = quadrant_engine();

    assert!(engine.pointer_move(450.0, 250.0).expect("move"));
    assert_eq!(engine.interaction().highlighted(), Some(3));
    assert!(!engine.pointer_move(451.0, 251.0).expect("same sector"));

    assert!(engine.pointer_move(5.0, 5.0).expect("move out"));
    assert_eq!(engine.interaction().highlighted(), None);

    engine.pointer_move(450.0, 450.0).expect("move");
    assert!(engine.pointer_leave().expect("leave"));
    assert_eq!(engine.interaction().highlighted(), None);
}

#[test]
fn single_sector_is_hit_everywhere_inside_the_disc() {
    let config = PieChartConfig::new(Viewport::new(700, 700));
    let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![DataPoint::new("ONLY", 5.0)])
        .expect("valid data");

    for (x, y) in [(351.0, 350.0), (100.0, 350.0), (350.0, 100.0), (500.0, 200.0)] {
        assert_eq!(engine.sector_at(x, y), Some(0));
    }
}
