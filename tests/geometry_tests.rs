use approx::assert_relative_eq;
use pie_chart_rs::ChartError;
use pie_chart_rs::core::{
    DataPoint, Dataset, PathCommand, Point, compute_sectors, format_label, percentage_of,
    point_on_circle, sector_to_arc_path,
};
use rust_decimal::Decimal;

fn country_dataset() -> Dataset {
    Dataset::new(vec![
        DataPoint::new("PAKISTAN", 3.0),
        DataPoint::new("USA", 4.2),
        DataPoint::new("CHINA", 8.5),
        DataPoint::new("BRAZIL", 2.5),
    ])
    .expect("valid dataset")
}

#[test]
fn sectors_follow_input_order_and_cover_full_circle() {
    let dataset = country_dataset();
    let sectors = compute_sectors(&dataset).expect("sectors");

    assert_eq!(sectors.len(), 4);
    assert_eq!(
        sectors.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert_eq!(sectors[0].start_angle, 0.0);
    assert_relative_eq!(sectors[0].sweep_angle, 3.0 / 18.2 * 360.0, epsilon = 1e-9);
    assert_relative_eq!(sectors[2].sweep_angle, 8.5 / 18.2 * 360.0, epsilon = 1e-9);

    for pair in sectors.windows(2) {
        assert_eq!(pair[1].start_angle, pair[0].start_angle + pair[0].sweep_angle);
    }
    for sector in &sectors {
        assert_relative_eq!(
            sector.mid_angle,
            sector.start_angle + sector.sweep_angle / 2.0,
            epsilon = 1e-12
        );
    }

    let total_sweep: f64 = sectors.iter().map(|s| s.sweep_angle).sum();
    assert_relative_eq!(total_sweep, 360.0, epsilon = 1e-6);
    assert_relative_eq!(sectors[3].end_angle(), 360.0, epsilon = 1e-6);
}

#[test]
fn labels_use_one_decimal_percentages() {
    let dataset = country_dataset();
    let total = dataset.total();
    let labels: Vec<String> = dataset
        .points()
        .iter()
        .map(|point| format_label(point, total).expect("label"))
        .collect();

    assert_eq!(
        labels,
        vec![
            "PAKISTAN (16.5%)",
            "USA (23.1%)",
            "CHINA (46.7%)",
            "BRAZIL (13.7%)",
        ]
    );
}

#[test]
fn label_keeps_trailing_zero_decimal() {
    let point = DataPoint::new("HALF", 1.0);
    assert_eq!(format_label(&point, 2.0).expect("label"), "HALF (50.0%)");
    assert_eq!(
        format_label(&DataPoint::new("NONE", 0.0), 2.0).expect("label"),
        "NONE (0.0%)"
    );
}

#[test]
fn label_rejects_zero_total() {
    let err = format_label(&DataPoint::new("A", 0.0), 0.0).expect_err("zero total");
    assert!(matches!(err, ChartError::ZeroTotal));
    assert!(matches!(percentage_of(1.0, f64::NAN), Err(ChartError::ZeroTotal)));
}

#[test]
fn single_point_spans_whole_circle_with_large_arc() {
    let dataset = Dataset::new(vec![DataPoint::new("ONLY", 7.0)]).expect("dataset");
    let sectors = compute_sectors(&dataset).expect("sectors");

    assert_eq!(sectors.len(), 1);
    assert_eq!(sectors[0].start_angle, 0.0);
    assert_eq!(sectors[0].sweep_angle, 360.0);
    assert!(sectors[0].large_arc());

    let path = sector_to_arc_path(Point::new(50.0, 50.0), 40.0, 0.0, sectors[0].sweep_angle);
    assert!(path.large_arc);
    assert_eq!(
        path.to_svg_path_data(),
        "M 50,50 L 90,50 A 40,40 0 0 1 10,50 A 40,40 0 0 1 90,50 Z"
    );
}

#[test]
fn empty_dataset_yields_no_sectors() {
    let sectors = compute_sectors(&Dataset::default()).expect("empty is valid");
    assert!(sectors.is_empty());
}

#[test]
fn zero_total_is_rejected_explicitly() {
    let dataset = Dataset::new(vec![DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)])
        .expect("zero values are individually valid");
    let err = compute_sectors(&dataset).expect_err("zero total must fail");
    assert!(matches!(err, ChartError::ZeroTotal));
}

#[test]
fn zero_value_point_gets_empty_sweep() {
    let dataset = Dataset::new(vec![
        DataPoint::new("A", 1.0),
        DataPoint::new("B", 0.0),
        DataPoint::new("C", 1.0),
    ])
    .expect("dataset");
    let sectors = compute_sectors(&dataset).expect("sectors");
    assert_eq!(sectors[1].sweep_angle, 0.0);
    assert_eq!(sectors[1].start_angle, 180.0);
    assert_eq!(sectors[2].start_angle, 180.0);
}

#[test]
fn invalid_points_are_rejected_with_index() {
    let err = Dataset::new(vec![DataPoint::new("A", 1.0), DataPoint::new("B", -2.0)])
        .expect_err("negative must fail");
    assert!(matches!(err, ChartError::InvalidDataset { index: 1, .. }));

    let err = Dataset::new(vec![DataPoint::new("A", f64::INFINITY)])
        .expect_err("non-finite must fail");
    assert!(matches!(err, ChartError::InvalidDataset { index: 0, .. }));

    let err = Dataset::new(vec![DataPoint::new("", 1.0)]).expect_err("empty name must fail");
    assert!(matches!(err, ChartError::InvalidDataset { index: 0, .. }));
}

#[test]
fn decimal_points_convert_to_f64() {
    let point = DataPoint::from_decimal("USA", Decimal::new(42, 1)).expect("decimal");
    assert_relative_eq!(point.value, 4.2, epsilon = 1e-12);
}

#[test]
fn point_on_circle_uses_screen_clockwise_angles() {
    let center = Point::new(100.0, 100.0);
    let right = point_on_circle(center, 10.0, 0.0);
    let down = point_on_circle(center, 10.0, 90.0);

    assert_relative_eq!(right.x, 110.0, epsilon = 1e-9);
    assert_relative_eq!(right.y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(down.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(down.y, 110.0, epsilon = 1e-9);
}

#[test]
fn arc_path_is_closed_wedge_from_center() {
    let center = Point::new(50.0, 50.0);
    let path = sector_to_arc_path(center, 40.0, 0.0, 90.0);

    assert!(!path.large_arc);
    assert_eq!(path.commands[0], PathCommand::MoveTo(center));
    assert!(matches!(path.commands[1], PathCommand::LineTo(_)));
    assert!(matches!(
        path.commands[2],
        PathCommand::ArcTo {
            large_arc: false,
            clockwise: true,
            ..
        }
    ));
    assert_eq!(path.commands[3], PathCommand::Close);
    assert_eq!(
        path.to_svg_path_data(),
        "M 50,50 L 90,50 A 40,40 0 0 1 50,90 Z"
    );
}

#[test]
fn sweeps_above_half_circle_use_large_arc_flag() {
    let path = sector_to_arc_path(Point::new(0.0, 0.0), 10.0, 30.0, 180.5);
    assert!(path.large_arc);
    assert!(path.to_svg_path_data().contains(" 0 1 1 "));
}

#[test]
fn negative_zero_value_is_stored_as_positive_zero() {
    let dataset = Dataset::new(vec![DataPoint::new("A", -0.0), DataPoint::new("B", 1.0)])
        .expect("negative zero is a valid value");
    assert!(dataset.points()[0].value.is_sign_positive());

    let sectors = compute_sectors(&dataset).expect("sectors");
    assert!(sectors[0].sweep_angle.is_sign_positive());
    assert!(sectors[0].percentage.is_sign_positive());
    assert_eq!(
        format_label(&dataset.points()[0], dataset.total()).expect("label"),
        "A (0.0%)"
    );
}

#[test]
fn negative_zero_from_json_is_stored_as_positive_zero() {
    let dataset: Dataset = serde_json::from_str(
        r#"{"points":[{"name":"A","value":-0.0},{"name":"B","value":1.0}]}"#,
    )
    .expect("dataset json");
    assert!(dataset.points()[0].value.is_sign_positive());
    assert_eq!(
        format_label(&dataset.points()[0], dataset.total()).expect("label"),
        "A (0.0%)"
    );
}

#[test]
fn label_never_shows_negative_zero() {
    let point = DataPoint::new("A", -0.0);
    assert_eq!(format_label(&point, 10.0).expect("label"), "A (0.0%)");
}
