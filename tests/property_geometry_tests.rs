use pie_chart_rs::api::{PieChartConfig, PieChartEngine};
use pie_chart_rs::core::{DataPoint, Dataset, Viewport, compute_sectors};
use pie_chart_rs::interaction::DetachPolicy;
use pie_chart_rs::render::NullRenderer;
use proptest::prelude::*;

fn dataset_from(values: &[f64]) -> Dataset {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("p{i}"), *value))
        .collect();
    Dataset::new(points).expect("generated values are valid")
}

proptest! {
    #[test]
    fn sweeps_sum_to_full_circle(values in prop::collection::vec(0.001f64..1_000.0, 1..32)) {
        let sectors = compute_sectors(&dataset_from(&values)).expect("sectors");
        let total: f64 = sectors.iter().map(|s| s.sweep_angle).sum();
        prop_assert!((total - 360.0).abs() <= 1e-6);
    }

    #[test]
    fn start_angles_are_cumulative(values in prop::collection::vec(0.0f64..1_000.0, 1..32)) {
        let dataset = dataset_from(&values);
        prop_assume!(dataset.total() > 0.0);
        let sectors = compute_sectors(&dataset).expect("sectors");

        prop_assert_eq!(sectors[0].start_angle, 0.0);
        for pair in sectors.windows(2) {
            prop_assert_eq!(pair[1].start_angle, pair[0].start_angle + pair[0].sweep_angle);
        }
    }

    #[test]
    fn sweep_is_proportional_and_monotonic(values in prop::collection::vec(0.0f64..1_000.0, 1..32)) {
        let dataset = dataset_from(&values);
        let total = dataset.total();
        prop_assume!(total > 0.0);
        let sectors = compute_sectors(&dataset).expect("sectors");

        for (sector, value) in sectors.iter().zip(&values) {
            prop_assert!((sector.sweep_angle - 360.0 * value / total).abs() <= 1e-9);
        }
        for (a, va) in sectors.iter().zip(&values) {
            for (b, vb) in sectors.iter().zip(&values) {
                if va >= vb {
                    prop_assert!(a.sweep_angle >= b.sweep_angle);
                }
            }
        }
    }

    #[test]
    fn compute_sectors_is_idempotent(values in prop::collection::vec(0.001f64..1_000.0, 0..32)) {
        let dataset = dataset_from(&values);
        let first = compute_sectors(&dataset).expect("sectors");
        let second = compute_sectors(&dataset).expect("sectors");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendered_frames_never_contain_non_finite_geometry(
        values in prop::collection::vec(0.0f64..1_000.0, 0..16),
        clicks in prop::collection::vec(0usize..16, 0..6),
        multiple in any::<bool>(),
        width in 1u32..2_000,
        height in 1u32..2_000,
    ) {
        let policy = if multiple { DetachPolicy::Multiple } else { DetachPolicy::Single };
        let config = PieChartConfig::new(Viewport::new(width, height)).with_detach_policy(policy);
        let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine");

        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, value)| DataPoint::new(format!("p{i}"), *value))
            .collect();
        let accepted = engine.set_data(points).is_ok();
        let total: f64 = values.iter().sum();
        prop_assert_eq!(accepted, values.is_empty() || total > 0.0);

        for index in clicks {
            let result = engine.click_sector(index);
            prop_assert_eq!(result.is_ok(), index < engine.sectors().len());
        }

        let frame = engine.build_render_frame().expect("frame");
        prop_assert!(frame.validate().is_ok());
        prop_assert_eq!(frame.sectors.len(), engine.sectors().len());
        engine.render().expect("render");
    }
}
