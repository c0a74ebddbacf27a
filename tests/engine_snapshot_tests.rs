use approx::assert_relative_eq;
use pie_chart_rs::api::{EngineSnapshot, PieChartConfig, PieChartEngine};
use pie_chart_rs::core::{DataPoint, Viewport};
use pie_chart_rs::interaction::SectorState;
use pie_chart_rs::render::NullRenderer;
use pie_chart_rs::ChartError;

fn engine() -> PieChartEngine<NullRenderer> {
    let config = PieChartConfig::new(Viewport::new(700, 700));
    let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(vec![
            DataPoint::new("PAKISTAN", 3.0),
            DataPoint::new("USA", 4.2),
            DataPoint::new("CHINA", 8.5),
            DataPoint::new("BRAZIL", 2.5),
        ])
        .expect("valid data");
    engine.click_sector(1).expect("click");
    engine
}

#[test]
fn snapshot_captures_geometry_labels_and_state() {
    let snapshot = engine().snapshot().expect("snapshot");

    assert_eq!(snapshot.viewport, Viewport::new(700, 700));
    assert_relative_eq!(snapshot.total, 18.2, epsilon = 1e-12);
    assert_eq!(snapshot.sectors.len(), 4);
    assert_eq!(snapshot.sectors[1].label, "USA (23.1%)");
    assert_eq!(snapshot.sectors[1].state, SectorState::Detached);
    assert_eq!(snapshot.sectors[0].state, SectorState::Attached);
    assert!(snapshot.sectors[2].large_arc == (snapshot.sectors[2].sweep_angle > 180.0));
    assert_eq!(snapshot.interaction.detached_index(), Some(1));
}

#[test]
fn snapshot_json_contract_round_trips() {
    let engine = engine();
    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed.sectors.len(), 4);
    assert_eq!(parsed.sectors[3].name, "BRAZIL");
    assert_eq!(parsed.interaction.detached_index(), Some(1));
    assert_relative_eq!(
        parsed.sectors[2].sweep_angle,
        engine.sectors()[2].sweep_angle,
        epsilon = 1e-9
    );
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = engine().snapshot().expect("snapshot");
    let json = serde_json::to_string(&snapshot).expect("serialize bare snapshot");
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse bare snapshot");
    assert_eq!(parsed.sectors[0].label, "PAKISTAN (16.5%)");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = engine()
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");
    let err = EngineSnapshot::from_json_compat_str(&json).expect_err("v2 is unknown");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn snapshot_with_several_detached_under_single_policy_is_rejected() {
    let json = engine()
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("contract json");
    value["snapshot"]["interaction"]["detached"] = serde_json::json!([0, 1, 2]);
    let tampered = serde_json::to_string(&value).expect("re-serialize");

    let err = EngineSnapshot::from_json_compat_str(&tampered).expect_err("single policy");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
