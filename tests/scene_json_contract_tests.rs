use chart_scene::api::{ChartAssembler, ClubActivity, PollSplit, SCENE_JSON_SCHEMA_V1};
use chart_scene::core::Viewport;
use chart_scene::error::ChartError;
use chart_scene::render::Scene;

fn weekly_scene() -> Scene {
    ChartAssembler::default().assemble_club_activity(
        &[
            ClubActivity::new("1", 5.0, 8.0),
            ClubActivity::new("2", 3.0, 10.0),
        ],
        Viewport::new(360.0, 200.0, 40.0, 40.0),
    )
}

#[test]
fn versioned_contract_round_trips() {
    let scene = weekly_scene();
    let json = scene.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {SCENE_JSON_SCHEMA_V1}")));

    let parsed = Scene::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, scene);
}

#[test]
fn bare_scene_json_is_accepted() {
    let scene = ChartAssembler::default().assemble_poll(
        PollSplit::new(32.0, 68.0),
        Viewport::new(200.0, 200.0, 10.0, 10.0),
    );
    let json = scene.to_json_pretty().expect("serialize");
    assert!(json.contains("\"kind\": \"arc\""));

    let parsed = Scene::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, scene);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = weekly_scene()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");

    let result = Scene::from_json_compat_str(&json);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn garbage_is_rejected() {
    assert!(Scene::from_json_compat_str("{ \"not\": \"a scene\" }").is_err());
}
