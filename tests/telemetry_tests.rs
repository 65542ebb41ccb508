use chart_scene::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_bootstrap_is_noop_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn second_bootstrap_reports_existing_subscriber() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
