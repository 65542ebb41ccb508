use chart_scene::core::{DataPoint, DataSeries};
use chart_scene::error::ChartError;
use rust_decimal::Decimal;

#[test]
fn mismatched_point_shape_is_rejected() {
    let mut series = DataSeries::new(["last_week", "this_week"]);
    series
        .push(DataPoint::new("1", &[5.0, 8.0]))
        .expect("matching shape");

    let result = series.push(DataPoint::single("2", 3.0));
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert_eq!(series.len(), 1);
}

#[test]
fn channel_values_follow_point_order() {
    let series = DataSeries::from_points(
        ["impressions"],
        [
            DataPoint::single("Post 3", 30.0),
            DataPoint::single("Post 1", 10.0),
        ],
    )
    .expect("series");

    assert_eq!(series.channel_values(0), vec![30.0, 10.0]);
    assert!(series.channel_values(1).is_empty());
    assert_eq!(series.labels().collect::<Vec<_>>(), vec!["Post 3", "Post 1"]);
}

#[test]
fn decimal_values_are_converted() {
    let point = DataPoint::from_decimals("1", &[Decimal::new(525, 2), Decimal::new(8, 0)])
        .expect("decimal point");
    assert_eq!(point.values.as_slice(), &[5.25, 8.0]);
}

#[test]
fn builder_chains_points() {
    let series = DataSeries::new(["v"])
        .with_point(DataPoint::single("a", 1.0))
        .and_then(|series| series.with_point(DataPoint::single("b", 2.0)))
        .expect("series");
    assert_eq!(series.len(), 2);
    assert!(!series.is_empty());
}

#[test]
fn ragged_json_series_is_rejected() {
    let json = r#"{
        "channels": ["last_week", "this_week"],
        "points": [
            {"label": "1", "values": [5.0]},
            {"label": "2", "values": [3.0, 10.0]}
        ]
    }"#;
    let error = serde_json::from_str::<DataSeries>(json).expect_err("ragged series");
    assert!(error.to_string().contains("has 1 values but the series has 2 channels"));
}

#[test]
fn well_formed_json_series_is_accepted() {
    let series = DataSeries::from_points(
        ["last_week", "this_week"],
        [DataPoint::new("1", &[5.0, 8.0]), DataPoint::new("2", &[3.0, 10.0])],
    )
    .expect("series");
    let json = serde_json::to_string(&series).expect("serialize");
    let parsed: DataSeries = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, series);
}
