use std::collections::HashMap;

use chart_scene::api::{
    ChartAssembler, ChartKind, ChartRequest, ClubActivity, PollSplit, PostImpressions, TimeWindow,
    club_activity_series, poll_series, post_impressions_series,
};
use chart_scene::core::Viewport;
use chart_scene::render::Scene;

fn assert_send_sync<T: Send + Sync>() {}

fn screen_requests() -> Vec<ChartRequest> {
    let viewport = Viewport::new(360.0, 200.0, 40.0, 40.0);
    vec![
        ChartRequest::new(
            ChartKind::Line,
            club_activity_series(&[
                ClubActivity::new("1", 5.0, 8.0),
                ClubActivity::new("2", 3.0, 10.0),
            ]),
            viewport,
        ),
        ChartRequest::new(
            ChartKind::Bar,
            post_impressions_series(
                &[PostImpressions::new("Post 1", 12.0, 20.0)],
                TimeWindow::ThisWeek,
            ),
            viewport,
        ),
        ChartRequest::new(ChartKind::Arc, poll_series(PollSplit::new(40.0, 60.0)), viewport),
    ]
}

#[test]
fn engine_types_are_thread_safe() {
    assert_send_sync::<ChartAssembler>();
    assert_send_sync::<ChartRequest>();
    assert_send_sync::<Scene>();
}

#[test]
fn batch_preserves_request_order() {
    let assembler = ChartAssembler::default();
    let requests = screen_requests();
    let scenes = assembler.assemble_batch(&requests);

    assert_eq!(scenes.len(), 3);
    assert_eq!(scenes[0].paths().count(), 2);
    assert_eq!(scenes[1].rects().count(), 1);
    assert_eq!(scenes[2].arcs().count(), 2);
    for (request, scene) in requests.iter().zip(&scenes) {
        assert_eq!(&assembler.assemble_request(request), scene);
    }
}

#[test]
fn scenes_built_on_threads_match_sequential_ones() {
    let assembler = ChartAssembler::default();
    let requests = screen_requests();
    let sequential = assembler.assemble_batch(&requests);

    let assembler = &assembler;
    let threaded: Vec<Scene> = std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|request| scope.spawn(move || assembler.assemble_request(request)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("assembly thread"))
            .collect()
    });

    assert_eq!(threaded, sequential);
}

#[test]
fn cache_key_identifies_equal_requests() {
    let assembler = ChartAssembler::default();
    let requests = screen_requests();
    let mut cache: HashMap<_, Scene> = HashMap::new();

    for request in requests.iter().chain(requests.iter()) {
        cache
            .entry(request.cache_key())
            .or_insert_with(|| assembler.assemble_request(request));
    }
    assert_eq!(cache.len(), 3);

    let mut resized = requests[0].clone();
    resized.viewport.width = 400.0;
    assert_ne!(resized.cache_key(), requests[0].cache_key());

    let mut other_kind = requests[0].clone();
    other_kind.kind = ChartKind::Bar;
    assert_ne!(other_kind.cache_key(), requests[0].cache_key());
}
