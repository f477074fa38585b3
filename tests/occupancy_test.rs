use zonetrack_rs::{
    Rect, Track, ZoneOccupancyTracker, ZoneRenderer, ZonesConfig,
};

fn zone_a_tracker() -> ZoneOccupancyTracker {
    let config = ZonesConfig::from_toml(
        r#"
        [[zone]]
        name = "A"
        left = 0
        top = 0
        right = 10
        bottom = 10
        "#,
    )
    .unwrap();
    ZoneOccupancyTracker::from_config(&config)
}

#[test]
fn test_enter_exit_scenario() {
    let mut tracker = zone_a_tracker();

    // Frame 1: obj1 overlaps zone A.
    tracker.update(1, &Track::new(1, Rect::new(2, 2, 5, 5)));
    let state = tracker.state("A").unwrap();
    assert_eq!(state.entered(), &[1]);
    assert_eq!(state.current(), &[1]);
    assert!(state.exited().is_empty());

    // Frame 2: obj1 moved away, no longer overlapping.
    tracker.update(2, &Track::new(1, Rect::new(100, 100, 110, 110)));
    let state = tracker.state("A").unwrap();
    assert_eq!(state.exited(), &[1]);
    assert_eq!(state.entered(), &[1]); // unchanged
    // The membership reset happens only in the overlapping branch, so a
    // frame where nothing overlaps leaves frame 1's id in `current`.
    assert_eq!(state.current(), &[1]);

    // Frame 3: obj1 comes back; re-entry is a fresh log record and the
    // overlap finally resets `current`.
    tracker.update(3, &Track::new(1, Rect::new(4, 4, 8, 8)));
    let state = tracker.state("A").unwrap();
    assert_eq!(state.entered(), &[1, 1]);
    assert_eq!(state.occupancy(), 2);
    assert_eq!(state.current(), &[1]);
}

#[test]
fn test_same_frame_objects_reset_current_once() {
    let mut tracker = zone_a_tracker();

    // Frame 1 seeds `current` so the frame-3 reset is observable.
    tracker.update(1, &Track::new(1, Rect::new(2, 2, 5, 5)));

    // Frame 3: both objects overlap zone A.
    tracker.update(3, &Track::new(1, Rect::new(2, 2, 5, 5)));
    tracker.update(3, &Track::new(2, Rect::new(6, 6, 9, 9)));

    let state = tracker.state("A").unwrap();
    assert_eq!(state.current(), &[1, 2]);
    // obj1 was already counted inside, so frame 3 adds exactly one entry.
    assert_eq!(state.entered(), &[1, 2]);
}

#[test]
fn test_render_label_reflects_entered_log() {
    let mut tracker = zone_a_tracker();
    tracker.update(1, &Track::new(1, Rect::new(2, 2, 5, 5)));
    tracker.update(1, &Track::new(2, Rect::new(6, 6, 9, 9)));

    let renderer = ZoneRenderer::default();
    let ops = renderer.plan(&tracker, 1280, 720);
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].text, "A Count: 2");

    // Unchanged state renders the same overlay again.
    assert_eq!(ops, renderer.plan(&tracker, 1280, 720));
}

#[test]
fn test_out_of_order_and_repeated_frame_ids_taken_at_face_value() {
    let mut tracker = zone_a_tracker();

    tracker.update(5, &Track::new(1, Rect::new(2, 2, 5, 5)));
    // A stale id is still "a different frame" to the boundary detector.
    tracker.update(2, &Track::new(2, Rect::new(6, 6, 9, 9)));

    let state = tracker.state("A").unwrap();
    assert_eq!(state.current(), &[2]);
    assert_eq!(state.entered(), &[1, 2]);
}
