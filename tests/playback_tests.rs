mod common;

use approx::assert_relative_eq;
use monocopter::resources::{
    CurrentFrame, LoadRequest, LoadStatus, LookupPolicy, PlaybackClock, PlaybackState,
    TableLayout, Trajectory, ViewerConfig,
};
use std::time::Duration;

use common::{climb, TestAppBuilder};

#[test]
fn test_startup_load() {
    let flight = climb(100, 5.0).write(TableLayout::ChannelRows);
    let mut app = TestAppBuilder::new().with_data_dir(flight.path()).build();

    match app.wait_for_load() {
        LoadStatus::Loaded { samples, .. } => assert_eq!(samples, 100),
        other => panic!("Unexpected status: {:?}", other),
    }

    let clock = app.get_state::<PlaybackClock>().unwrap();
    assert_eq!(clock.state(), PlaybackState::Stopped);
    assert_relative_eq!(clock.max_time(), 0.99);
    assert_eq!(app.get_state::<Trajectory>().unwrap().len(), 100);
}

#[test]
fn test_missing_data_reports_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut app = TestAppBuilder::new().with_data_dir(dir.path()).build();

    match app.wait_for_load() {
        LoadStatus::Failed(reason) => assert!(reason.contains("time.csv")),
        other => panic!("Unexpected status: {:?}", other),
    }
    assert!(app.get_state::<Trajectory>().is_none());
}

#[test]
fn test_scrubbed_pose() {
    let flight = climb(100, 5.0).write(TableLayout::ChannelRows);
    let mut app = TestAppBuilder::new().with_data_dir(flight.path()).build();
    app.wait_for_load();

    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.5, 0.0);
    app.run_fixed_tick();

    let current = app.get_state::<CurrentFrame>().unwrap();
    assert_eq!(current.index, Some(50));

    // Earth (0.5, 0, -2.525) m over a scale of 10 lands at (0.05, 0.2525, 0)
    let translation = current.pose.translation();
    assert_relative_eq!(translation.x, 0.05, epsilon = 1e-5);
    assert_relative_eq!(translation.y, 0.25252525, epsilon = 1e-5);
    assert_relative_eq!(translation.z, 0.0, epsilon = 1e-5);
}

#[test]
fn test_exact_lookup_miss_keeps_pose() {
    // 20 ms spacing leaves odd centiseconds without a sample
    let mut flight = climb(50, 5.0);
    flight.times = (0..50).map(|i| i as f64 * 0.02).collect();
    let flight = flight.write(TableLayout::ChannelRows);

    let mut config = ViewerConfig::default();
    config.data.dir = flight.path().to_path_buf();
    config.playback.lookup = LookupPolicy::Exact;

    let mut app = TestAppBuilder::new().with_config(config).build();
    app.wait_for_load();

    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.3, 0.0);
    app.run_fixed_tick();
    let before = app.get_state::<CurrentFrame>().unwrap().clone();
    assert_eq!(before.index, Some(15));

    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.31, 0.0);
    app.run_fixed_tick();
    let held = app.get_state::<CurrentFrame>().unwrap();
    assert_eq!(held.index, Some(15));
    assert_eq!(held.pose, before.pose);
    assert!(held.miss.is_some());

    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.32, 0.0);
    app.run_fixed_tick();
    let after = app.get_state::<CurrentFrame>().unwrap();
    assert_eq!(after.index, Some(16));
    assert!(after.miss.is_none());
    assert_ne!(after.pose, before.pose);
}

#[test]
fn test_playing_advances() {
    let flight = climb(100, 5.0).write(TableLayout::ChannelRows);
    let mut app = TestAppBuilder::new().with_data_dir(flight.path()).build();
    app.wait_for_load();

    let now = app
        .get_state::<bevy::prelude::Time<bevy::prelude::Real>>()
        .unwrap()
        .elapsed_secs_f64();
    app.get_state_mut::<PlaybackClock>().unwrap().play(now);

    std::thread::sleep(Duration::from_millis(60));
    app.run_frame();
    app.run_fixed_tick();

    let clock = app.get_state::<PlaybackClock>().unwrap();
    assert!(clock.is_playing());
    assert!(clock.current_time() >= 0.05);
    assert!(app.get_state::<CurrentFrame>().unwrap().index.unwrap() >= 5);
}

#[test]
fn test_failed_reload_keeps_trajectory() {
    let flight = climb(100, 5.0).write(TableLayout::ChannelRows);
    let mut app = TestAppBuilder::new().with_data_dir(flight.path()).build();
    app.wait_for_load();

    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.4, 0.0);
    flight.write_file("state.csv", "not,a,table");

    let config = app.get_state::<ViewerConfig>().unwrap().clone();
    app.app
        .world_mut()
        .send_event(LoadRequest::from_config(&config.data));

    assert!(matches!(app.wait_for_load(), LoadStatus::Failed(_)));
    assert_eq!(app.get_state::<Trajectory>().unwrap().len(), 100);
    assert_relative_eq!(app.get_state::<PlaybackClock>().unwrap().current_time(), 0.4);
}

#[test]
fn test_reload_resets_clock() {
    let flight = climb(100, 5.0).write(TableLayout::ChannelRows);
    let mut app = TestAppBuilder::new().with_data_dir(flight.path()).build();
    app.wait_for_load();
    app.get_state_mut::<PlaybackClock>().unwrap().scrub(0.4, 0.0);

    let shorter = climb(20, 1.0).write(TableLayout::ChannelRows);
    let mut config = app.get_state::<ViewerConfig>().unwrap().clone();
    config.data.dir = shorter.path().to_path_buf();
    app.app
        .world_mut()
        .send_event(LoadRequest::from_config(&config.data));

    assert!(matches!(
        app.wait_for_load(),
        LoadStatus::Loaded { samples: 20, .. }
    ));
    let clock = app.get_state::<PlaybackClock>().unwrap();
    assert_eq!(clock.current_time(), 0.0);
    assert_relative_eq!(clock.max_time(), 0.19);
    assert_eq!(app.get_state::<CurrentFrame>().unwrap().index, None);
}
