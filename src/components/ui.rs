use bevy::prelude::*;

/// Text node showing the current state and input readouts
#[derive(Component)]
pub struct ReadoutText;

/// Text node showing playback time and load status
#[derive(Component)]
pub struct StatusText;

/// Clickable timeline bar
#[derive(Component)]
pub struct TimelineBar;

/// Filled part of the timeline bar
#[derive(Component)]
pub struct TimelineFill;

/// The static ground quad mesh
#[derive(Component)]
pub struct GroundPlane;
