use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::components::{ReadoutText, StatusText, TimelineBar, TimelineFill};
use crate::display::panel_text;
use crate::resources::{CurrentFrame, LoadStatus, PlaybackClock, PlaybackState, Trajectory};

const PANEL_BACKGROUND: Color = Color::srgba(0.05, 0.05, 0.08, 0.75);
const TIMELINE_TRACK: Color = Color::srgba(0.1, 0.1, 0.1, 0.6);
const TIMELINE_FILL: Color = Color::srgb(0.95, 0.6, 0.1);
const FONT_SIZE: f32 = 15.0;

/// Readout panel on the left, status line and timeline along the bottom.
pub fn spawn_display_system(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Name::new("Readout panel"),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                ReadoutText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(10.0),
                right: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            Name::new("Playback bar"),
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new(""),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                StatusText,
            ));
            bar.spawn((
                Button,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(14.0),
                    ..default()
                },
                BackgroundColor(TIMELINE_TRACK),
                RelativeCursorPosition::default(),
                TimelineBar,
            ))
            .with_children(|track| {
                track.spawn((
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(TIMELINE_FILL),
                    TimelineFill,
                ));
            });
        });
}

pub fn update_readout_system(
    trajectory: Option<Res<Trajectory>>,
    current: Res<CurrentFrame>,
    mut texts: Query<&mut Text, With<ReadoutText>>,
) {
    let body = match (&trajectory, current.index) {
        (Some(trajectory), Some(index)) => {
            match (trajectory.sample(index), trajectory.input(index)) {
                (Some(sample), Some(input)) => panel_text(sample, input),
                _ => return,
            }
        }
        _ => String::new(),
    };

    for mut text in texts.iter_mut() {
        if text.0 != body {
            text.0.clone_from(&body);
        }
    }
}

pub fn status_line(clock: &PlaybackClock, status: &LoadStatus) -> String {
    let state = match clock.state() {
        PlaybackState::Stopped => "stopped",
        PlaybackState::Paused => "paused",
        PlaybackState::Playing => "playing",
    };
    format!(
        "t = {:.2} / {:.2} s  [{}]   {}",
        clock.current_time(),
        clock.max_time(),
        state,
        status.describe()
    )
}

pub fn update_status_system(
    clock: Res<PlaybackClock>,
    status: Res<LoadStatus>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let line = status_line(&clock, &status);
    for mut text in texts.iter_mut() {
        if text.0 != line {
            text.0.clone_from(&line);
        }
    }
}

pub fn update_timeline_system(
    clock: Res<PlaybackClock>,
    mut fills: Query<&mut Node, With<TimelineFill>>,
) {
    let width = Val::Percent((clock.progress() * 100.0) as f32);
    for mut node in fills.iter_mut() {
        if node.width != width {
            node.width = width;
        }
    }
}
