use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use futures_lite::future;

use crate::resources::{
    CurrentFrame, LoadRequest, LoadStatus, PendingLoad, PlaybackClock, Trajectory, ViewerConfig,
};

pub fn request_initial_load(config: Res<ViewerConfig>, mut requests: EventWriter<LoadRequest>) {
    requests.send(LoadRequest::from_config(&config.data));
}

/// R re-reads the configured tables.
pub fn reload_key_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ViewerConfig>,
    mut requests: EventWriter<LoadRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        requests.send(LoadRequest::from_config(&config.data));
    }
}

/// Move the most recent request onto the async compute pool.
pub fn start_load_system(
    mut commands: Commands,
    mut requests: EventReader<LoadRequest>,
    mut status: ResMut<LoadStatus>,
) {
    let Some(request) = requests.read().last().cloned() else {
        return;
    };

    let source = request
        .paths
        .state
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_default();
    info!("Loading trajectory from {}", source.display());

    let task = AsyncComputeTaskPool::get()
        .spawn(async move { Trajectory::load(&request.paths, request.layout) });

    *status = LoadStatus::Loading(source.clone());
    commands.insert_resource(PendingLoad { task, source });
}

/// Install the finished trajectory. A failed load leaves whatever was
/// loaded before in place.
pub fn poll_load_system(
    mut commands: Commands,
    pending: Option<ResMut<PendingLoad>>,
    mut clock: ResMut<PlaybackClock>,
    mut current: ResMut<CurrentFrame>,
    mut status: ResMut<LoadStatus>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
        return;
    };
    commands.remove_resource::<PendingLoad>();

    match result {
        Ok(trajectory) => {
            info!(
                "Loaded {} samples over {:.2}s, scale factor {:.3}",
                trajectory.len(),
                trajectory.max_time(),
                trajectory.scale_factor()
            );
            clock.load(trajectory.max_time());
            *current = CurrentFrame::default();
            *status = LoadStatus::Loaded {
                source: pending.source.clone(),
                samples: trajectory.len(),
            };
            commands.insert_resource(trajectory);
        }
        Err(e) => {
            error!("Failed to load trajectory: {}", e);
            *status = LoadStatus::Failed(e.to_string());
        }
    }
}
