use bevy::prelude::*;

use crate::resources::FrameConverter;

/// Plugin that sets up the earth/render frame conversion
#[derive(Default)]
pub struct TransformationPlugin;

impl Plugin for TransformationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameConverter>();
    }
}
