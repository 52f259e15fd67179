use serde::{Deserialize, Serialize};

use crate::resources::LookupPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Rate of the tick/draw loop [Hz]
    pub frame_rate: f64,
    pub lookup: LookupPolicy,
    /// Jump applied by the scrub keys [s]
    pub scrub_step: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            lookup: LookupPolicy::Nearest,
            scrub_step: 1.0,
        }
    }
}
