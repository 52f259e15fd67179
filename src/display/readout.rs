use serde::Serialize;
use std::fmt;

use super::{Channel, ChannelGroup};
use crate::resources::{InputSample, Trajectory, TrajectorySample};

/// One formatted line of the state panel
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub channel: Channel,
    pub value: String,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<18}{:>10} {}",
            self.channel.label(),
            self.value,
            self.channel.unit()
        )
    }
}

pub fn format_value(channel: Channel, value: f64) -> String {
    let text = format!("{:.*}", channel.precision(), value);
    // Avoid "-0.00" flicker around zero
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Readouts shown in the state panel, in panel order
pub fn readouts(sample: &TrajectorySample, input: &InputSample) -> Vec<Readout> {
    [
        Channel::Roll,
        Channel::Pitch,
        Channel::Yaw,
        Channel::PositionX,
        Channel::PositionY,
        Channel::PositionZ,
        Channel::RollRate,
        Channel::PitchRate,
        Channel::YawRate,
        Channel::VelocityU,
        Channel::VelocityV,
        Channel::VelocityW,
        Channel::Gimbal1,
        Channel::Gimbal2,
        Channel::RotorSpeed,
    ]
    .into_iter()
    .map(|channel| Readout {
        channel,
        value: format_value(channel, channel.value(sample, input)),
    })
    .collect()
}

/// Multi-line panel text with a heading per channel group
pub fn panel_text(sample: &TrajectorySample, input: &InputSample) -> String {
    let mut text = String::new();
    let mut group = None;
    for readout in readouts(sample, input) {
        let current = readout.channel.group();
        if group != Some(current) {
            if group.is_some() {
                text.push('\n');
            }
            text.push_str(match current {
                ChannelGroup::EarthFrame => "Earth fixed frame\n",
                ChannelGroup::BodyFrame => "Body frame\n",
                ChannelGroup::Inputs => "Inputs\n",
            });
            group = Some(current);
        }
        text.push_str(&readout.to_string());
        text.push('\n');
    }
    text
}

/// Range of a channel over the whole flight, in display units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSummary {
    pub channel: Channel,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    #[serde(rename = "final")]
    pub last: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub samples: usize,
    pub duration: f64,
    pub scale_factor: f64,
    pub channels: Vec<ChannelSummary>,
}

pub fn summarize(trajectory: &Trajectory) -> FlightSummary {
    let channels = Channel::ALL
        .iter()
        .map(|&channel| {
            let series = channel.series(trajectory);
            ChannelSummary {
                channel,
                unit: channel.unit(),
                min: series.iter().copied().fold(f64::INFINITY, f64::min),
                max: series.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                last: series.last().copied().unwrap_or_default(),
            }
        })
        .collect();

    FlightSummary {
        samples: trajectory.len(),
        duration: trajectory.max_time() - trajectory.times()[0],
        scale_factor: trajectory.scale_factor(),
        channels,
    }
}
