use serde::Serialize;

use crate::resources::{InputSample, Trajectory, TrajectorySample};

/// Every recorded quantity that can be shown or summarised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    Roll,
    Pitch,
    Yaw,
    VelocityU,
    VelocityV,
    VelocityW,
    RollRate,
    PitchRate,
    YawRate,
    Gimbal1,
    Gimbal2,
    RotorSpeed,
    Gimbal1Rate,
    Gimbal2Rate,
    RotorAcceleration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelGroup {
    EarthFrame,
    BodyFrame,
    Inputs,
}

impl Channel {
    pub const ALL: [Channel; 18] = [
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
        Channel::Gimbal1Rate,
        Channel::Gimbal2Rate,
        Channel::RotorAcceleration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::PositionX => "X-position",
            Channel::PositionY => "Y-position",
            Channel::PositionZ => "Z-position",
            Channel::Roll => "Roll angle",
            Channel::Pitch => "Pitch angle",
            Channel::Yaw => "Yaw angle",
            Channel::VelocityU => "X-velocity",
            Channel::VelocityV => "Y-velocity",
            Channel::VelocityW => "Z-velocity",
            Channel::RollRate => "Roll rate",
            Channel::PitchRate => "Pitch rate",
            Channel::YawRate => "Yaw rate",
            Channel::Gimbal1 => "X-gimbal angle",
            Channel::Gimbal2 => "Y-gimbal angle",
            Channel::RotorSpeed => "Rot. rate prop.",
            Channel::Gimbal1Rate => "X-gimbal rate",
            Channel::Gimbal2Rate => "Y-gimbal rate",
            Channel::RotorAcceleration => "Rot. accel. prop.",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Channel::PositionX | Channel::PositionY | Channel::PositionZ => "m",
            Channel::VelocityU | Channel::VelocityV | Channel::VelocityW => "m/s",
            Channel::Roll | Channel::Pitch | Channel::Yaw => "deg",
            Channel::Gimbal1 | Channel::Gimbal2 => "deg",
            Channel::RollRate | Channel::PitchRate | Channel::YawRate => "deg/s",
            Channel::Gimbal1Rate | Channel::Gimbal2Rate => "deg/s",
            Channel::RotorSpeed => "rad/s",
            Channel::RotorAcceleration => "rad/s^2",
        }
    }

    pub fn group(&self) -> ChannelGroup {
        match self {
            Channel::PositionX
            | Channel::PositionY
            | Channel::PositionZ
            | Channel::Roll
            | Channel::Pitch
            | Channel::Yaw => ChannelGroup::EarthFrame,
            Channel::VelocityU
            | Channel::VelocityV
            | Channel::VelocityW
            | Channel::RollRate
            | Channel::PitchRate
            | Channel::YawRate => ChannelGroup::BodyFrame,
            _ => ChannelGroup::Inputs,
        }
    }

    /// Angles and angular rates, stored in radians and shown in degrees
    pub fn is_angular(&self) -> bool {
        matches!(
            self,
            Channel::Roll
                | Channel::Pitch
                | Channel::Yaw
                | Channel::RollRate
                | Channel::PitchRate
                | Channel::YawRate
                | Channel::Gimbal1
                | Channel::Gimbal2
                | Channel::Gimbal1Rate
                | Channel::Gimbal2Rate
        )
    }

    /// Decimal places shown for this channel
    pub fn precision(&self) -> usize {
        match self {
            Channel::RotorSpeed => 0,
            _ => 2,
        }
    }

    /// Raw value in SI units
    pub fn raw(&self, sample: &TrajectorySample, input: &InputSample) -> f64 {
        match self {
            Channel::PositionX => sample.position.x,
            Channel::PositionY => sample.position.y,
            Channel::PositionZ => sample.position.z,
            Channel::Roll => sample.attitude.x,
            Channel::Pitch => sample.attitude.y,
            Channel::Yaw => sample.attitude.z,
            Channel::VelocityU => sample.body_velocity.x,
            Channel::VelocityV => sample.body_velocity.y,
            Channel::VelocityW => sample.body_velocity.z,
            Channel::RollRate => sample.body_rates.x,
            Channel::PitchRate => sample.body_rates.y,
            Channel::YawRate => sample.body_rates.z,
            Channel::Gimbal1 => input.gimbal_1,
            Channel::Gimbal2 => input.gimbal_2,
            Channel::RotorSpeed => input.rotor_speed,
            Channel::Gimbal1Rate => input.gimbal_1_rate,
            Channel::Gimbal2Rate => input.gimbal_2_rate,
            Channel::RotorAcceleration => input.rotor_acceleration,
        }
    }

    /// Value converted to the unit returned by [`Channel::unit`]
    pub fn value(&self, sample: &TrajectorySample, input: &InputSample) -> f64 {
        let raw = self.raw(sample, input);
        if self.is_angular() {
            raw.to_degrees()
        } else {
            raw
        }
    }

    /// The whole recorded series for this channel in display units
    pub fn series(&self, trajectory: &Trajectory) -> Vec<f64> {
        trajectory
            .samples()
            .iter()
            .zip(trajectory.inputs())
            .map(|(sample, input)| self.value(sample, input))
            .collect()
    }
}
