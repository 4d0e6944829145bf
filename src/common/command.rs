//! SDP3x command catalog.
//!
//! Every command is a fixed 2-byte opcode, sent most-significant byte first.

use super::types::TempCompensation;

/// Represents an SDP3x I2C command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start continuous measurement, mass flow compensation, average till read.
    StartContinuousMassFlowAveraging,
    /// Start continuous measurement, mass flow compensation, latest value only.
    StartContinuousMassFlow,
    /// Start continuous measurement, differential pressure compensation, average till read.
    StartContinuousDiffPressureAveraging,
    /// Start continuous measurement, differential pressure compensation, latest value only.
    StartContinuousDiffPressure,
    /// Stop continuous measurement.
    StopContinuous,
    /// Triggered measurement, mass flow compensation, no clock stretching.
    TriggerMassFlow,
    /// Triggered measurement, mass flow compensation, clock stretching.
    TriggerMassFlowStretch,
    /// Triggered measurement, differential pressure compensation, no clock stretching.
    TriggerDiffPressure,
    /// Triggered measurement, differential pressure compensation, clock stretching.
    TriggerDiffPressureStretch,
    /// First half of the product identifier read sequence.
    ReadProductId1,
    /// Second half of the product identifier read sequence.
    ReadProductId2,
    /// Soft reset. Only meaningful when sent to the general call address.
    SoftReset,
}

impl Command {
    /// Returns the opcode as it appears on the wire.
    pub const fn bytes(self) -> [u8; 2] {
        match self {
            Command::StartContinuousMassFlowAveraging => [0x36, 0x03],
            Command::StartContinuousMassFlow => [0x36, 0x08],
            Command::StartContinuousDiffPressureAveraging => [0x36, 0x15],
            Command::StartContinuousDiffPressure => [0x36, 0x1E],
            Command::StopContinuous => [0x3F, 0xF9],
            Command::TriggerMassFlow => [0x36, 0x24],
            Command::TriggerMassFlowStretch => [0x37, 0x26],
            Command::TriggerDiffPressure => [0x36, 0x2F],
            Command::TriggerDiffPressureStretch => [0x37, 0x2D],
            Command::ReadProductId1 => [0x36, 0x7C],
            Command::ReadProductId2 => [0xE1, 0x02],
            Command::SoftReset => [0x00, 0x06],
        }
    }

    /// Selects the continuous-start command for a compensation mode.
    pub const fn start_continuous(compensation: TempCompensation, averaging: bool) -> Self {
        match (compensation, averaging) {
            (TempCompensation::MassFlow, true) => Command::StartContinuousMassFlowAveraging,
            (TempCompensation::MassFlow, false) => Command::StartContinuousMassFlow,
            (TempCompensation::DifferentialPressure, true) => {
                Command::StartContinuousDiffPressureAveraging
            }
            (TempCompensation::DifferentialPressure, false) => Command::StartContinuousDiffPressure,
        }
    }

    /// Selects the one-shot trigger command for a compensation mode.
    pub const fn trigger(compensation: TempCompensation, stretching: bool) -> Self {
        match (compensation, stretching) {
            (TempCompensation::MassFlow, true) => Command::TriggerMassFlowStretch,
            (TempCompensation::MassFlow, false) => Command::TriggerMassFlow,
            (TempCompensation::DifferentialPressure, true) => Command::TriggerDiffPressureStretch,
            (TempCompensation::DifferentialPressure, false) => Command::TriggerDiffPressure,
        }
    }
}

impl From<Command> for [u8; 2] {
    fn from(value: Command) -> Self {
        value.bytes()
    }
}
