// src/driver/sync_driver/mod.rs

mod protocol_helpers;
mod transaction;

use crate::common::{
    address::Sdp3xAddr,
    command::Command,
    crc::{MAX_WORDS, WORD_DATA_LEN},
    error::{BusError, DriverError},
    hal_traits::TwoWire,
    types::{Identification, Measurement, Model, SessionState, TempCompensation, TEMPERATURE_SCALE},
};
use log::{debug, warn};

/// Size of the scratch buffer: the data bytes of the largest transaction plus
/// the slot holding the last checksum byte received.
pub const SCRATCH_LEN: usize = MAX_WORDS * WORD_DATA_LEN + 1;

/// Blocking driver for one SDP31/SDP32 sensor.
///
/// The handle owns the bus, the sensor's fixed address and compensation mode,
/// and the scratch buffer every read lands in. Two handles on the same address
/// are not detected; keeping addresses apart is the caller's job.
#[derive(Debug)]
pub struct Sdp3x<B>
where
    B: TwoWire,
{
    bus: B,
    address: Sdp3xAddr,
    compensation: TempCompensation,
    model: Model,
    state: SessionState,
    buffer: [u8; SCRATCH_LEN],
}

impl<B> Sdp3x<B>
where
    B: TwoWire,
{
    pub fn new(bus: B, address: Sdp3xAddr, compensation: TempCompensation) -> Self {
        Sdp3x {
            bus,
            address,
            compensation,
            model: Model::Unknown,
            state: SessionState::Uninitialized,
            buffer: [0; SCRATCH_LEN],
        }
    }

    /// Runs the bus's one-time initialization.
    pub fn begin_bus(&mut self) -> Result<(), BusError<B::Error>> {
        self.bus.begin().map_err(BusError::Io)
    }

    /// Identifies the sensor and requires it to be a supported model.
    ///
    /// Unlike [`Sdp3x::identify`], an unrecognised product id is an error here.
    pub fn begin(&mut self) -> Result<Model, DriverError<B::Error>> {
        let identification = self.identify(false)?;
        if identification.model.is_known() {
            Ok(identification.model)
        } else {
            Err(DriverError::UnknownVariant(identification.product_id))
        }
    }

    // --- Measurement ---

    /// Starts continuous measurement using this handle's compensation mode.
    ///
    /// With `averaging`, the sensor averages every sample until the next read;
    /// otherwise a read returns the latest sample only.
    pub fn start_continuous(&mut self, averaging: bool) -> Result<(), BusError<B::Error>> {
        self.send_command(Command::start_continuous(self.compensation, averaging))?;
        self.state = SessionState::ContinuousRunning;
        Ok(())
    }

    /// Stops continuous measurement. Safe to call when already stopped.
    pub fn stop_continuous(&mut self) -> Result<(), BusError<B::Error>> {
        self.send_command(Command::StopContinuous)?;
        if self.state == SessionState::ContinuousRunning {
            self.state = SessionState::Idle;
        }
        Ok(())
    }

    /// Triggers a one-shot measurement. The result is fetched with [`Sdp3x::read_measurement`].
    ///
    /// With `stretching`, the sensor holds the clock during conversion instead
    /// of NACKing the read until the result is ready.
    pub fn trigger_measurement(&mut self, stretching: bool) -> Result<(), BusError<B::Error>> {
        self.send_command(Command::trigger(self.compensation, stretching))?;
        if self.state == SessionState::Idle {
            self.state = SessionState::TriggeredPending;
        }
        Ok(())
    }

    /// Reads a pending measurement.
    ///
    /// Only the words needed for the requested fields are transferred;
    /// fields that were not requested are `None` in the result.
    pub fn read_measurement(
        &mut self,
        want_temperature: bool,
        want_scale: bool,
    ) -> Result<Measurement, DriverError<B::Error>> {
        let word_count = protocol_helpers::measurement_word_count(want_temperature, want_scale);
        let data = self.read_words(word_count)?;
        let measurement = protocol_helpers::decode_measurement(data, want_temperature, want_scale);

        if self.state == SessionState::TriggeredPending {
            self.state = SessionState::Idle;
        }
        debug!("Measurement from {}: {:?}", self.address, measurement);
        Ok(measurement)
    }

    // --- Identification & Reset ---

    /// Reads the product identifier and, with `want_serial`, the serial number.
    ///
    /// A product id that is neither SDP31 nor SDP32 is not an error: it is
    /// returned with `Model::Unknown` and the caller decides what to do.
    pub fn identify(&mut self, want_serial: bool) -> Result<Identification, DriverError<B::Error>> {
        self.send_command(Command::ReadProductId1)?;
        self.send_command(Command::ReadProductId2)?;

        let word_count = protocol_helpers::identification_word_count(want_serial);
        let data = self.read_words(word_count)?;
        let product_id = protocol_helpers::decode_product_id(data);
        let serial_number = want_serial.then(|| protocol_helpers::decode_serial_number(data));

        let model = Model::from_product_id(product_id);
        self.resolve_model(model, product_id);
        if self.state == SessionState::Uninitialized {
            self.state = SessionState::Idle;
        }

        Ok(Identification { product_id, serial_number, model })
    }

    /// Soft-resets the sensor to its power-up defaults.
    ///
    /// WARNING: the reset goes out as an I2C general call, so every device on
    /// the bus that supports it resets too, not only this sensor.
    pub fn reset(&mut self) -> Result<(), BusError<B::Error>> {
        self.send_general_call(Command::SoftReset)?;
        if self.state != SessionState::Uninitialized {
            self.state = SessionState::Idle;
        }
        Ok(())
    }

    // --- Scaling ---

    /// Differential pressure scale factor in 1/Pa. 1 until the model is known.
    pub fn pressure_scale(&self) -> u8 {
        self.model.pressure_scale()
    }

    /// Temperature scale factor in 1/°C.
    pub fn temperature_scale(&self) -> u8 {
        TEMPERATURE_SCALE
    }

    // --- Accessors ---

    pub fn address(&self) -> Sdp3xAddr {
        self.address
    }

    pub fn compensation(&self) -> TempCompensation {
        self.compensation
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The whole scratch buffer as left by the last read, including after a failed one.
    pub fn scratch(&self) -> &[u8; SCRATCH_LEN] {
        &self.buffer
    }

    /// Consumes the driver and gives back the bus.
    pub fn release(self) -> B {
        self.bus
    }

    /// The model is set once, from `Unknown`, and never changes afterwards.
    fn resolve_model(&mut self, model: Model, product_id: u32) {
        match (self.model, model) {
            (_, Model::Unknown) => {
                warn!("Unknown product id {:#010x} at {}", product_id, self.address);
            }
            (Model::Unknown, resolved) => {
                debug!("Identified {:?} at {}", resolved, self.address);
                self.model = resolved;
            }
            (current, resolved) if current != resolved => {
                warn!(
                    "{} reported {:?} but was already identified as {:?}; keeping {:?}",
                    self.address, resolved, current, current
                );
            }
            _ => {}
        }
    }
}
