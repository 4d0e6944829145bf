// src/common/types.rs

/// Product identifier reported by an SDP31.
pub const SDP31_PRODUCT_ID: u32 = 0x0301_0188;
/// Product identifier reported by an SDP32.
pub const SDP32_PRODUCT_ID: u32 = 0x0301_0288;

/// Differential pressure scale factor of the SDP31, in 1/Pa.
pub const SDP31_PRESSURE_SCALE: u8 = 60;
/// Differential pressure scale factor of the SDP32, in 1/Pa.
pub const SDP32_PRESSURE_SCALE: u8 = 240;
/// Temperature scale factor shared by all SDP3x sensors, in 1/°C.
pub const TEMPERATURE_SCALE: u8 = 200;
/// Pressure scale returned while the model is still unknown.
pub const FALLBACK_PRESSURE_SCALE: u8 = 1;

/// Temperature compensation mode used for continuous and triggered measurements.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TempCompensation {
    /// Compensate for mass flow applications.
    MassFlow,
    /// Compensate for differential pressure applications (absolute pressure matters).
    #[default]
    DifferentialPressure,
}

/// Sensor model, resolved from the product identifier.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Model {
    /// Not identified yet, or the product id was not recognised.
    #[default]
    Unknown,
    Sdp31,
    Sdp32,
}

impl Model {
    /// Maps a product identifier to a model. Unrecognised ids map to `Unknown`.
    pub const fn from_product_id(product_id: u32) -> Self {
        match product_id {
            SDP31_PRODUCT_ID => Model::Sdp31,
            SDP32_PRODUCT_ID => Model::Sdp32,
            _ => Model::Unknown,
        }
    }

    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Model::Unknown)
    }

    /// Differential pressure scale factor in 1/Pa.
    pub const fn pressure_scale(&self) -> u8 {
        match self {
            Model::Sdp31 => SDP31_PRESSURE_SCALE,
            Model::Sdp32 => SDP32_PRESSURE_SCALE,
            Model::Unknown => FALLBACK_PRESSURE_SCALE,
        }
    }
}

/// Run state of a driver session.
///
/// The driver is blocking, so `TriggeredPending` only records that a trigger
/// command has gone out and its result has not been read back yet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Idle,
    ContinuousRunning,
    TriggeredPending,
}

/// Raw measurement words.
///
/// Divide `pressure` by the pressure scale and `temperature` by the temperature
/// scale to get Pa and °C. Fields that were not requested are `None`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Measurement {
    pub pressure: i16,
    pub temperature: Option<i16>,
    /// Differential pressure scale factor as reported by the sensor.
    pub scale_factor: Option<i16>,
}

/// Result of the product identifier read sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Identification {
    pub product_id: u32,
    pub serial_number: Option<u64>,
    /// `Model::Unknown` if `product_id` is not an SDP31 or SDP32.
    pub model: Model,
}
