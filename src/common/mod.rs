// src/common/mod.rs

pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod types;

// From address.rs
pub use address::Sdp3xAddr;

// From command.rs
pub use command::Command;

// From crc.rs
pub use self::crc::{calculate_crc8, verify_word, MAX_WORDS, WORD_DATA_LEN, WORD_LEN};

// From error.rs
pub use error::{BusError, DriverError, ProtocolError};

// From hal_traits.rs
pub use hal_traits::TwoWire;

#[cfg(feature = "impl-native")]
pub use hal_traits::NativeI2c;

// From types.rs
pub use types::{
    Identification, Measurement, Model, SessionState, TempCompensation, SDP31_PRODUCT_ID,
    SDP32_PRODUCT_ID, TEMPERATURE_SCALE,
};
