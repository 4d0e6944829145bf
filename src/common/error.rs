// src/common/error.rs

use core::fmt::Debug;

/// Failures while sending bytes to the sensor.
///
/// None of these are retried by the driver. NACKs are routine on a noisy bus,
/// so retry policy belongs to the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError<E = ()>
where
    E: Debug,
{
    /// Underlying error reported by the bus transport itself.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The device did not acknowledge the transfer.
    #[error("Device did not acknowledge")]
    Nack,

    /// The device acknowledged only part of the command.
    #[error("Short write: {acked} of {expected} bytes acknowledged")]
    ShortWrite { acked: usize, expected: usize },
}

/// Failures in the word-oriented read protocol.
///
/// When one of these is returned from a read, the driver's scratch buffer still
/// holds every byte that was transferred (zeros for anything that was not).
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// Fewer bytes arrived than the transaction asked for.
    #[error("Short read: expected {expected} bytes, received {received}")]
    ShortRead { expected: usize, received: usize },

    /// A word's checksum byte does not match the CRC of its data bytes.
    #[error("Checksum mismatch in word {word}: received {received:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { word: usize, received: u8, calculated: u8 },

    /// Requested word count is outside 1..=6.
    #[error("Invalid word count: {0}")]
    InvalidWordCount(usize),

    /// Not one of the addresses an SDP3x can be strapped to.
    #[error("Invalid SDP3x address: {0:#04x}")]
    InvalidAddress(u8),
}

/// Top-level error returned by driver operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError<E = ()>
where
    E: Debug,
{
    #[error("Bus error: {0}")]
    Bus(BusError<E>),

    #[error("Protocol error: {0}")]
    Protocol(ProtocolError),

    /// Identification succeeded but the product id is not an SDP31 or SDP32.
    /// Scale lookups keep returning the fallback of 1 in this case.
    #[error("Unknown product identifier: {0:#010x}")]
    UnknownVariant(u32),
}

impl<E: Debug> From<BusError<E>> for DriverError<E> {
    fn from(e: BusError<E>) -> Self {
        DriverError::Bus(e)
    }
}

impl<E: Debug> From<ProtocolError> for DriverError<E> {
    fn from(e: ProtocolError) -> Self {
        DriverError::Protocol(e)
    }
}
