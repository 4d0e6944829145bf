// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the blocking two-wire (I2C) bus the driver talks through.
///
/// The shape follows the classic byte-oriented master API: a write reports how
/// many bytes the device acknowledged, a read is a `request` that reports how
/// many bytes are available, followed by that many `read_byte` calls.
///
/// The driver assumes exclusive use of the bus for the duration of each call.
/// Sharing one bus between several sensors (a mutex, a single-owner task, ...)
/// is up to the implementation. No timeouts are applied by the driver; a bus
/// that never completes blocks the caller.
pub trait TwoWire {
    /// Associated error type for transport failures other than a NACK.
    type Error: Debug;

    /// One-time bus initialization. Defaults to a no-op for buses that are
    /// configured before being handed to the driver.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Writes `bytes` to the 7-bit `address` in a single transfer.
    ///
    /// Returns the number of bytes the device acknowledged. A device that does
    /// not respond at all yields `Ok(0)`.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Reads up to `count` bytes from the 7-bit `address`.
    ///
    /// Returns how many bytes were actually received and are now available
    /// through [`TwoWire::read_byte`].
    fn request(&mut self, address: u8, count: usize) -> Result<usize, Self::Error>;

    /// Takes the next byte received by the last [`TwoWire::request`].
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the byte is not available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;
}

/// Adapts any `embedded-hal` 1.0 I2C bus to [`TwoWire`].
///
/// An `embedded-hal` read either fills the whole buffer or fails, so a
/// successful `request` always reports the full count and a NACK reports 0.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct NativeI2c<I2C> {
    i2c: I2C,
    rx: [u8; crate::common::crc::MAX_WORDS * crate::common::crc::WORD_LEN],
    rx_len: usize,
    rx_pos: usize,
}

#[cfg(feature = "impl-native")]
impl<I2C> NativeI2c<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        NativeI2c {
            i2c,
            rx: [0; crate::common::crc::MAX_WORDS * crate::common::crc::WORD_LEN],
            rx_len: 0,
            rx_pos: 0,
        }
    }

    /// Gives back the wrapped bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn is_nack(e: &I2C::Error) -> bool {
        use embedded_hal::i2c::{Error, ErrorKind};
        matches!(e.kind(), ErrorKind::NoAcknowledge(_))
    }
}

#[cfg(feature = "impl-native")]
impl<I2C> TwoWire for NativeI2c<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, Self::Error> {
        match self.i2c.write(address, bytes) {
            Ok(()) => Ok(bytes.len()),
            Err(e) if Self::is_nack(&e) => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn request(&mut self, address: u8, count: usize) -> Result<usize, Self::Error> {
        let count = count.min(self.rx.len());
        self.rx_pos = 0;
        self.rx_len = 0;
        match self.i2c.read(address, &mut self.rx[..count]) {
            Ok(()) => {
                self.rx_len = count;
                Ok(count)
            }
            Err(e) if Self::is_nack(&e) => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if self.rx_pos < self.rx_len {
            let byte = self.rx[self.rx_pos];
            self.rx_pos += 1;
            Ok(byte)
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

/// In-memory bus used by the unit tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::TwoWire;
    use crate::common::crc::calculate_crc8;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct MockBusError;

    #[derive(Debug, Default)]
    pub struct MockBus {
        pub begun: bool,
        /// Every write as (address, bytes), in order.
        pub writes: Vec<(u8, Vec<u8>)>,
        /// Every request as (address, count), in order.
        pub requests: Vec<(u8, usize)>,
        /// Caps the acknowledged byte count of every write.
        pub ack_limit: Option<usize>,
        /// Makes every write fail with a transport error.
        pub fail_writes: bool,
        responses: VecDeque<Vec<u8>>,
        rx: Vec<u8>,
        rx_pos: usize,
    }

    impl MockBus {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues the raw bytes served by the next `request`. A request for
        /// fewer bytes truncates them; a request for more gets a short read.
        pub fn stage_response(&mut self, bytes: &[u8]) {
            self.responses.push_back(bytes.to_vec());
        }

        pub fn last_write(&self) -> Option<(u8, &[u8])> {
            self.writes.last().map(|(addr, bytes)| (*addr, bytes.as_slice()))
        }
    }

    /// Encodes a 16-bit value as it appears on the wire: MSB, LSB, checksum.
    pub fn word(value: u16) -> [u8; 3] {
        let [msb, lsb] = value.to_be_bytes();
        [msb, lsb, calculate_crc8(&[msb, lsb])]
    }

    /// Concatenates wire words for a staged response.
    pub fn words(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| word(*v)).collect()
    }

    impl TwoWire for MockBus {
        type Error = MockBusError;

        fn begin(&mut self) -> Result<(), Self::Error> {
            self.begun = true;
            Ok(())
        }

        fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, Self::Error> {
            if self.fail_writes {
                return Err(MockBusError);
            }
            self.writes.push((address, bytes.to_vec()));
            Ok(self.ack_limit.map_or(bytes.len(), |limit| limit.min(bytes.len())))
        }

        fn request(&mut self, address: u8, count: usize) -> Result<usize, Self::Error> {
            self.requests.push((address, count));
            let mut rx = self.responses.pop_front().unwrap_or_default();
            rx.truncate(count);
            self.rx = rx;
            self.rx_pos = 0;
            Ok(self.rx.len())
        }

        fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
            match self.rx.get(self.rx_pos) {
                Some(byte) => {
                    self.rx_pos += 1;
                    Ok(*byte)
                }
                None => Err(nb::Error::Other(MockBusError)),
            }
        }
    }
}
