// src/common/address.rs

use super::error::ProtocolError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of an SDP3x sensor.
///
/// The sensor's address is selected in hardware and can only be one of
/// 0x21, 0x22 or 0x23. The address is fixed for the lifetime of a driver handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Sdp3xAddr(u8);

impl Sdp3xAddr {
    pub const ADDR_21: Sdp3xAddr = Sdp3xAddr(0x21);
    pub const ADDR_22: Sdp3xAddr = Sdp3xAddr(0x22);
    pub const ADDR_23: Sdp3xAddr = Sdp3xAddr(0x23);

    /// The I2C general call address. Commands sent here reach every device on the bus.
    pub const GENERAL_CALL: u8 = 0x00;

    /// Creates a new `Sdp3xAddr` if `address` is one of the selectable sensor addresses.
    pub fn new(address: u8) -> Result<Self, ProtocolError> {
        if Self::is_valid_address(address) {
            Ok(Sdp3xAddr(address))
        } else {
            Err(ProtocolError::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x21..=0x23)
    }
}

impl Default for Sdp3xAddr {
    fn default() -> Self {
        Self::ADDR_21
    }
}

impl TryFrom<u8> for Sdp3xAddr {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sdp3xAddr> for u8 {
    fn from(value: Sdp3xAddr) -> Self {
        value.0
    }
}

impl fmt::Display for Sdp3xAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(Sdp3xAddr::new(0x21).unwrap(), Sdp3xAddr::ADDR_21);
        assert_eq!(Sdp3xAddr::new(0x22).unwrap(), Sdp3xAddr::ADDR_22);
        assert_eq!(Sdp3xAddr::new(0x23).unwrap(), Sdp3xAddr::ADDR_23);
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(Sdp3xAddr::new(0x00), Err(ProtocolError::InvalidAddress(0x00))));
        assert!(matches!(Sdp3xAddr::new(0x20), Err(ProtocolError::InvalidAddress(0x20))));
        assert!(matches!(Sdp3xAddr::new(0x24), Err(ProtocolError::InvalidAddress(0x24))));
        // Pre-shifted 8-bit form is not accepted
        assert!(matches!(Sdp3xAddr::new(0x42), Err(ProtocolError::InvalidAddress(0x42))));
    }

    #[test]
    fn test_try_from_and_into_u8() {
        let addr = Sdp3xAddr::try_from(0x22).unwrap();
        assert_eq!(u8::from(addr), 0x22);
        assert_eq!(addr.as_u8(), 0x22);
        assert!(Sdp3xAddr::try_from(0x7F).is_err());
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Sdp3xAddr::default(), Sdp3xAddr::ADDR_21);

        use core::fmt::Write;
        let mut out = heapless::String::<8>::new();
        write!(out, "{}", Sdp3xAddr::ADDR_23).unwrap();
        assert_eq!(out.as_str(), "0x23");
    }
}
