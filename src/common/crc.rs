// src/common/crc.rs

use super::error::ProtocolError;
use crc::{Algorithm, Crc};

/// CRC-8 algorithm used by the SDP3x to protect every data word.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789")
pub const SDP3X_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SDP3X_CRC);

/// Number of data bytes covered by one checksum.
pub const WORD_DATA_LEN: usize = 2;
/// Data bytes plus the trailing checksum byte.
pub const WORD_LEN: usize = WORD_DATA_LEN + 1;
/// Largest transaction the sensor supports: product id plus serial number.
pub const MAX_WORDS: usize = 6;

/// Calculates the SDP3x CRC-8 over `data`.
///
/// The sensor checksums each 2-byte word on its own, so callers pass one
/// word's data at a time; the calculation always starts from 0xFF.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Verifies one received word: two data bytes followed by their checksum.
///
/// # Arguments
///
/// * `word_index`: position of the word in the transaction, reported on mismatch.
/// * `word`: exactly [`WORD_LEN`] bytes.
///
/// # Returns
///
/// * `Ok(())` if the checksum matches.
/// * `Err(ProtocolError::ShortRead)` if `word` is not [`WORD_LEN`] bytes long.
/// * `Err(ProtocolError::ChecksumMismatch)` otherwise.
pub fn verify_word(word_index: usize, word: &[u8]) -> Result<(), ProtocolError> {
    if word.len() != WORD_LEN {
        return Err(ProtocolError::ShortRead { expected: WORD_LEN, received: word.len() });
    }
    let calculated = calculate_crc8(&word[..WORD_DATA_LEN]);
    let received = word[WORD_DATA_LEN];

    if calculated == received {
        Ok(())
    } else {
        Err(ProtocolError::ChecksumMismatch { word: word_index, received, calculated })
    }
}
