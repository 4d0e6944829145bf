// src/driver/sync_driver/protocol_helpers.rs

use crate::common::types::Measurement;

/*  Measurement data format:
    | Byte  |  0  |  1  |  2  |  3  |  4  |  5  |
    | Value | pressure  | temp      | scale     |

    Identification data format:
    | Byte  | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 |
    | Value | product id    | serial number                   |
*/

const PRESSURE: core::ops::Range<usize> = 0..2;
const TEMPERATURE: core::ops::Range<usize> = 2..4;
const SCALE_FACTOR: core::ops::Range<usize> = 4..6;
const PRODUCT_ID: core::ops::Range<usize> = 0..4;
const SERIAL_NUMBER: core::ops::Range<usize> = 4..12;

/// Words needed to cover the requested measurement fields.
/// Fields are laid out in a fixed order, so the scale factor also pulls in temperature.
pub(super) fn measurement_word_count(want_temperature: bool, want_scale: bool) -> usize {
    if want_scale {
        3
    } else if want_temperature {
        2
    } else {
        1
    }
}

pub(super) fn identification_word_count(want_serial: bool) -> usize {
    if want_serial {
        6
    } else {
        2
    }
}

/// Big-endian reconstruction, most significant byte first.
pub(super) fn be_value(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Decodes validated measurement data. `data` must hold at least
/// `2 * measurement_word_count(..)` bytes.
pub(super) fn decode_measurement(data: &[u8], want_temperature: bool, want_scale: bool) -> Measurement {
    let field = |range: core::ops::Range<usize>| be_value(&data[range]) as u16 as i16;
    Measurement {
        pressure: field(PRESSURE),
        temperature: want_temperature.then(|| field(TEMPERATURE)),
        scale_factor: want_scale.then(|| field(SCALE_FACTOR)),
    }
}

pub(super) fn decode_product_id(data: &[u8]) -> u32 {
    be_value(&data[PRODUCT_ID]) as u32
}

pub(super) fn decode_serial_number(data: &[u8]) -> u64 {
    be_value(&data[SERIAL_NUMBER])
}
