// src/driver/sync_driver/transaction.rs

use super::{Sdp3x, SCRATCH_LEN};
use crate::common::{
    address::Sdp3xAddr,
    command::Command,
    crc::{verify_word, MAX_WORDS, WORD_DATA_LEN, WORD_LEN},
    error::{BusError, DriverError, ProtocolError},
    hal_traits::TwoWire,
};
use log::{debug, warn};

impl<B> Sdp3x<B>
where
    B: TwoWire,
{
    /// Sends a 2-byte command to this sensor's address.
    ///
    /// Fails with `BusError::Nack` if nothing was acknowledged and
    /// `BusError::ShortWrite` if only part of the opcode was.
    pub fn send_command(&mut self, command: Command) -> Result<(), BusError<B::Error>> {
        debug!("Sending {:?} to {}", command, self.address);
        self.write_checked(self.address.as_u8(), &command.bytes())
    }

    /// Sends a command through the general call address.
    ///
    /// The first opcode byte of a general call command is the general call
    /// address itself, so only the second byte goes out as payload. Every
    /// device on the bus that supports the command will act on it.
    pub(super) fn send_general_call(&mut self, command: Command) -> Result<(), BusError<B::Error>> {
        let [address, payload] = command.bytes();
        debug_assert_eq!(address, Sdp3xAddr::GENERAL_CALL);
        debug!("Sending {:?} as general call", command);
        self.write_checked(address, &[payload])
    }

    /// Reads `word_count` words (1..=6) from the sensor and validates each checksum.
    ///
    /// The scratch buffer is zeroed before the transfer. Data bytes are packed
    /// into it positionally (word `i` at offsets `2i` and `2i + 1`), with the
    /// most recent checksum byte parked just after the last data byte.
    ///
    /// Every byte that arrives is drained and stored even after a failure is
    /// seen, so [`Sdp3x::scratch`] reflects the full transfer for diagnostics.
    /// The first failure observed is the one reported.
    ///
    /// # Returns
    ///
    /// The `2 * word_count` validated data bytes, checksums stripped.
    pub fn read_words(&mut self, word_count: usize) -> Result<&[u8], DriverError<B::Error>> {
        if !(1..=MAX_WORDS).contains(&word_count) {
            return Err(ProtocolError::InvalidWordCount(word_count).into());
        }

        self.buffer = [0; SCRATCH_LEN];

        let expected = word_count * WORD_LEN;
        let available = self
            .bus
            .request(self.address.as_u8(), expected)
            .map_err(BusError::Io)?;
        let received = available.min(expected);

        let mut failure = None;
        if received != expected {
            warn!("Short read from {}: expected {} bytes, received {}", self.address, expected, received);
            failure = Some(ProtocolError::ShortRead { expected, received });
        }

        let mut next = 0;
        for index in 0..received {
            let byte = nb::block!(self.bus.read_byte()).map_err(BusError::Io)?;
            self.buffer[next] = byte;

            if index % WORD_LEN == WORD_DATA_LEN {
                let word = [self.buffer[next - 2], self.buffer[next - 1], byte];
                if let Err(e) = verify_word(index / WORD_LEN, &word) {
                    warn!("{} from {}", e, self.address);
                    failure.get_or_insert(e);
                }
            } else {
                next += 1;
            }
        }

        match failure {
            Some(e) => Err(e.into()),
            None => {
                let data = &self.buffer[..word_count * WORD_DATA_LEN];
                debug!("Read {} words from {}: {:02X?}", word_count, self.address, data);
                Ok(data)
            }
        }
    }

    fn write_checked(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError<B::Error>> {
        let acked = self.bus.write(address, bytes).map_err(BusError::Io)?;
        if acked == bytes.len() {
            Ok(())
        } else if acked == 0 {
            warn!("No acknowledge from {:#04x}", address);
            Err(BusError::Nack)
        } else {
            warn!("Short write to {:#04x}: {} of {} bytes acknowledged", address, acked, bytes.len());
            Err(BusError::ShortWrite { acked, expected: bytes.len() })
        }
    }
}
