//! Byte-addressed persistent store behind a burst read/write protocol.
//!
//! The leaderboard only needs two blocking operations: write a run of
//! bytes at a memory offset of a bus device, and read one back. Real
//! hardware is an I²C EEPROM ([`eeprom::I2cEeprom`]); [`MemoryStore`]
//! stands in for it on the host.

pub mod eeprom;

use crate::error::Error;

/// Size of a 24C02 EEPROM, the smallest part the record layout fits in.
pub const STORE_SIZE: usize = 256;

/// Burst-transfer access to a byte-addressed device on a two-wire bus.
pub trait RecordStore {
    /// Write `data` starting at `mem_addr` in a single transaction.
    fn burst_write(&mut self, device: u8, mem_addr: u8, data: &[u8]) -> Result<(), Error>;

    /// Fill `buf` from consecutive bytes starting at `mem_addr`.
    fn burst_read(&mut self, device: u8, mem_addr: u8, buf: &mut [u8]) -> Result<(), Error>;
}

impl<S: RecordStore + ?Sized> RecordStore for &mut S {
    fn burst_write(&mut self, device: u8, mem_addr: u8, data: &[u8]) -> Result<(), Error> {
        (**self).burst_write(device, mem_addr, data)
    }

    fn burst_read(&mut self, device: u8, mem_addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        (**self).burst_read(device, mem_addr, buf)
    }
}

/// RAM-backed store with erased (0xFF) contents, like a fresh EEPROM.
///
/// The device address is not checked.
#[derive(Clone)]
pub struct MemoryStore {
    bytes: [u8; STORE_SIZE],
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            bytes: [0xFF; STORE_SIZE],
        }
    }

    /// Raw view of the backing memory.
    pub fn bytes(&self) -> &[u8; STORE_SIZE] {
        &self.bytes
    }

    fn range(mem_addr: u8, len: usize) -> Result<core::ops::Range<usize>, Error> {
        let start = mem_addr as usize;
        let end = start + len;
        if end > STORE_SIZE {
            return Err(Error::OutOfRange);
        }
        Ok(start..end)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn burst_write(&mut self, _device: u8, mem_addr: u8, data: &[u8]) -> Result<(), Error> {
        let range = Self::range(mem_addr, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    fn burst_read(&mut self, _device: u8, mem_addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        let range = Self::range(mem_addr, buf.len())?;
        buf.copy_from_slice(&self.bytes[range]);
        Ok(())
    }
}
