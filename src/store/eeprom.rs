//! 24Cxx-style I²C EEPROM as a [`RecordStore`].
//!
//! Works with any blocking `embedded-hal` I²C bus. After each write the
//! chip goes deaf for its internal write cycle; we poll for an ACK a
//! bounded number of times instead of waiting forever, so a missing or
//! wedged chip surfaces as [`Error::Timeout`].

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use heapless::Vec;

use super::RecordStore;
use crate::config::{EEPROM_WRITE_POLL_ATTEMPTS, EEPROM_WRITE_POLL_INTERVAL_US};
use crate::error::Error;

/// Write page size of a 24C02. A burst must not cross a page boundary.
pub const PAGE_SIZE: usize = 8;

pub struct I2cEeprom<I2C, D> {
    i2c: I2C,
    delay: D,
    poll_attempts: u32,
}

impl<I2C, D> I2cEeprom<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            poll_attempts: EEPROM_WRITE_POLL_ATTEMPTS,
        }
    }

    /// Override how many ACK polls a write may take before timing out.
    pub fn with_poll_attempts(mut self, attempts: u32) -> Self {
        self.poll_attempts = attempts;
        self
    }

    /// Give the bus and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Wait for the internal write cycle by re-addressing the chip until it ACKs.
    fn wait_write_cycle(&mut self, device: u8, mem_addr: u8) -> Result<(), Error> {
        for _ in 0..self.poll_attempts {
            self.delay.delay_us(EEPROM_WRITE_POLL_INTERVAL_US);
            if self.i2c.write(device, &[mem_addr]).is_ok() {
                return Ok(());
            }
        }
        warn!("EEPROM 0x{=u8:x} still busy after write", device);
        Err(Error::Timeout)
    }
}

impl<I2C, D> RecordStore for I2cEeprom<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn burst_write(&mut self, device: u8, mem_addr: u8, data: &[u8]) -> Result<(), Error> {
        if data.len() > PAGE_SIZE {
            return Err(Error::BufferOverflow);
        }
        if (mem_addr as usize % PAGE_SIZE) + data.len() > PAGE_SIZE {
            return Err(Error::OutOfRange);
        }

        // Format: [mem_addr][data...]
        let mut frame: Vec<u8, { PAGE_SIZE + 1 }> = Vec::new();
        frame.push(mem_addr).map_err(|_| Error::BufferOverflow)?;
        frame
            .extend_from_slice(data)
            .map_err(|_| Error::BufferOverflow)?;

        self.i2c
            .write(device, &frame)
            .map_err(|e| Error::from(e.kind()))?;
        self.wait_write_cycle(device, mem_addr)
    }

    fn burst_read(&mut self, device: u8, mem_addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        self.i2c
            .write_read(device, &[mem_addr], buf)
            .map_err(|e| Error::from(e.kind()))
    }
}
