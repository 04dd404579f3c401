//! Unified error type for hangman.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// The two-wire bus transaction failed.
    Bus(BusError),

    /// The EEPROM did not finish its write cycle in time.
    Timeout,

    /// Record offset or length falls outside the store.
    OutOfRange,

    // Game
    /// The guessed letter is not in the remaining alphabet.
    LetterUnavailable,

    /// Word is empty, too long, or not plain uppercase ASCII.
    InvalidWord,

    /// Leaderboard name is not exactly three uppercase letters.
    InvalidName,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

/// Subset of bus errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge its address.
    AddressNack,
    /// Device did not acknowledge a data byte.
    DataNack,
    /// Lost arbitration or bus held by another master.
    Arbitration,
    /// Receive overrun / transmit underrun.
    Overrun,
    /// Anything else the HAL reports.
    Other,
}

// Convenience conversions

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => BusError::AddressNack,
            ErrorKind::NoAcknowledge(_) => BusError::DataNack,
            ErrorKind::ArbitrationLoss | ErrorKind::Bus => BusError::Arbitration,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Bus(kind.into())
    }
}
