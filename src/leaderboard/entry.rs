//! Leaderboard entry and its 8-byte record form.
//!
//! Layout (8 ASCII bytes, no terminator):
//! ```text
//! Byte 0-3: score, zero-padded decimal (0000-9999)
//! Byte 4:   ' '
//! Byte 5-7: name, three uppercase letters
//! ```

use core::fmt;

use crate::config::{MAX_RECORD_SCORE, NAME_LEN};
use crate::error::Error;

/// Record size in bytes.
pub const RECORD_LEN: usize = 8;

/// Raw record as stored in the EEPROM.
pub type Record = [u8; RECORD_LEN];

/// Width of the score field at the start of a record.
pub const SCORE_FIELD_LEN: usize = 4;

/// One row of the high-score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LeaderboardEntry {
    record: Record,
}

impl LeaderboardEntry {
    /// Placeholder row used for empty slots.
    pub const DEFAULT: Self = Self {
        record: *b"0000 AAA",
    };

    /// Build an entry, clamping `score` into `0..=9999`.
    pub fn new(score: i32, name: [u8; NAME_LEN]) -> Result<Self, Error> {
        if !name.iter().all(u8::is_ascii_uppercase) {
            return Err(Error::InvalidName);
        }

        let mut value = score.clamp(0, MAX_RECORD_SCORE) as u16;
        let mut record = [b' '; RECORD_LEN];
        for digit in record[..SCORE_FIELD_LEN].iter_mut().rev() {
            *digit = b'0' + (value % 10) as u8;
            value /= 10;
        }
        record[SCORE_FIELD_LEN + 1..].copy_from_slice(&name);
        Ok(Self { record })
    }

    /// Parse a record read back from storage.
    ///
    /// Returns `None` unless the bytes are exactly `DDDD SSS`.
    pub fn from_record(record: &Record) -> Option<Self> {
        let digits_ok = record[..SCORE_FIELD_LEN].iter().all(u8::is_ascii_digit);
        let separator_ok = record[SCORE_FIELD_LEN] == b' ';
        let name_ok = record[SCORE_FIELD_LEN + 1..]
            .iter()
            .all(u8::is_ascii_uppercase);
        (digits_ok && separator_ok && name_ok).then_some(Self { record: *record })
    }

    /// Canonical 8-byte form.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The 4-byte zero-padded score prefix used for ranking.
    pub fn score_field(&self) -> &[u8] {
        &self.record[..SCORE_FIELD_LEN]
    }

    pub fn score(&self) -> u16 {
        self.score_field()
            .iter()
            .fold(0, |acc, d| acc * 10 + u16::from(d - b'0'))
    }

    pub fn name(&self) -> &str {
        core::str::from_utf8(&self.record[SCORE_FIELD_LEN + 1..]).unwrap_or("???")
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.record).unwrap_or("???? ???")
    }
}

impl Default for LeaderboardEntry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
