//! Six-slot high-score table, persisted to the record store.
//!
//! Storage layout:
//!   - Slot `n` (1-based, 1 = best) lives at byte offset `n * 40`.
//!   - Each slot holds one 8-byte `DDDD SSS` record.
//!   - The table is always full; empty rows read `0000 AAA`.

pub mod entry;

pub use entry::{LeaderboardEntry, Record, RECORD_LEN};

use crate::config::{
    EEPROM_DEVICE_ADDR, LEADERBOARD_SLOTS, LEADERBOARD_SLOT_SPACING, STORE_RETRIES,
};
use crate::error::Error;
use crate::store::RecordStore;

/// Store offset of a 0-based table index.
pub const fn slot_address(index: usize) -> u8 {
    ((index + 1) * LEADERBOARD_SLOT_SPACING) as u8
}

/// In-memory copy of the leaderboard, sorted best first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: [LeaderboardEntry; LEADERBOARD_SLOTS],
}

impl Leaderboard {
    /// A table of default rows.
    pub const fn new() -> Self {
        Self {
            entries: [LeaderboardEntry::DEFAULT; LEADERBOARD_SLOTS],
        }
    }

    pub fn from_entries(entries: [LeaderboardEntry; LEADERBOARD_SLOTS]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry; LEADERBOARD_SLOTS] {
        &self.entries
    }

    /// Place `entry` by score, pushing lower rows down and dropping the last.
    ///
    /// Rows with a strictly greater score field stay ahead of it. On an exact
    /// tie the new entry goes directly after the first equal row. Returns the
    /// index it landed at, or `None` if it falls off the bottom.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let key = entry.score_field();
        let mut place = self
            .entries
            .iter()
            .take_while(|e| e.score_field() > key)
            .count();
        if place < LEADERBOARD_SLOTS && self.entries[place].score_field() == key {
            place += 1;
        }
        if place >= LEADERBOARD_SLOTS {
            debug!("entry {} did not rank", entry.as_str());
            return None;
        }

        self.entries.copy_within(place..LEADERBOARD_SLOTS - 1, place + 1);
        self.entries[place] = entry;
        info!("entry {} placed at #{}", entry.as_str(), place + 1);
        Some(place)
    }

    /// Write all six records to the store, best first.
    ///
    /// Every slot is attempted even after a failure; the first error is
    /// returned and already-written slots are not rolled back.
    pub fn persist<S: RecordStore>(&self, store: &mut S) -> Result<(), Error> {
        let mut first_error = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let addr = slot_address(index);
            let result =
                with_retries(|| store.burst_write(EEPROM_DEVICE_ADDR, addr, entry.record()));
            if let Err(e) = result {
                error!("leaderboard slot {} write failed: {}", index + 1, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!("leaderboard saved");
                Ok(())
            }
        }
    }

    /// Replace the table with what the store holds.
    ///
    /// The table is only updated if all six reads succeed. Records that are
    /// not well-formed (a blank chip reads all 0xFF) become default rows.
    pub fn load<S: RecordStore>(&mut self, store: &mut S) -> Result<(), Error> {
        let mut loaded = [LeaderboardEntry::DEFAULT; LEADERBOARD_SLOTS];
        for (index, slot) in loaded.iter_mut().enumerate() {
            let addr = slot_address(index);
            let mut record: Record = [0; RECORD_LEN];
            with_retries(|| store.burst_read(EEPROM_DEVICE_ADDR, addr, &mut record)).map_err(
                |e| {
                    error!("leaderboard slot {} read failed: {}", index + 1, e);
                    e
                },
            )?;

            match LeaderboardEntry::from_record(&record) {
                Some(entry) => *slot = entry,
                None => warn!("leaderboard slot {} malformed - using default", index + 1),
            }
        }

        self.entries = loaded;
        info!("leaderboard loaded");
        Ok(())
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

fn with_retries(mut op: impl FnMut() -> Result<(), Error>) -> Result<(), Error> {
    let mut attempt = 0;
    loop {
        match op() {
            Ok(()) => return Ok(()),
            Err(e) if attempt < STORE_RETRIES => {
                attempt += 1;
                warn!("store access failed ({}), retry {}", e, attempt);
            }
            Err(e) => return Err(e),
        }
    }
}
