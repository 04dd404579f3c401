//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, scoring rules and
//! EEPROM geometry live here so they can be tuned in one place.

// Scoring

/// Points added for every revealed position of a correct guess.
pub const CORRECT_LETTER_REWARD: i32 = 1000;

/// Points subtracted for a wrong guess. The score may go negative.
pub const WRONG_GUESS_PENALTY: i32 = 250;

/// Largest score representable in a 4-digit leaderboard record.
pub const MAX_RECORD_SCORE: i32 = 9999;

// Words & names

/// Longest secret word the session buffers can hold.
pub const MAX_WORD_LEN: usize = 20;

/// Number of letters in the guessing alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Length of a leaderboard name.
pub const NAME_LEN: usize = 3;

// Leaderboard storage (24C02-class I²C EEPROM)

/// 7-bit I²C address of the EEPROM.
pub const EEPROM_DEVICE_ADDR: u8 = 0x50;

/// Number of entries on the leaderboard.
pub const LEADERBOARD_SLOTS: usize = 6;

/// Byte spacing between leaderboard records; slot `n` (1-based) lives at
/// `n * LEADERBOARD_SLOT_SPACING`. Multiples of 8 keep each record inside
/// a single EEPROM page.
pub const LEADERBOARD_SLOT_SPACING: usize = 40;

/// Extra attempts for a failed record read/write before giving up.
pub const STORE_RETRIES: usize = 2;

/// Acknowledge polls after a write before reporting a timeout.
/// The EEPROM write cycle is at most 5 ms.
pub const EEPROM_WRITE_POLL_ATTEMPTS: u32 = 10;

/// Delay between acknowledge polls (µs).
pub const EEPROM_WRITE_POLL_INTERVAL_US: u32 = 1000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder CLK    → P0.11
//   Encoder DT     → P0.12
//   Encoder SW     → P0.24
//   OLED SDA       → P0.26   (TWIM0)
//   OLED SCL       → P0.27
//   EEPROM SDA     → P0.03   (TWIM1)
//   EEPROM SCL     → P0.04

/// Rotary encoder re-sample delay after a CLK edge (ms).
pub const ENCODER_DEBOUNCE_MS: u64 = 10;

/// Encoder push-button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Depth of the input event queue between encoder tasks and the game loop.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Display & timing

/// Foreground refresh period when no input arrives (ms).
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Number of on/off cycles of the win/lose banner.
pub const BANNER_FLASHES: usize = 10;

/// Duration of one banner phase (ms).
pub const BANNER_PHASE_MS: u64 = 80;
