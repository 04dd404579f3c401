//! Hangman for a rotary encoder, an OLED and an I²C EEPROM.
//!
//! Everything except the hardware glue lives here so it can be tested on
//! the host:
//!
//! - [`game`] picks words and scores guesses
//! - [`leaderboard`] keeps the six best scores and their storage layout
//! - [`store`] abstracts the EEPROM behind burst reads and writes
//! - [`ui`] defines the display sink, input events and screen layouts
//! - [`controller`] ties them together as a mode state machine
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod store;
pub mod ui;

pub use controller::{Controller, Mode, ModeKind};
pub use error::Error;
