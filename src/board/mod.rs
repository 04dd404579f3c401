//! Hardware adapters for the nRF52840 board.
//!
//! ## Components
//!
//! - **Display**: SSD1306 OLED behind the [`hangman::ui::DisplaySink`] trait
//! - **Encoder**: rotation and push-button tasks feeding the event channel

pub mod display;
pub mod encoder;
