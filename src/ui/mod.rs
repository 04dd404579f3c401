//! User interface subsystem - display sink contract + encoder input.
//!
//! The controller never touches pixels directly. It talks to a
//! [`DisplaySink`] that can clear the screen, draw text with a foreground
//! and background colour, and fill rectangles. Layout lives in
//! [`screens`]; the firmware implements the sink on an SSD1306 OLED.
//!
//! ## Components
//!
//! - **Screens**: static layouts and dynamic fields for every mode
//! - **Input logic**: cursor wrap-around for the rotary encoder

pub mod input_logic;
pub mod screens;

/// Colours the layouts ask for.
///
/// Monochrome panels light every colour except [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Green,
    Amber,
    Red,
    Blue,
}

impl Color {
    pub fn is_lit(self) -> bool {
        self != Color::Black
    }
}

/// Glyph size for [`DisplaySink::draw_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6×10 cells.
    Small,
    /// 10×20 cells.
    Large,
}

impl TextSize {
    /// Cell width and height in pixels.
    pub const fn cell(self) -> (i32, i32) {
        match self {
            TextSize::Small => (6, 10),
            TextSize::Large => (10, 20),
        }
    }
}

/// Drawing operations the game needs from a display.
///
/// Coordinates are the top-left corner in pixels. Implementations may
/// buffer; nothing has to reach the panel before [`DisplaySink::flush`].
pub trait DisplaySink {
    /// Blank the whole screen.
    fn clear(&mut self);

    /// Draw `text`, painting each glyph cell with `bg` first.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color, size: TextSize);

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Push pending changes to the panel.
    fn flush(&mut self);
}

/// Rotation sense reported by the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Debounced encoder events delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// One detent of rotation.
    Rotate(Direction),
    /// Encoder shaft pressed.
    Select,
}
