//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use hangman::ui::{Color, DisplaySink, TextSize};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        defmt::warn!("OLED init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Monochrome panel: every colour but black lights the pixel.
fn binary(color: Color) -> BinaryColor {
    if color.is_lit() {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

fn font(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Small => &FONT_6X10,
        TextSize::Large => &FONT_10X20,
    }
}

/// [`DisplaySink`] over a buffered SSD1306. Drawing errors are ignored;
/// the frame buffer cannot fail and a failed flush is retried next frame.
pub struct OledSink<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledSink<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { display: init(i2c) }
    }
}

impl<I2C> DisplaySink for OledSink<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color, size: TextSize) {
        let style = MonoTextStyleBuilder::new()
            .font(font(size))
            .text_color(binary(fg))
            .background_color(binary(bg))
            .build();
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.display);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(binary(color)))
            .draw(&mut self.display);
    }

    fn flush(&mut self) {
        if self.display.flush().is_err() {
            defmt::warn!("OLED flush failed");
        }
    }
}
