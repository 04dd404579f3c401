//! Rotary encoder input with async debouncing.
//!
//! Three encoder pins (active-low with internal pull-up):
//!   - CLK - falls once per detent
//!   - DT  - level at the CLK edge gives the rotation sense
//!   - SW  - shaft push button
//!
//! Each input is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends an `InputEvent` to the game loop channel.

use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use hangman::config::{BUTTON_DEBOUNCE_MS, ENCODER_DEBOUNCE_MS, EVENT_QUEUE_DEPTH};
use hangman::ui::{Direction, InputEvent};

pub type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>;

/// Run the rotation decoding loop.
///
/// On each CLK falling edge, waits out contact bounce, then samples DT:
/// high means clockwise, low means counter-clockwise.
pub async fn rotation_task(clk: AnyPin, dt: AnyPin, tx: EventSender) -> ! {
    let mut clk = Input::new(clk, Pull::Up);
    let dt = Input::new(dt, Pull::Up);

    loop {
        clk.wait_for_falling_edge().await;

        Timer::after(Duration::from_millis(ENCODER_DEBOUNCE_MS)).await;

        if clk.is_low() {
            let direction = if dt.is_high() {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            debug!("Encoder: {}", direction);
            tx.send(InputEvent::Rotate(direction)).await;
        }
    }
}

/// Run the push-button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
pub async fn button_task(pin: AnyPin, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            debug!("Encoder: select");
            tx.send(InputEvent::Select).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
