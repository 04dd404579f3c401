//! Hangman firmware for the nRF52840.
//!
//! The foreground task owns the [`Controller`]. Two encoder tasks push
//! debounced input into a bounded channel; the loop applies each event,
//! repaints what changed and then checks the round for a win or loss.

#![no_std]
#![no_main]

mod board;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{Delay, Duration, Timer};
use hangman::config::{BANNER_FLASHES, BANNER_PHASE_MS, EVENT_QUEUE_DEPTH, FRAME_INTERVAL_MS};
use hangman::game::Outcome;
use hangman::store::eeprom::I2cEeprom;
use hangman::ui::{screens, DisplaySink, InputEvent};
use hangman::Controller;
use {defmt_rtt as _, panic_probe as _};

use board::display::OledSink;
use board::encoder;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

static EVENTS: Channel<CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task]
async fn rotation(clk: AnyPin, dt: AnyPin) {
    encoder::rotation_task(clk, dt, EVENTS.sender()).await
}

#[embassy_executor::task]
async fn button(sw: AnyPin) {
    encoder::button_task(sw, EVENTS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("hangman starting");

    // Word choice seed from the hardware RNG.
    let mut seed = [0u8; 4];
    Rng::new(p.RNG, Irqs).blocking_fill_bytes(&mut seed);

    let oled_bus = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = OledSink::new(oled_bus);

    let eeprom_bus = Twim::new(p.TWISPI1, Irqs, p.P0_03, p.P0_04, twim::Config::default());
    let store = I2cEeprom::new(eeprom_bus, Delay);

    let mut controller = Controller::new(store, u32::from_le_bytes(seed));
    if controller.store_fault() {
        error!("leaderboard unavailable, continuing without it");
    }

    if let Err(e) = spawner.spawn(rotation(p.P0_11.degrade(), p.P0_12.degrade())) {
        error!("encoder task spawn failed: {}", e);
    }
    if let Err(e) = spawner.spawn(button(p.P0_24.degrade())) {
        error!("button task spawn failed: {}", e);
    }

    let events = EVENTS.receiver();
    controller.render(&mut display);
    loop {
        let frame = Timer::after(Duration::from_millis(FRAME_INTERVAL_MS));
        if let Either::First(event) = select(events.receive(), frame).await {
            controller.handle(event);
        }

        // The finishing guess must reach the panel before the banner.
        controller.render(&mut display);

        if let Some(outcome) = controller.tick() {
            flash_banner(&mut display, outcome).await;
            drain(&events);
            controller.render(&mut display);
        }
    }
}

async fn flash_banner<D: DisplaySink>(display: &mut D, outcome: Outcome) {
    for phase in 0..BANNER_FLASHES * 2 {
        screens::banner(display, outcome, phase);
        display.flush();
        Timer::after(Duration::from_millis(BANNER_PHASE_MS)).await;
    }
}

/// Drop input that queued up while the banner was showing.
fn drain(events: &Receiver<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>) {
    let mut dropped = 0;
    while events.try_receive().is_ok() {
        dropped += 1;
    }
    if dropped > 0 {
        info!("discarded {} queued event(s)", dropped);
    }
}
