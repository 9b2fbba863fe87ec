//! Simple countdown example
//!
//! Demonstrates basic usage of the segment-driver crate on the Raspberry Pi
//! Pico 2. Counts a clock-style MM:SS display down to zero with the centre
//! colon lit, blinks "00:00" for a few seconds, then shows a temperature
//! reading using the degree character.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP4        |                              |
//! | I2C0 SCL  | GP5        |                              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use segment_driver::{BlinkRate, SegmentDisplay, COLON_CENTRE, DEFAULT_ADDRESS};

/// Countdown start, in seconds (2 minutes).
const COUNTDOWN_SECS: u32 = 120;

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP4 = SDA, GP5 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Display ---
    let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
    display.init().await.expect("Failed to initialise display");
    display
        .set_brightness(2)
        .await
        .expect("Failed to set brightness");

    info!("Countdown example started");

    loop {
        // --- Countdown: MM:SS with the centre colon lit ---
        display.set_colon(COLON_CENTRE).unwrap();

        for remaining in (0..=COUNTDOWN_SECS).rev() {
            let minutes = remaining / 60;
            let seconds = remaining % 60;

            display.set_number((minutes / 10) as u8, 0).unwrap();
            display.set_number((minutes % 10) as u8, 1).unwrap();
            display.set_number((seconds / 10) as u8, 2).unwrap();
            display.set_number((seconds % 10) as u8, 3).unwrap();

            if let Err(e) = display.draw().await {
                error!("Draw failed: {}", e);
            }

            Timer::after(Duration::from_millis(1000)).await;
        }

        // --- Blink "00:00" for a few seconds ---
        display
            .set_blink_rate(BlinkRate::TwoHz)
            .await
            .expect("Failed to set blink rate");
        Timer::after(Duration::from_secs(4)).await;
        display
            .set_blink_rate(BlinkRate::Off)
            .await
            .expect("Failed to set blink rate");

        // --- Show "25°F" using the character set ---
        display.clear();
        display.set_colon(0x00).unwrap();
        display.set_number(2, 0).unwrap();
        display.set_number(5, 1).unwrap();
        display.set_character("deg", 2).unwrap();
        display.set_character("f", 3).unwrap();
        if let Err(e) = display.draw().await {
            error!("Draw failed: {}", e);
        }

        Timer::after(Duration::from_secs(4)).await;
        display.clear();
    }
}
