//! Async driver for the Adafruit 1.2-inch 4-digit, 7-segment LED backpack.
//!
//! This crate provides an async I2C driver for the HT16K33-based Adafruit
//! 1.2" 4-digit 7-segment display backpack (Product #1270) and compatible
//! modules.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — Low-level HT16K33 command primitives:
//!   system and display setup, dimming, and the display RAM transfer.
//! - **[`SegmentDisplay`]** (public) — Validated, high-level API that owns
//!   the 16-byte display buffer and encodes numbers, characters, glyphs,
//!   and the colon row into it.
//!
//! Buffer setters are synchronous and never generate bus traffic; only
//! [`draw()`](SegmentDisplay::draw) and the power/brightness/blink methods
//! talk to the device.
//!
//! # Quick start
//!
//! ```no_run
//! use segment_driver::{SegmentDisplay, DECIMAL_POINT, DEFAULT_ADDRESS};
//!
//! # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
//! // Construct with any `embedded-hal-async` I2C implementation
//! let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
//! display.init().await.unwrap();
//!
//! // Show "-15°" with the decimal point lit, then push the buffer
//! display.set_character("-", 0).unwrap();
//! display.set_number(1, 1).unwrap();
//! display.set_number(5, 2).unwrap();
//! display.set_character("deg", 3).unwrap();
//! display.set_colon(DECIMAL_POINT).unwrap();
//! display.draw().await.unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   blink-rate types for embedded logging.

#![no_std]

pub use driver::BlinkRate;
pub use error::SegmentError;
pub use registers::{
    COLON_CENTRE, COLON_LEFT_LOWER, COLON_LEFT_UPPER, DECIMAL_POINT, DEFAULT_ADDRESS, DIGIT_COUNT,
};
pub use segment_display::SegmentDisplay;

mod driver;
mod error;
mod registers;
mod segment_display;
