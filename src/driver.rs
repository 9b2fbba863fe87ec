//! Low-level HT16K33 command driver.
//!
//! Implements the single-byte command writes and the display RAM transfer
//! used by the HT16K33 LED controller: system setup, display setup
//! (power and blink), dimming, and the pointer-prefixed buffer write.
//!
//! This module is crate-private — consumers interact with
//! [`SegmentDisplay`](crate::SegmentDisplay) in `segment_display.rs`
//! instead.

use embedded_hal_async::i2c::I2c;

use crate::error::SegmentError;
use crate::registers::{
    BUFFER_SIZE, CMD_BRIGHTNESS, CMD_DISPLAY_SETUP, CMD_SYSTEM_SETUP, DISPLAY_ADDRESS, DISPLAY_ON,
    MAX_BRIGHTNESS, SYSTEM_OSCILLATOR_ON,
};

/// Display blink frequency, encoded in bits 2:1 of the display setup
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    /// Steady display, no blinking.
    Off,
    /// Blink at 2 Hz.
    TwoHz,
    /// Blink at 1 Hz.
    OneHz,
    /// Blink at 0.5 Hz.
    HalfHz,
}

impl BlinkRate {
    /// Blink field of the display setup command.
    fn bits(self) -> u8 {
        match self {
            BlinkRate::Off => 0b00,
            BlinkRate::TwoHz => 0b01,
            BlinkRate::OneHz => 0b10,
            BlinkRate::HalfHz => 0b11,
        }
    }
}

/// Low-level HT16K33 command driver.
///
/// Owns an I2C peripheral and provides the command and display RAM write
/// primitives the chip understands.
pub(crate) struct Ht16k33Driver<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ht16k33Driver<I2C>
where
    I2C: I2c,
{
    /// Create a new HT16K33 driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x70)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Send a single-byte command.
    async fn command(&mut self, command: u8) -> Result<(), SegmentError<I2C::Error>> {
        self.i2c.write(self.address, &[command]).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Power
    // -----------------------------------------------------------------------

    /// Leave standby: enable the internal oscillator, then the display.
    ///
    /// The oscillator must be running before the display is switched on.
    pub async fn power_up(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.command(CMD_SYSTEM_SETUP | SYSTEM_OSCILLATOR_ON).await?;
        self.command(CMD_DISPLAY_SETUP | DISPLAY_ON).await
    }

    /// Enter standby: switch the display off, then stop the oscillator.
    pub async fn power_down(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.command(CMD_DISPLAY_SETUP).await?;
        self.command(CMD_SYSTEM_SETUP).await
    }

    // -----------------------------------------------------------------------
    // Display setup
    // -----------------------------------------------------------------------

    /// Set the display brightness.
    ///
    /// # Arguments
    /// * `level` — dimming duty, 0 (1/16) to 15 (16/16)
    ///
    /// # Errors
    /// * [`SegmentError::InvalidBrightness`] if `level > 15`
    /// * [`SegmentError::I2c`] on communication failure
    pub async fn set_brightness(&mut self, level: u8) -> Result<(), SegmentError<I2C::Error>> {
        if level > MAX_BRIGHTNESS {
            return Err(SegmentError::InvalidBrightness);
        }

        self.command(CMD_BRIGHTNESS | level).await
    }

    /// Set the display blink rate. The display is left enabled.
    pub async fn set_blink_rate(
        &mut self,
        rate: BlinkRate,
    ) -> Result<(), SegmentError<I2C::Error>> {
        self.command(CMD_DISPLAY_SETUP | DISPLAY_ON | (rate.bits() << 1))
            .await
    }

    // -----------------------------------------------------------------------
    // Display RAM
    // -----------------------------------------------------------------------

    /// Transfer a display buffer to the chip's display RAM.
    ///
    /// Sends the RAM pointer byte followed by all 16 buffer bytes in a
    /// single write transaction.
    pub async fn write_display(
        &mut self,
        buffer: &[u8; BUFFER_SIZE],
    ) -> Result<(), SegmentError<I2C::Error>> {
        let mut frame = [0u8; BUFFER_SIZE + 1];
        frame[0] = DISPLAY_ADDRESS;
        frame[1..].copy_from_slice(buffer);

        self.i2c.write(self.address, &frame).await?;

        Ok(())
    }
}
