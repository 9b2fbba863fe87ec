//! Error types for the segment display driver.

use core::fmt;

/// Errors that can occur when driving the segment display.
#[derive(Debug)]
pub enum SegmentError<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// Digit index out of valid range (must be 0–3).
    InvalidDigit,

    /// Glyph value out of valid range (must be below 0x80).
    InvalidGlyph,

    /// Decimal value out of valid range (must be 0–9).
    InvalidNumber,

    /// Colon/decimal-point pattern out of valid range (must be below 0x1F).
    InvalidColonPattern,

    /// Character not in the display's character set.
    InvalidCharacter,

    /// Brightness duty level out of valid range (must be 0–15).
    InvalidBrightness,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for SegmentError<E> {
    fn from(error: E) -> Self {
        SegmentError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SegmentError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SegmentError::I2c(e) => write!(f, "I2C error: {:?}", e),
            SegmentError::InvalidDigit => write!(f, "Invalid digit index (must be 0-3)"),
            SegmentError::InvalidGlyph => write!(f, "Invalid glyph (must be below 0x80)"),
            SegmentError::InvalidNumber => write!(f, "Invalid number (must be 0-9)"),
            SegmentError::InvalidColonPattern => {
                write!(f, "Invalid colon pattern (must be below 0x1F)")
            }
            SegmentError::InvalidCharacter => write!(f, "Character not in display character set"),
            SegmentError::InvalidBrightness => {
                write!(f, "Invalid brightness level (must be 0-15)")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SegmentError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SegmentError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            SegmentError::InvalidDigit => defmt::write!(f, "Invalid digit index"),
            SegmentError::InvalidGlyph => defmt::write!(f, "Invalid glyph"),
            SegmentError::InvalidNumber => defmt::write!(f, "Invalid number"),
            SegmentError::InvalidColonPattern => defmt::write!(f, "Invalid colon pattern"),
            SegmentError::InvalidCharacter => defmt::write!(f, "Invalid character"),
            SegmentError::InvalidBrightness => defmt::write!(f, "Invalid brightness level"),
        }
    }
}
