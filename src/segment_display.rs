//! High-level interface for the 4-digit, 7-segment backpack.
//!
//! [`SegmentDisplay`] owns the 16-byte display buffer and encodes numbers,
//! characters, raw glyphs, and the colon row into it. Buffer setters are
//! plain synchronous mutations that never touch the bus; call
//! [`draw()`](SegmentDisplay::draw) to push the buffer to the device.

use embedded_hal_async::i2c::I2c;

use crate::driver::{BlinkRate, Ht16k33Driver};
use crate::error::SegmentError;
use crate::registers::{
    BUFFER_SIZE, CHARSET, COLON_ROW, DEGREE_CHAR, DIGIT_COUNT, MAX_BRIGHTNESS, MINUS_CHAR, POS,
    SPACE_CHAR,
};

/// High-level interface for the Adafruit 1.2" 4-digit, 7-segment backpack.
///
/// Maintains an in-memory display buffer with validated setters for
/// digits, hex characters, raw glyphs, and the colon row, and composes the
/// low-level HT16K33 driver for the bus-facing operations (`draw`, power,
/// brightness, blink).
///
/// Setters mutate the buffer in place and return `Result<(), _>`; an
/// operation either fully succeeds or fails with the buffer unchanged.
///
/// # Example
///
/// ```no_run
/// use segment_driver::{SegmentDisplay, COLON_CENTRE, DEFAULT_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
/// display.init().await.unwrap();
///
/// // Show "12:34"
/// display.set_number(1, 0).unwrap();
/// display.set_number(2, 1).unwrap();
/// display.set_number(3, 2).unwrap();
/// display.set_number(4, 3).unwrap();
/// display.set_colon(COLON_CENTRE).unwrap();
/// display.draw().await.unwrap();
/// # }
/// ```
pub struct SegmentDisplay<I2C> {
    driver: Ht16k33Driver<I2C>,
    buffer: [u8; BUFFER_SIZE],
    colon_pattern: u8,
}

impl<I2C> SegmentDisplay<I2C>
where
    I2C: I2c,
{
    /// Create a new display interface.
    ///
    /// No I2C traffic is generated. Call [`init()`](Self::init) once before
    /// any display operations.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically
    ///   [`DEFAULT_ADDRESS`](crate::DEFAULT_ADDRESS))
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            driver: Ht16k33Driver::new(i2c, address),
            buffer: [0; BUFFER_SIZE],
            colon_pattern: 0x00,
        }
    }

    /// Perform the one-time device setup.
    ///
    /// Powers the chip up, disables blinking, and sets full brightness —
    /// the display is on and blank afterwards.
    ///
    /// # Errors
    /// * [`SegmentError::I2c`] on communication failure
    pub async fn init(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.power_up().await?;
        self.driver.set_blink_rate(BlinkRate::Off).await?;
        self.driver.set_brightness(MAX_BRIGHTNESS).await
    }

    // -----------------------------------------------------------------------
    // Buffer setters (no I2C traffic)
    // -----------------------------------------------------------------------

    /// Set the colon and decimal-point lights.
    ///
    /// Updates the display buffer only; call [`draw()`](Self::draw) to
    /// render it. The pattern is retained and readable via
    /// [`colon_pattern()`](Self::colon_pattern) until the next call.
    ///
    /// # Arguments
    /// * `pattern` — OR of the colon row flags: [`COLON_CENTRE`],
    ///   [`COLON_LEFT_LOWER`], [`COLON_LEFT_UPPER`], [`DECIMAL_POINT`]
    ///
    /// # Errors
    /// * [`SegmentError::InvalidColonPattern`] if `pattern >= 0x1F`
    ///
    /// [`COLON_CENTRE`]: crate::COLON_CENTRE
    /// [`COLON_LEFT_LOWER`]: crate::COLON_LEFT_LOWER
    /// [`COLON_LEFT_UPPER`]: crate::COLON_LEFT_UPPER
    /// [`DECIMAL_POINT`]: crate::DECIMAL_POINT
    pub fn set_colon(&mut self, pattern: u8) -> Result<(), SegmentError<I2C::Error>> {
        if pattern >= 0x1F {
            return Err(SegmentError::InvalidColonPattern);
        }

        self.colon_pattern = pattern;
        self.buffer[COLON_ROW] = pattern;
        Ok(())
    }

    /// Present a user-defined glyph at the specified digit.
    ///
    /// Bits 0–6 of `glyph` select segments clockwise from the top, with
    /// the inner segment at bit 6:
    ///
    /// ```text
    ///         0
    ///         _
    ///     5 |   | 1
    ///       |   |
    ///         - <----- 6
    ///     4 |   | 2
    ///       | _ |
    ///         3
    /// ```
    ///
    /// Updates the display buffer only; call [`draw()`](Self::draw) to
    /// render it.
    ///
    /// # Arguments
    /// * `glyph` — segment pattern, 0x00–0x7F
    /// * `digit` — digit position, 0 (leftmost) to 3
    ///
    /// # Errors
    /// * [`SegmentError::InvalidDigit`] if `digit >= 4`
    /// * [`SegmentError::InvalidGlyph`] if `glyph >= 0x80`
    pub fn set_glyph(&mut self, glyph: u8, digit: u8) -> Result<(), SegmentError<I2C::Error>> {
        if digit as usize >= DIGIT_COUNT {
            return Err(SegmentError::InvalidDigit);
        }
        if glyph >= 0x80 {
            return Err(SegmentError::InvalidGlyph);
        }

        // Bit 7 is reserved by the chip; keep it clear.
        self.buffer[POS[digit as usize]] = glyph & 0x7F;
        Ok(())
    }

    /// Present a single decimal value (0–9) at the specified digit.
    ///
    /// Updates the display buffer only; call [`draw()`](Self::draw) to
    /// render it.
    ///
    /// # Arguments
    /// * `number` — the value to show, 0–9
    /// * `digit` — digit position, 0 (leftmost) to 3
    ///
    /// # Errors
    /// * [`SegmentError::InvalidNumber`] if `number > 9`
    /// * [`SegmentError::InvalidDigit`] if `digit >= 4`
    pub fn set_number(&mut self, number: u8, digit: u8) -> Result<(), SegmentError<I2C::Error>> {
        if number > 9 {
            return Err(SegmentError::InvalidNumber);
        }

        let mut buf = [0u8; 4];
        let text = char::from(b'0' + number).encode_utf8(&mut buf);
        self.set_character(text, digit)
    }

    /// Present a single character from the display's character set at the
    /// specified digit.
    ///
    /// Recognized characters, case-insensitive: the hex digits `'0'`–`'9'`
    /// and `'a'`–`'f'`, `" "` (all segments off), `"-"`, and the literal
    /// token `"deg"` for the degree symbol. Anything else can be shown via
    /// [`set_glyph()`](Self::set_glyph).
    ///
    /// Hex digits are mapped arithmetically to a character code (digit:
    /// code − 48, letter: code − 87) which indexes the segment pattern
    /// table.
    ///
    /// Updates the display buffer only; call [`draw()`](Self::draw) to
    /// render it.
    ///
    /// # Arguments
    /// * `character` — the character to show
    /// * `digit` — digit position, 0 (leftmost) to 3
    ///
    /// # Errors
    /// * [`SegmentError::InvalidDigit`] if `digit >= 4`
    /// * [`SegmentError::InvalidCharacter`] if `character` is not in the
    ///   recognized set
    pub fn set_character(
        &mut self,
        character: &str,
        digit: u8,
    ) -> Result<(), SegmentError<I2C::Error>> {
        if digit as usize >= DIGIT_COUNT {
            return Err(SegmentError::InvalidDigit);
        }

        let glyph = if character.eq_ignore_ascii_case("deg") {
            DEGREE_CHAR
        } else {
            let mut chars = character.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch.to_ascii_lowercase(),
                _ => return Err(SegmentError::InvalidCharacter),
            };

            match ch {
                ' ' => SPACE_CHAR,
                '-' => MINUS_CHAR,
                '0'..='9' => CHARSET[(ch as u8 - 48) as usize],
                'a'..='f' => CHARSET[(ch as u8 - 87) as usize],
                _ => return Err(SegmentError::InvalidCharacter),
            }
        };

        self.buffer[POS[digit as usize]] = glyph;
        Ok(())
    }

    /// Blank the display buffer.
    ///
    /// Zeroes all 16 bytes, including the colon row. The stored colon
    /// pattern state is kept, so the caller can re-apply it with
    /// `set_colon(display.colon_pattern())`.
    pub fn clear(&mut self) {
        self.buffer = [0; BUFFER_SIZE];
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    /// The display buffer as it would be sent to the device.
    pub fn buffer(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }

    /// The colon pattern most recently passed to
    /// [`set_colon()`](Self::set_colon).
    pub fn colon_pattern(&self) -> u8 {
        self.colon_pattern
    }

    // -----------------------------------------------------------------------
    // Device operations
    // -----------------------------------------------------------------------

    /// Push the display buffer to the device.
    ///
    /// # Errors
    /// * [`SegmentError::I2c`] on communication failure
    pub async fn draw(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.write_display(&self.buffer).await
    }

    /// Power the chip and display up.
    pub async fn power_on(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.power_up().await
    }

    /// Put the chip into standby. Display RAM and the in-memory buffer
    /// are preserved.
    pub async fn power_off(&mut self) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.power_down().await
    }

    /// Set the display brightness.
    ///
    /// # Arguments
    /// * `level` — dimming duty, 0 (dimmest) to 15 (brightest)
    ///
    /// # Errors
    /// * [`SegmentError::InvalidBrightness`] if `level > 15`
    /// * [`SegmentError::I2c`] on communication failure
    pub async fn set_brightness(&mut self, level: u8) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.set_brightness(level).await
    }

    /// Set the display blink rate.
    pub async fn set_blink_rate(
        &mut self,
        rate: BlinkRate,
    ) -> Result<(), SegmentError<I2C::Error>> {
        self.driver.set_blink_rate(rate).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::DEFAULT_ADDRESS;
    use core::convert::Infallible;
    use embedded_hal_async::i2c::{ErrorType, Operation};

    /// Mock I2C bus. The buffer setters never touch the bus, so the mock
    /// just accepts every transaction.
    struct MockI2c;

    impl ErrorType for MockI2c {
        type Error = Infallible;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn display() -> SegmentDisplay<MockI2c> {
        SegmentDisplay::new(MockI2c, DEFAULT_ADDRESS)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_display_is_blank() {
        let display = display();
        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
        assert_eq!(display.colon_pattern(), 0x00);
    }

    // ── set_number ───────────────────────────────────────────────────

    #[test]
    fn set_number_writes_charset_entry_at_every_digit() {
        for digit in 0..4u8 {
            for number in 0..10u8 {
                let mut display = display();
                display.set_number(number, digit).unwrap();
                assert_eq!(
                    display.buffer()[POS[digit as usize]],
                    CHARSET[number as usize],
                );
            }
        }
    }

    #[test]
    fn set_number_rejects_values_above_nine() {
        let mut display = display();
        assert!(matches!(
            display.set_number(10, 0),
            Err(SegmentError::InvalidNumber)
        ));
        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
    }

    // ── set_glyph ────────────────────────────────────────────────────

    #[test]
    fn set_glyph_writes_pattern_at_every_digit() {
        for digit in 0..4u8 {
            for glyph in [0x00u8, 0x01, 0x40, 0x7F] {
                let mut display = display();
                display.set_glyph(glyph, digit).unwrap();
                assert_eq!(display.buffer()[POS[digit as usize]], glyph & 0x7F);
            }
        }
    }

    #[test]
    fn set_glyph_rejects_reserved_bit() {
        let mut display = display();
        for glyph in [0x80u8, 0xFF] {
            assert!(matches!(
                display.set_glyph(glyph, 0),
                Err(SegmentError::InvalidGlyph)
            ));
        }
        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
    }

    // ── set_character ────────────────────────────────────────────────

    #[test]
    fn set_character_space_blanks_the_digit() {
        let mut display = display();
        display.set_number(8, 1).unwrap();
        display.set_character(" ", 1).unwrap();
        assert_eq!(display.buffer()[POS[1]], 0x00);
    }

    #[test]
    fn set_character_minus_writes_reserved_code() {
        let mut display = display();
        display.set_character("-", 0).unwrap();
        assert_eq!(display.buffer()[POS[0]], 0x10);
    }

    #[test]
    fn set_character_degree_writes_reserved_code() {
        let mut display = display();
        display.set_character("deg", 3).unwrap();
        assert_eq!(display.buffer()[POS[3]], 0x11);
    }

    #[test]
    fn set_character_decimal_digits_use_charset() {
        let mut display = display();
        for (i, ch) in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]
            .iter()
            .enumerate()
        {
            display.set_character(ch, 2).unwrap();
            assert_eq!(display.buffer()[POS[2]], CHARSET[i]);
        }
    }

    #[test]
    fn set_character_hex_letters_use_charset() {
        let mut display = display();
        for (i, ch) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
            display.set_character(ch, 0).unwrap();
            assert_eq!(display.buffer()[POS[0]], CHARSET[10 + i]);
        }
    }

    #[test]
    fn set_character_normalizes_case() {
        let mut upper = display();
        let mut lower = display();
        upper.set_character("A", 0).unwrap();
        lower.set_character("a", 0).unwrap();
        assert_eq!(upper.buffer(), lower.buffer());

        upper.set_character("DEG", 1).unwrap();
        lower.set_character("deg", 1).unwrap();
        assert_eq!(upper.buffer(), lower.buffer());
    }

    #[test]
    fn set_character_rejects_unknown_characters() {
        let mut display = display();
        for bad in ["z", "#", "", "ab", "10"] {
            assert!(matches!(
                display.set_character(bad, 0),
                Err(SegmentError::InvalidCharacter)
            ));
        }
        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
    }

    // ── set_colon ────────────────────────────────────────────────────

    #[test]
    fn set_colon_writes_pattern_verbatim() {
        for pattern in [0x00u8, 0x02, 0x04, 0x08, 0x10] {
            let mut display = display();
            display.set_colon(pattern).unwrap();
            assert_eq!(display.buffer()[COLON_ROW], pattern);
            assert_eq!(display.colon_pattern(), pattern);
        }
    }

    #[test]
    fn set_colon_range_boundary() {
        let mut display = display();
        display.set_colon(0x1E).unwrap();
        assert_eq!(display.buffer()[COLON_ROW], 0x1E);

        assert!(matches!(
            display.set_colon(0x1F),
            Err(SegmentError::InvalidColonPattern)
        ));
        // Failed call leaves buffer and state untouched.
        assert_eq!(display.buffer()[COLON_ROW], 0x1E);
        assert_eq!(display.colon_pattern(), 0x1E);
    }

    // ── Digit range ──────────────────────────────────────────────────

    #[test]
    fn digit_index_out_of_range_is_rejected() {
        let mut display = display();
        assert!(matches!(
            display.set_glyph(0x3F, 4),
            Err(SegmentError::InvalidDigit)
        ));
        assert!(matches!(
            display.set_number(5, 4),
            Err(SegmentError::InvalidDigit)
        ));
        assert!(matches!(
            display.set_character("a", 4),
            Err(SegmentError::InvalidDigit)
        ));
        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
    }

    // ── clear ────────────────────────────────────────────────────────

    #[test]
    fn clear_blanks_buffer_but_keeps_colon_state() {
        let mut display = display();
        display.set_number(7, 0).unwrap();
        display.set_colon(0x08).unwrap();

        display.clear();

        assert_eq!(display.buffer(), &[0u8; BUFFER_SIZE]);
        assert_eq!(display.colon_pattern(), 0x08);
    }

    // ── End to end ───────────────────────────────────────────────────

    #[test]
    fn composed_frame_has_expected_bytes() {
        let mut display = display();
        display.set_number(5, 0).unwrap();
        display.set_character("a", 1).unwrap();
        display.set_character("-", 2).unwrap();
        display.set_colon(0x02).unwrap();

        let mut expected = [0u8; BUFFER_SIZE];
        expected[0] = 0x6D; // 5
        expected[2] = 0x77; // a
        expected[4] = 0x02; // centre colon
        expected[6] = 0x10; // minus
        assert_eq!(display.buffer(), &expected);
    }
}
