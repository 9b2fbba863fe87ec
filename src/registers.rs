//! HT16K33 command and display-buffer constants for the Adafruit 1.2"
//! 4-digit, 7-segment backpack.
//!
//! The HT16K33 uses single-byte commands with the command in the upper
//! nibble and the operand in the lower bits: `[COMMAND | operand]`.
//! Display data is written as a register pointer byte followed by the
//! 16-byte display RAM contents.
//!
//! Each digit occupies a 16-bit display row, but the backpack only wires
//! the low byte, so the buffer interleaves one used byte and one unused
//! byte per digit.

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Display RAM register pointer. Buffer writes start here.
pub const DISPLAY_ADDRESS: u8 = 0x00;

/// System setup command. OR with [`SYSTEM_OSCILLATOR_ON`] to leave standby.
pub const CMD_SYSTEM_SETUP: u8 = 0x20;

/// Internal oscillator enable bit of the system setup command.
pub const SYSTEM_OSCILLATOR_ON: u8 = 0x01;

/// Display setup command. OR with [`DISPLAY_ON`] and a blink field in
/// bits 2:1.
pub const CMD_DISPLAY_SETUP: u8 = 0x80;

/// Display enable bit of the display setup command.
pub const DISPLAY_ON: u8 = 0x01;

/// Dimming command. OR with a duty level of 0–15.
pub const CMD_BRIGHTNESS: u8 = 0xE0;

/// Maximum brightness duty level (16/16 duty).
pub const MAX_BRIGHTNESS: u8 = 15;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Default I2C address for the Adafruit 7-segment backpack.
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Number of digit positions on the display.
pub const DIGIT_COUNT: usize = 4;

/// Display RAM size in bytes (8 rows of 16 bits).
pub const BUFFER_SIZE: usize = 16;

/// Buffer offset of each digit, in left-to-right display order. The gap at
/// index 4 is the colon row; odd indices are the unused high row bytes.
pub const POS: [usize; DIGIT_COUNT] = [0, 2, 6, 8];

/// Buffer offset of the colon/decimal-point row.
pub const COLON_ROW: usize = 0x04;

// ---------------------------------------------------------------------------
// Colon row patterns
// ---------------------------------------------------------------------------

/// Centre colon, between digits 1 and 2.
pub const COLON_CENTRE: u8 = 0x02;

/// Lower dot of the left colon.
pub const COLON_LEFT_LOWER: u8 = 0x04;

/// Upper dot of the left colon.
pub const COLON_LEFT_UPPER: u8 = 0x08;

/// Upper decimal point, right of digit 3.
pub const DECIMAL_POINT: u8 = 0x10;

// ---------------------------------------------------------------------------
// Character encoding
// ---------------------------------------------------------------------------

/// Segment pattern written for a space.
pub const SPACE_CHAR: u8 = 0x00;

/// Reserved character code for the minus sign, outside the hex range.
pub const MINUS_CHAR: u8 = 0x10;

/// Reserved character code for the degree symbol, outside the hex range.
pub const DEGREE_CHAR: u8 = 0x11;

/// Segment patterns for the 18-symbol character set: 0–9, a–f, minus,
/// degree. Bits 0–6 select segments clockwise from the top, with the inner
/// segment at bit 6. The values encode the backpack's segment wiring and
/// are not derivable; do not reorder.
pub const CHARSET: [u8; 18] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, // 0-7
    0x7F, 0x6F, 0x77, 0x7C, 0x58, 0x5E, 0x7B, 0x71, // 8-f
    0x40, 0x63, // minus, degree
];
