//! # ESC/P Protocol Commands
//!
//! Byte-exact builders for the ESC/P (24-pin) command subset used by
//! dotprint. Every function is pure and returns a fresh `Vec<u8>`.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `CR`, `LF`, `FF`, `SI`, `DC2`
//! - Two bytes: `ESC @`, `ESC E`, `ESC M`
//! - With parameters: `ESC 3 n`, `ESC $ nL nH`, `ESC * m nL nH d1...dk`
//!
//! ## Units
//!
//! | Command | Unit |
//! |---------|------|
//! | `ESC 3`, `ESC J` | 1/180 inch |
//! | `ESC $` | 1/60 inch |
//! | `ESC C` | lines at the current line spacing |
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// CONTROL CODE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - Prefix for the Chinese (double-byte) extensions
pub const FS: u8 = 0x1C;

/// CR (Carriage Return) - Return print head to the left margin
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Print buffer and advance by the current line spacing
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Eject to top of next page
pub const FF: u8 = 0x0C;

/// SI (Shift In) - Condensed printing on
pub const SI: u8 = 0x0F;

/// DC2 (Device Control 2) - Condensed printing off
pub const DC2: u8 = 0x12;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Line spacing returns to 1/6 inch
/// - Page length returns to the DIP-switch default
/// - Bold, double-width and condensed are cleared
/// - The current position becomes top-of-form
///
/// ## Example
///
/// ```
/// use dotprint::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// VERTICAL MOTION
// ============================================================================

/// # Set Line Spacing to n/180 inch (ESC 3 n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
///
/// ## Graphics Tiling
///
/// 24-pin graphics rows are 1/180 inch apart, so a spacing of exactly 24
/// makes consecutive bands touch with no gap and no overlap.
///
/// `n` is clamped to 0..=255.
///
/// ```
/// use dotprint::protocol::commands;
///
/// assert_eq!(commands::line_spacing(24), vec![0x1B, 0x33, 24]);
/// assert_eq!(commands::line_spacing(400), vec![0x1B, 0x33, 255]);
/// ```
#[inline]
pub fn line_spacing(n: u32) -> Vec<u8> {
    vec![ESC, b'3', n.min(255) as u8]
}

/// # Set Page Length in Lines (ESC C n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC C n  |
/// | Hex     | 1B 43 n  |
///
/// The length is measured in the line spacing in effect *when this command
/// is received*, so send it after `ESC 3`.
///
/// `n` is clamped to 1..=127.
#[inline]
pub fn page_length_lines(n: u32) -> Vec<u8> {
    vec![ESC, b'C', n.clamp(1, 127) as u8]
}

/// # Advance Paper n/180 inch (ESC J n)
///
/// A single `ESC J` moves at most 255/180 inch, so larger amounts are split
/// into several commands. Zero produces no bytes.
///
/// ```
/// use dotprint::protocol::commands;
///
/// assert_eq!(commands::advance(30), vec![0x1B, 0x4A, 30]);
/// assert_eq!(
///     commands::advance(300),
///     vec![0x1B, 0x4A, 255, 0x1B, 0x4A, 45]
/// );
/// ```
pub fn advance(n: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 * (n as usize).div_ceil(255));
    let mut remaining = n;
    while remaining > 0 {
        let step = remaining.min(255);
        out.extend_from_slice(&[ESC, b'J', step as u8]);
        remaining -= step;
    }
    out
}

/// Carriage return (CR)
#[inline]
pub fn carriage_return() -> Vec<u8> {
    vec![CR]
}

/// Line feed (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Form feed (FF) - eject the page
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![FF]
}

// ============================================================================
// HORIZONTAL POSITION
// ============================================================================

/// # Absolute Horizontal Position (ESC $ nL nH)
///
/// Moves the print position to `units`/60 inch from the left margin.
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC $ nL nH    |
/// | Hex     | 1B 24 nL nH    |
///
/// ```
/// use dotprint::protocol::commands;
///
/// // 2 inches = 120/60
/// assert_eq!(commands::absolute_position(120), vec![0x1B, 0x24, 120, 0]);
/// assert_eq!(commands::absolute_position(300), vec![0x1B, 0x24, 0x2C, 0x01]);
/// ```
#[inline]
pub fn absolute_position(units: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(units);
    vec![ESC, b'$', lo, hi]
}

// ============================================================================
// CHARACTER MODES
// ============================================================================

/// Bold (emphasized) on: ESC E
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// Bold (emphasized) off: ESC F
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

/// Double-width on: ESC W 1
#[inline]
pub fn double_width_on() -> Vec<u8> {
    vec![ESC, b'W', 1]
}

/// Double-width off: ESC W 0
#[inline]
pub fn double_width_off() -> Vec<u8> {
    vec![ESC, b'W', 0]
}

/// Condensed on: SI
#[inline]
pub fn condensed_on() -> Vec<u8> {
    vec![SI]
}

/// Condensed off: DC2
#[inline]
pub fn condensed_off() -> Vec<u8> {
    vec![DC2]
}

/// Elite pitch (12 cpi): ESC M
#[inline]
pub fn elite() -> Vec<u8> {
    vec![ESC, b'M']
}

/// Pica pitch (10 cpi): ESC P
#[inline]
pub fn pica() -> Vec<u8> {
    vec![ESC, b'P']
}

/// # Chinese Mode On (FS &)
///
/// Switches Chinese-capable firmware (LQ-xxxK family) into double-byte
/// mode, where GBK byte pairs print from the built-in Hanzi ROM.
#[inline]
pub fn chinese_mode_on() -> Vec<u8> {
    vec![FS, b'&']
}

/// Chinese mode off: FS .
#[inline]
pub fn chinese_mode_off() -> Vec<u8> {
    vec![FS, b'.']
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use dotprint::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(1440), [0xA0, 0x05]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
