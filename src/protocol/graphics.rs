//! # ESC/P 24-pin Bit Image Graphics
//!
//! ## Column Layout
//!
//! In 24-pin bit image mode the host sends vertical columns, not rows. Each
//! column is 24 dots tall and packed into 3 bytes, top pin first:
//!
//! ```text
//!            column 0   column 1   column 2
//!          ┌──────────┬──────────┬──────────┐
//! pins 1-8 │  byte 0  │  byte 3  │  byte 6  │   bit 7 (MSB) = pin 1
//! pins 9-16│  byte 1  │  byte 4  │  byte 7  │
//! pins17-24│  byte 2  │  byte 5  │  byte 8  │   bit 0 (LSB) = pin 24
//!          └──────────┴──────────┴──────────┘
//! ```
//!
//! ## Density
//!
//! Mode `m = 39` is 180 × 180 DPI triple density, which matches the
//! vertical pin pitch so glyph pixels come out square.

use super::commands::{ESC, u16_le};
use crate::error::{DotprintError, Result};

/// Bit image mode: 24-dot, 180 DPI horizontal.
pub const MODE_24_PIN_180DPI: u8 = 39;

/// Bytes per column in 24-pin mode.
pub const BYTES_PER_COLUMN: usize = 3;

/// Largest column count the 16-bit header can carry.
pub const MAX_COLUMNS: usize = u16::MAX as usize;

/// # Select Bit Image, 24-pin (ESC * 39 nL nH d1...dk)
///
/// Prints one band of 24-pin graphics.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A 27 nL nH d1...dk |
/// | Decimal | 27 42 39 nL nH d1...dk |
///
/// ## Parameters
///
/// - `nL, nH`: number of **columns** (not bytes), little-endian
/// - `d1...dk`: column data, k = 3 × columns
///
/// ## Errors
///
/// A payload whose length is not a multiple of 3, or that holds more than
/// 65535 columns, is a layout bug upstream and is rejected with
/// [`DotprintError::InvalidCommand`].
///
/// ## Example
///
/// ```
/// use dotprint::protocol::graphics;
///
/// // Two columns: a full-height bar and an empty column
/// let data = [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00];
/// let cmd = graphics::graphics_24(&data)?;
///
/// assert_eq!(&cmd[..5], &[0x1B, 0x2A, 39, 2, 0]);
/// assert_eq!(&cmd[5..], &data);
/// # Ok::<(), dotprint::DotprintError>(())
/// ```
pub fn graphics_24(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % BYTES_PER_COLUMN != 0 {
        return Err(DotprintError::InvalidCommand(
            "column data not a multiple of 3".to_string(),
        ));
    }
    let columns = data.len() / BYTES_PER_COLUMN;
    if columns > MAX_COLUMNS {
        return Err(DotprintError::InvalidCommand(
            "column count exceeds limit".to_string(),
        ));
    }

    let [nl, nh] = u16_le(columns as u16);
    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(MODE_24_PIN_180DPI);
    cmd.push(nl);
    cmd.push(nh);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let data = vec![0xAA; 3 * 300];
        let cmd = graphics_24(&data).unwrap();

        assert_eq!(cmd[0], 0x1B); // ESC
        assert_eq!(cmd[1], 0x2A); // '*'
        assert_eq!(cmd[2], 39); // m
        // 300 = 0x012C
        assert_eq!(cmd[3], 0x2C);
        assert_eq!(cmd[4], 0x01);
        assert_eq!(cmd.len(), 5 + 900);
    }

    #[test]
    fn test_empty_band() {
        assert_eq!(graphics_24(&[]).unwrap(), vec![0x1B, 0x2A, 39, 0, 0]);
    }

    #[test]
    fn test_preserves_data() {
        let data: Vec<u8> = (0..3 * 40).map(|i| i as u8).collect();
        let cmd = graphics_24(&data).unwrap();
        assert_eq!(&cmd[5..], &data[..]);
    }

    #[test]
    fn test_rejects_partial_column() {
        for len in [1, 2, 4, 5, 3001] {
            let err = graphics_24(&vec![0; len]).unwrap_err();
            assert!(err.to_string().contains("not a multiple of 3"), "len {}", len);
        }
    }

    #[test]
    fn test_rejects_too_many_columns() {
        assert!(graphics_24(&vec![0; 3 * MAX_COLUMNS]).is_ok());
        let err = graphics_24(&vec![0; 3 * (MAX_COLUMNS + 1)]).unwrap_err();
        assert!(matches!(err, DotprintError::InvalidCommand(_)));
        assert!(err.to_string().contains("column count exceeds limit"));
    }
}
