//! # GBK Encoding
//!
//! Converts Unicode strings to GBK for printers running in Chinese mode
//! (`FS &`). ASCII (U+0000–U+007F) passes through as single bytes; Hanzi
//! and full-width symbols become two-byte sequences the firmware prints from
//! its Hanzi ROM. Characters GBK cannot represent are replaced with `?` and
//! logged.
//!
//! Control characters other than CR and LF (ESC, FS, TAB, DEL, ...) would be
//! read as printer commands, so they become spaces, also logged.

use encoding_rs::GBK;
use tracing::warn;

/// Encode a Unicode string as GBK bytes.
///
/// ```
/// use dotprint::protocol::gbk;
///
/// assert_eq!(gbk::encode("A1"), b"A1".to_vec());
/// assert_eq!(gbk::encode("中"), vec![0xD6, 0xD0]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for ch in s.chars() {
        if ch.is_ascii_control() && ch != '\r' && ch != '\n' {
            warn!(
                code_point = ch as u32,
                "gbk: control character in text, replacing with space"
            );
            out.push(b' ');
            continue;
        }
        if ch.is_ascii() {
            out.push(ch as u8);
            continue;
        }
        let (bytes, _, unmappable) = GBK.encode(ch.encode_utf8(&mut buf));
        if unmappable {
            warn!(
                ch = ?ch,
                "gbk: unmapped character, replacing with '?'"
            );
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Whether every character of `s` has a GBK encoding.
pub fn is_encodable(s: &str) -> bool {
    let (_, _, unmappable) = GBK.encode(s);
    !unmappable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Total: 12.50"), b"Total: 12.50".to_vec());
        assert_eq!(encode("|+-\r\n"), b"|+-\r\n".to_vec());
    }

    #[test]
    fn test_control_characters_neutralized() {
        // ESC @ would reset the printer and leave Chinese mode.
        assert_eq!(encode("a\u{1B}@b"), b"a @b".to_vec());
        assert_eq!(encode("\t\u{1C}.\u{7F}"), b"  . ".to_vec());
        assert_eq!(encode("\u{0C}中"), vec![b' ', 0xD6, 0xD0]);
    }

    #[test]
    fn test_hanzi() {
        // 中文 = D6D0 CEC4
        assert_eq!(encode("中文"), vec![0xD6, 0xD0, 0xCE, 0xC4]);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(encode("A中"), vec![b'A', 0xD6, 0xD0]);
    }

    #[test]
    fn test_fullwidth_punctuation() {
        // U+FF0C FULLWIDTH COMMA = A3AC
        assert_eq!(encode("，"), vec![0xA3, 0xAC]);
    }

    #[test]
    fn test_unmappable_replaced() {
        // Emoji has no GBK representation.
        assert_eq!(encode("a😀b"), b"a?b".to_vec());
        assert!(!is_encodable("a😀b"));
        assert!(is_encodable("价格"));
    }
}
