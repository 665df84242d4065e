//! # Code Generation
//!
//! Converts IR programs to ESC/P protocol bytes.

use super::ops::{Op, Pitch, Program};
use crate::error::Result;
use crate::protocol::{commands, gbk, graphics};

impl Program {
    /// Compile the IR program to ESC/P bytes.
    ///
    /// Fails only when a `Graphics24` payload violates the band contract.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => out.extend(commands::init()),
                Op::SetLineSpacing(n) => out.extend(commands::line_spacing(*n)),
                Op::SetPageLength(n) => out.extend(commands::page_length_lines(*n)),

                // ===== Character Modes =====
                Op::SetBold(enabled) => {
                    if *enabled {
                        out.extend(commands::bold_on());
                    } else {
                        out.extend(commands::bold_off());
                    }
                }
                Op::SetDoubleWidth(enabled) => {
                    if *enabled {
                        out.extend(commands::double_width_on());
                    } else {
                        out.extend(commands::double_width_off());
                    }
                }
                Op::SetCondensed(enabled) => {
                    if *enabled {
                        out.extend(commands::condensed_on());
                    } else {
                        out.extend(commands::condensed_off());
                    }
                }
                Op::SetPitch(Pitch::Pica) => out.extend(commands::pica()),
                Op::SetPitch(Pitch::Elite) => out.extend(commands::elite()),
                Op::SetChineseMode(enabled) => {
                    if *enabled {
                        out.extend(commands::chinese_mode_on());
                    } else {
                        out.extend(commands::chinese_mode_off());
                    }
                }

                // ===== Motion =====
                Op::AbsolutePosition(units) => out.extend(commands::absolute_position(*units)),
                Op::Advance(n) => out.extend(commands::advance(*n)),
                Op::CarriageReturn => out.extend(commands::carriage_return()),
                Op::LineFeed => out.extend(commands::line_feed()),
                Op::FormFeed => out.extend(commands::form_feed()),

                // ===== Content =====
                Op::Text(s) => out.extend(gbk::encode(s)),
                Op::Graphics24(data) => out.extend(graphics::graphics_24(data)?),
                Op::Raw(bytes) => out.extend(bytes),
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_program() {
        assert!(Program::new().to_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_init_and_spacing() {
        let mut program = Program::with_init();
        program.push(Op::SetLineSpacing(24));
        program.push(Op::SetPageLength(60));
        assert_eq!(
            program.to_bytes().unwrap(),
            vec![0x1B, 0x40, 0x1B, 0x33, 24, 0x1B, 0x43, 60]
        );
    }

    #[test]
    fn test_text_is_gbk_encoded() {
        let mut program = Program::new();
        program.push(Op::SetChineseMode(true));
        program.push(Op::Text("A中".into()));
        program.push(Op::CarriageReturn);
        program.push(Op::LineFeed);
        program.push(Op::SetChineseMode(false));
        assert_eq!(
            program.to_bytes().unwrap(),
            vec![0x1C, 0x26, b'A', 0xD6, 0xD0, 0x0D, 0x0A, 0x1C, 0x2E]
        );
    }

    #[test]
    fn test_styles_and_motion() {
        let program: Program = [
            Op::SetBold(true),
            Op::SetDoubleWidth(true),
            Op::SetCondensed(true),
            Op::SetPitch(Pitch::Elite),
            Op::AbsolutePosition(60),
            Op::Advance(10),
            Op::FormFeed,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            program.to_bytes().unwrap(),
            vec![
                0x1B, 0x45, 0x1B, 0x57, 1, 0x0F, 0x1B, 0x4D, 0x1B, 0x24, 60, 0, 0x1B, 0x4A, 10,
                0x0C
            ]
        );
    }

    #[test]
    fn test_graphics_band() {
        let mut program = Program::new();
        program.push(Op::Graphics24(vec![0x80, 0, 0]));
        assert_eq!(
            program.to_bytes().unwrap(),
            vec![0x1B, 0x2A, 39, 1, 0, 0x80, 0, 0]
        );
    }

    #[test]
    fn test_bad_graphics_fails_whole_program() {
        let mut program = Program::with_init();
        program.push(Op::Graphics24(vec![0; 4]));
        assert!(program.to_bytes().is_err());
    }

    #[test]
    fn test_raw_bytes() {
        let mut program = Program::new();
        program.push(Op::Raw(vec![0x01, 0x02, 0x03]));
        assert_eq!(program.to_bytes().unwrap(), vec![0x01, 0x02, 0x03]);
    }
}
