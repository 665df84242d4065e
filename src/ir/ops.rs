//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for dot-matrix
//! print jobs. The IR is a sequence of opcodes that can be inspected,
//! optimized, and compiled to ESC/P bytes.
//!
//! ## Design Philosophy
//!
//! ```text
//! Line entries → IR (inspectable) → Optimizer → Codegen → Bytes
//! ```
//!
//! Each opcode maps to exactly one protocol builder. Style changes are
//! individual ops so the optimizer can drop redundant ones.

/// Horizontal character pitch for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pitch {
    /// 10 characters per inch (power-on default).
    #[default]
    Pica,
    /// 12 characters per inch.
    Elite,
}

/// Character mode state tracked by the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleState {
    pub bold: bool,
    pub double_width: bool,
    pub condensed: bool,
    pub pitch: Pitch,
    pub chinese_mode: bool,
}

/// IR opcodes - the "bytecode" for dot-matrix printing.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @).
    Init,

    /// Line spacing in 1/180 inch (ESC 3 n).
    SetLineSpacing(u32),

    /// Page length in lines at the current spacing (ESC C n).
    SetPageLength(u32),

    // ========== Character Modes ==========
    SetBold(bool),
    SetDoubleWidth(bool),
    SetCondensed(bool),
    SetPitch(Pitch),
    /// Double-byte Hanzi mode (FS & / FS .).
    SetChineseMode(bool),

    // ========== Motion ==========
    /// Absolute horizontal position in 1/60 inch (ESC $).
    AbsolutePosition(u16),

    /// Paper advance in 1/180 inch (ESC J, chunked).
    Advance(u32),

    CarriageReturn,
    LineFeed,
    FormFeed,

    // ========== Content ==========
    /// Text, GBK-encoded at codegen.
    Text(String),

    /// One 24-pin graphics band: 3 bytes per column.
    Graphics24(Vec<u8>),

    /// Raw bytes, passed through untouched.
    Raw(Vec<u8>),
}

/// A compiled IR program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program with an initial Init op.
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Number of graphics bands in the program.
    pub fn band_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Graphics24(_)))
            .count()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
