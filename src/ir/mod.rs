//! # Intermediate Representation (IR)
//!
//! The IR is a "bytecode" layer between line entries and raw ESC/P bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────┐     ┌─────────────┐     ┌──────────┐
//! │ LineEntry[] │ ──► │    IR     │ ──► │  Optimizer  │ ──► │ Codegen  │
//! │ (document)  │     │ (Vec<Op>) │     │ (text only) │     │ (bytes)  │
//! └─────────────┘     └───────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use dotprint::ir::{Op, Program};
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetChineseMode(true));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("发货单".into()));
//! program.push(Op::CarriageReturn);
//! program.push(Op::LineFeed);
//! program.push(Op::FormFeed);
//!
//! let bytes = program.optimize().to_bytes()?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), dotprint::DotprintError>(())
//! ```

mod codegen;
mod ops;
mod optimize;

pub use ops::*;
