//! # ESC/P Protocol Implementation
//!
//! Low-level command builders for 24-pin dot-matrix printers speaking the
//! ESC/P family protocol (Epson LQ and compatible, including the Chinese
//! LQ-xxxK variants).
//!
//! ## Module Structure
//!
//! - [`commands`]: Initialization, paper motion, positioning, character modes
//! - [`graphics`]: 24-pin bit image bands (`ESC *`)
//! - [`gbk`]: Text encoding for the printer's built-in Hanzi ROM
//!
//! ## Usage Example
//!
//! ```
//! use dotprint::protocol::{commands, graphics};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::line_spacing(24));
//!
//! // One band, 100 columns of solid black
//! let band = vec![0xFF; 3 * 100];
//! data.extend(commands::carriage_return());
//! data.extend(graphics::graphics_24(&band)?);
//! data.extend(commands::line_feed());
//!
//! data.extend(commands::form_feed());
//! # Ok::<(), dotprint::DotprintError>(())
//! ```

pub mod commands;
pub mod gbk;
pub mod graphics;
