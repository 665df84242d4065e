//! # Printer Module
//!
//! Printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware specifications

pub mod config;

pub use config::PrinterConfig;
