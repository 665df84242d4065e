//! # Printer Transport Layer
//!
//! Communication backends for sending finished byte streams to printers.
//!
//! ## Available Transports
//!
//! - [`tcp`]: Raw TCP (port 9100) to a network print server
//!
//! Writing to a file or a device node needs no transport: the CLI writes
//! the bytes with `std::fs::write`.

pub mod tcp;

pub use tcp::TcpTransport;
