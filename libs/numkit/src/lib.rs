//! numkit - binary value codec and numeral conversion utilities
//!
//! # Architecture
//!
//! This library provides:
//! - **Bytes Utilities**: number ⇄ byte conversions with optional reversal,
//!   named byte orders, host endianness detection, stream read/write, binary rendering
//! - **Hex Numerals**: hex numeral to integer parsing, byte/sequence hex rendering
//! - **Numerals**: decimal numeral syntax check
//! - **Random**: bounded integer and fixed-precision float draws
//! - **Config**: layered defaults for the CLI and embedding applications
//!
//! Every conversion stages bytes in a stack-local array, so all functions are
//! reentrant. The only process-wide state is the cached host byte order.

pub mod bytes;
pub mod config;
pub mod error;
pub mod hex;
pub mod numeral;
pub mod random;

// Re-export core types
pub use bytes::{
    bytes_to_number, decode, encode, is_big_endian, is_little_endian, number_to_bytes,
    read_number, write_number, ByteOrder, Numeric,
};
pub use config::NumkitConfig;
pub use error::{NumkitError, Result};
pub use hex::{hex_to_decimal, parse_hex_numeral, HexMode};
