//! Command handlers for the numkit CLI
//!
//! Each handler returns the text printed to stdout, so handlers can be tested
//! without capturing process output.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use numkit::bytes::{bytes_to_number, number_to_binary, number_to_bytes, read_number, ByteOrder};
use numkit::hex::{decode_hex, encode_hex, parse_hex_numeral, HexMode};
use numkit::numeral::is_decimal_numeral;
use numkit::random::{random_float, random_in_range};
use numkit::NumkitConfig;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Numeric types accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl std::fmt::Display for NumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NumType::U8 => "u8",
            NumType::I8 => "i8",
            NumType::U16 => "u16",
            NumType::I16 => "i16",
            NumType::U32 => "u32",
            NumType::I32 => "i32",
            NumType::U64 => "u64",
            NumType::I64 => "i64",
            NumType::F32 => "f32",
            NumType::F64 => "f64",
        };
        write!(f, "{}", name)
    }
}

/// Run `$body` with `$t` aliased to the Rust type selected by `$ty`
macro_rules! with_num_type {
    ($ty:expr, $t:ident => $body:expr) => {
        match $ty {
            NumType::U8 => {
                type $t = u8;
                $body
            },
            NumType::I8 => {
                type $t = i8;
                $body
            },
            NumType::U16 => {
                type $t = u16;
                $body
            },
            NumType::I16 => {
                type $t = i16;
                $body
            },
            NumType::U32 => {
                type $t = u32;
                $body
            },
            NumType::I32 => {
                type $t = i32;
                $body
            },
            NumType::U64 => {
                type $t = u64;
                $body
            },
            NumType::I64 => {
                type $t = i64;
                $body
            },
            NumType::F32 => {
                type $t = f32;
                $body
            },
            NumType::F64 => {
                type $t = f64;
                $body
            },
        }
    };
}

/// Parse a byte order flag value
pub fn parse_order(s: &str) -> std::result::Result<ByteOrder, String> {
    ByteOrder::from_str(s).ok_or_else(|| format!("unknown byte order '{}' (use be, le or native)", s))
}

/// Resolve the reversal flag: `--reverse` wins, then `--order`, then config
pub fn resolve_reverse(order: Option<ByteOrder>, reverse: bool, config: &NumkitConfig) -> bool {
    if reverse {
        return true;
    }
    let order = order.unwrap_or(config.default_order);
    debug!("Using byte order {}", order);
    order.needs_reversal()
}

pub fn encode(ty: NumType, value: &str, reverse: bool, config: &NumkitConfig) -> Result<String> {
    with_num_type!(ty, T => {
        let parsed: T = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {} value '{}'", ty, value))?;
        let bytes = number_to_bytes(parsed, reverse);
        Ok(encode_hex(&bytes, config.uppercase))
    })
}

pub fn decode(ty: NumType, hex_bytes: &str, reverse: bool) -> Result<String> {
    let bytes = decode_hex(hex_bytes).with_context(|| format!("invalid byte string '{}'", hex_bytes))?;
    with_num_type!(ty, T => {
        let width = std::mem::size_of::<T>();
        if bytes.len() > width {
            warn!("{} bytes given for {}, extra bytes ignored", bytes.len(), ty);
        }
        let value: T = bytes_to_number(&bytes, reverse);
        Ok(value.to_string())
    })
}

pub fn read(
    ty: NumType,
    path: &Path,
    offset: u64,
    count: usize,
    reverse: bool,
    peek: bool,
) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    file.seek(SeekFrom::Start(offset))
        .with_context(|| format!("failed to seek to offset {}", offset))?;

    let count = if peek && count > 1 {
        warn!("--peek reads a single value, ignoring --count {}", count);
        1
    } else {
        count
    };

    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = file.stream_position()?;
        if pos >= len {
            debug!("Reached end of file at offset {}", pos);
            break;
        }
        let line = with_num_type!(ty, T => {
            let value: T = read_number(&mut file, reverse, peek)
                .with_context(|| format!("failed to read {} at offset {}", ty, pos))?;
            format!("{}: {}", pos, value)
        });
        lines.push(line);
    }

    if lines.is_empty() {
        bail!("no data at offset {} (file is {} bytes)", offset, len);
    }
    Ok(lines.join("\n"))
}

pub fn hex(numeral: &str, strict: bool, config: &NumkitConfig) -> Result<String> {
    let mode = if strict { HexMode::Strict } else { config.hex_mode };
    let value = parse_hex_numeral(numeral.trim(), mode)
        .with_context(|| format!("invalid hex numeral '{}' ({} mode)", numeral, mode))?;
    Ok(value.to_string())
}

pub fn binary(ty: NumType, value: &str) -> Result<String> {
    with_num_type!(ty, T => {
        let parsed: T = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {} value '{}'", ty, value))?;
        Ok(number_to_binary(parsed))
    })
}

pub fn endian() -> String {
    let host = ByteOrder::host();
    format!("{} ({})", if host.is_little_endian() { "little" } else { "big" }, host)
}

pub fn random(low: &str, high: &str, precision: Option<u32>, config: &NumkitConfig) -> Result<String> {
    let is_float = precision.is_some() || low.contains('.') || high.contains('.');
    if is_float {
        let lo: f64 = low.parse().with_context(|| format!("invalid lower bound '{}'", low))?;
        let hi: f64 = high.parse().with_context(|| format!("invalid upper bound '{}'", high))?;
        let precision = precision.unwrap_or(config.float_precision);
        let value = random_float(lo, hi, precision)?;
        Ok(format!("{:.*}", precision as usize, value))
    } else {
        let lo: i64 = low.parse().with_context(|| format!("invalid lower bound '{}'", low))?;
        let hi: i64 = high.parse().with_context(|| format!("invalid upper bound '{}'", high))?;
        Ok(random_in_range(lo, hi)?.to_string())
    }
}

pub fn check(text: &str) -> String {
    is_decimal_numeral(text).to_string()
}
