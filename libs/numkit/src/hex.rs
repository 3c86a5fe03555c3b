//! Hex numeral parsing and hex rendering
//!
//! - `hex_to_decimal` / `parse_hex_numeral`: base-16 numeral → `u64`
//! - `byte_to_hex`: single byte → 1 or 2 hex digits
//! - `encode_hex`: byte sequence → hex string, e.g. [0x12, 0x34, 0xAB] → "1234AB"

use crate::error::{NumkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How strictly hex numerals are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexMode {
    /// Empty numerals decode to 0 and the scan stops at a leading `'0'`
    #[default]
    Compat,
    /// Empty numerals are rejected and every digit is validated
    Strict,
}

impl std::fmt::Display for HexMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexMode::Compat => write!(f, "compat"),
            HexMode::Strict => write!(f, "strict"),
        }
    }
}

/// Convert a hex numeral (case-insensitive) to its integer value
///
/// Same as `parse_hex_numeral(numeral, HexMode::Compat)`.
///
/// # Example
/// `"FF"` → 255, `"1a"` → 26, `"zz"` → `InvalidDigit`
pub fn hex_to_decimal(numeral: &str) -> Result<u64> {
    parse_hex_numeral(numeral, HexMode::Compat)
}

/// Convert a hex numeral to its integer value using the given mode
///
/// Digits are scanned from least to most significant, accumulating
/// `digit * 16^power`. In `Compat` mode the scan stops when the most
/// significant character is `'0'`; that digit adds nothing, so only its
/// validation is skipped.
pub fn parse_hex_numeral(numeral: &str, mode: HexMode) -> Result<u64> {
    if numeral.is_empty() && mode == HexMode::Strict {
        return Err(NumkitError::EmptyNumeral);
    }

    let digits: Vec<char> = numeral.chars().collect();

    let mut decimal = 0u64;
    for (power, (position, &ch)) in digits.iter().enumerate().rev().enumerate() {
        if mode == HexMode::Compat && position == 0 && ch == '0' {
            break;
        }

        let digit = hex_digit(ch.to_ascii_uppercase())
            .ok_or_else(|| NumkitError::invalid_digit(ch, position))?;
        if digit == 0 {
            continue;
        }
        // 16^16 no longer fits in u64
        if power >= 16 {
            return Err(NumkitError::overflow(format!(
                "'{}' exceeds {} bits",
                numeral,
                u64::BITS
            )));
        }

        decimal = (digit as u64)
            .checked_mul(16u64.pow(power as u32))
            .and_then(|weighted| decimal.checked_add(weighted))
            .ok_or_else(|| NumkitError::overflow(format!("'{}' exceeds u64", numeral)))?;
    }

    Ok(decimal)
}

/// Convert an uppercase hex character to its 4-bit value
fn hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Render a single byte in base 16
///
/// With `justify`, odd-length output gets a leading `0` so a byte always
/// renders as two digits.
pub fn byte_to_hex(byte: u8, uppercase: bool, justify: bool) -> String {
    let mut hex = if uppercase {
        format!("{:X}", byte)
    } else {
        format!("{:x}", byte)
    };
    if justify && hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }
    hex
}

/// Encode bytes to a hex string, two digits per byte
pub fn encode_hex(data: &[u8], uppercase: bool) -> String {
    let mut result = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to String buffer is infallible
        let _ = if uppercase {
            write!(&mut result, "{:02X}", byte)
        } else {
            write!(&mut result, "{:02x}", byte)
        };
    }
    result
}

/// Decode a hex byte string such as `"1234AB"` or `"12 34 ab"` into bytes
///
/// Whitespace between digit pairs is ignored. An odd number of digits is
/// rejected as an invalid trailing digit.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let [(hi_pos, hi), (lo_pos, lo)] = pair else {
            let (pos, ch) = pair[0];
            return Err(NumkitError::invalid_digit(ch, pos));
        };
        let hi_val = hex_digit(hi.to_ascii_uppercase())
            .ok_or_else(|| NumkitError::invalid_digit(*hi, *hi_pos))?;
        let lo_val = hex_digit(lo.to_ascii_uppercase())
            .ok_or_else(|| NumkitError::invalid_digit(*lo, *lo_pos))?;
        bytes.push((hi_val << 4) | lo_val);
    }
    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_decimal_basic() {
        assert_eq!(hex_to_decimal("FF").unwrap(), 255);
        assert_eq!(hex_to_decimal("1A").unwrap(), 26);
        assert_eq!(hex_to_decimal("1a").unwrap(), 26);
        assert_eq!(hex_to_decimal("deadBEEF").unwrap(), 0xDEADBEEF);
        assert_eq!(hex_to_decimal("FFFFFFFFFFFFFFFF").unwrap(), u64::MAX);
    }

    #[test]
    fn test_hex_to_decimal_invalid_digit() {
        assert_eq!(
            hex_to_decimal("zz").unwrap_err(),
            NumkitError::InvalidDigit {
                digit: 'z',
                position: 1
            }
        );
        assert_eq!(
            hex_to_decimal("ab?d").unwrap_err().to_string(),
            "Invalid hex digit '?' at position 2"
        );
        assert_eq!(
            parse_hex_numeral("fg", HexMode::Strict).unwrap_err(),
            NumkitError::invalid_digit('g', 1)
        );
        assert_eq!(
            hex_to_decimal("1G2").unwrap_err(),
            NumkitError::invalid_digit('G', 1)
        );
        assert!(hex_to_decimal("0x1A").is_err());
    }

    #[test]
    fn test_leading_zero_stops_scan_in_compat_mode() {
        // Compat-mode quirk: the scan stops at a most significant '0'
        assert_eq!(hex_to_decimal("0FF").unwrap(), 255);
        assert_eq!(hex_to_decimal("0").unwrap(), 0);
        assert_eq!(hex_to_decimal("00A").unwrap(), 10);
        assert_eq!(parse_hex_numeral("0FF", HexMode::Strict).unwrap(), 255);
    }

    #[test]
    fn test_empty_numeral() {
        assert_eq!(hex_to_decimal("").unwrap(), 0);
        assert_eq!(
            parse_hex_numeral("", HexMode::Strict).unwrap_err(),
            NumkitError::EmptyNumeral
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            hex_to_decimal("10000000000000000").unwrap_err(),
            NumkitError::Overflow(_)
        ));
        // Leading zeros beyond 16 digits are harmless
        assert_eq!(hex_to_decimal("00000000000000000000FF").unwrap(), 255);
    }

    #[test]
    fn test_byte_to_hex() {
        assert_eq!(byte_to_hex(0xAB, true, true), "AB");
        assert_eq!(byte_to_hex(0xAB, false, true), "ab");
        assert_eq!(byte_to_hex(0x0F, true, true), "0F");
        assert_eq!(byte_to_hex(0x0F, true, false), "F");
        assert_eq!(byte_to_hex(0x00, false, true), "00");
    }

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[0x12, 0x34, 0xAB], true), "1234AB");
        assert_eq!(encode_hex(&[0x12, 0x34, 0xAB], false), "1234ab");
        assert_eq!(encode_hex(&[], true), "");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("1234AB").unwrap(), vec![0x12, 0x34, 0xAB]);
        assert_eq!(decode_hex("12 34 ab").unwrap(), vec![0x12, 0x34, 0xAB]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(
            decode_hex("123").unwrap_err(),
            NumkitError::invalid_digit('3', 2)
        );
        assert_eq!(
            decode_hex("1x").unwrap_err(),
            NumkitError::invalid_digit('x', 1)
        );
    }
}
