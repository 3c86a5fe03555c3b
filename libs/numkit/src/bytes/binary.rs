//! Base-2 rendering of bytes and numeric values

use super::byte_order::is_little_endian;
use super::conversions::{number_to_bytes, Numeric};

/// Render one byte as eight `0`/`1` characters, MSB first
#[inline]
pub fn byte_to_binary(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Render a value's bytes in base 2, most significant byte first
///
/// Byte groups are separated by a single space, e.g. `0x0102u16` renders as
/// `"00000001 00000010"` on any host.
pub fn number_to_binary<T: Numeric>(value: T) -> String {
    // Native little-endian bytes need reversing to put the MSB first
    let bytes = number_to_bytes(value, is_little_endian());
    bytes
        .as_ref()
        .iter()
        .map(|b| byte_to_binary(*b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_binary() {
        assert_eq!(byte_to_binary(0), "00000000");
        assert_eq!(byte_to_binary(0b1010_1100), "10101100");
        assert_eq!(byte_to_binary(0xFF), "11111111");
    }

    #[test]
    fn test_number_to_binary() {
        assert_eq!(number_to_binary(0x0102u16), "00000001 00000010");
        assert_eq!(number_to_binary(5u8), "00000101");
        assert_eq!(
            number_to_binary(-1i32),
            "11111111 11111111 11111111 11111111"
        );
        // 1.0f32 = 0x3F800000
        assert_eq!(
            number_to_binary(1.0f32),
            "00111111 10000000 00000000 00000000"
        );
    }
}
