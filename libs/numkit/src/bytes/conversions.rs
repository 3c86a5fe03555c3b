//! Numeric type conversions with byte order support
//!
//! Provides functions for converting between fixed-width numeric values and
//! their raw byte representation:
//! - `number_to_bytes` / `bytes_to_number` work on native layout with an
//!   optional reversal flag
//! - `encode` / `decode` take a named `ByteOrder` and reverse only when the
//!   host order differs
//!
//! Bytes are staged in a stack array of exactly the type's width.

use super::ByteOrder;
use tracing::debug;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width numeric value with a native byte representation
///
/// Implemented for `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64`.
pub trait Numeric: Copy + Default + PartialEq + std::fmt::Debug + sealed::Sealed {
    /// Width in bytes
    const WIDTH: usize;

    /// Byte array of exactly `WIDTH` bytes
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy + PartialEq + std::fmt::Debug;

    fn to_native_bytes(self) -> Self::Bytes;

    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                type Bytes = [u8; std::mem::size_of::<$t>()];

                #[inline]
                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_numeric!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

// ============================================================================
// Reversal-flag Conversions
// ============================================================================

/// Convert a value to its native bytes, reversed if `reverse` is set
///
/// # Example
/// On a little-endian host, `number_to_bytes(0x12345678u32, true)` yields
/// `[0x12, 0x34, 0x56, 0x78]` and `false` yields `[0x78, 0x56, 0x34, 0x12]`.
pub fn number_to_bytes<T: Numeric>(value: T, reverse: bool) -> T::Bytes {
    let mut bytes = value.to_native_bytes();
    if reverse {
        bytes.as_mut().reverse();
    }
    bytes
}

/// Convert up to `T::WIDTH` bytes into a value
///
/// If `reverse` is set the input is reversed first. The available bytes fill
/// the positionally-first bytes of a zeroed buffer; missing bytes stay zero.
/// Input longer than the width contributes only its first `T::WIDTH` bytes
/// (after reversal).
pub fn bytes_to_number<T: Numeric>(bytes: &[u8], reverse: bool) -> T {
    let mut buf = T::Bytes::default();
    let copied = place_bytes(buf.as_mut(), bytes, reverse);
    if copied < T::WIDTH {
        debug!(
            "Short input: {} of {} bytes, remaining bytes zero-filled",
            copied,
            T::WIDTH
        );
    }
    T::from_native_bytes(buf)
}

/// Copy `src` (optionally reversed) into the front of `dst`
///
/// Returns the number of bytes copied.
pub(crate) fn place_bytes(dst: &mut [u8], src: &[u8], reverse: bool) -> usize {
    let n = src.len().min(dst.len());
    if reverse {
        // The reversed input starts with the tail of the input
        for (d, s) in dst[..n].iter_mut().zip(src[src.len() - n..].iter().rev()) {
            *d = *s;
        }
    } else {
        dst[..n].copy_from_slice(&src[..n]);
    }
    n
}

// ============================================================================
// Named Byte Order Conversions
// ============================================================================

/// Convert a value to bytes in the given byte order
pub fn encode<T: Numeric>(value: T, order: ByteOrder) -> T::Bytes {
    number_to_bytes(value, order.needs_reversal())
}

/// Convert bytes in the given byte order to a value
///
/// Short input is zero-padded like [`bytes_to_number`].
pub fn decode<T: Numeric>(bytes: &[u8], order: ByteOrder) -> T {
    bytes_to_number(bytes, order.needs_reversal())
}
