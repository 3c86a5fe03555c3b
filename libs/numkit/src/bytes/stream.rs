//! Stream read/write of fixed-width values
//!
//! `read_number` pulls up to `T::WIDTH` bytes from a seekable source and
//! decodes them with the same zero-padding rules as `bytes_to_number`, so a
//! truncated stream yields a partially filled value rather than an error.

use super::conversions::{number_to_bytes, place_bytes, Numeric};
use crate::error::Result;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Read a value from `source`
///
/// # Arguments
/// * `source` - Readable byte source with a seekable cursor
/// * `reverse` - Reverse the bytes actually read before decoding
/// * `restore_cursor` - Seek back to the starting position afterwards (peek)
///
/// Stops early only at end of stream; missing bytes are left zero.
pub fn read_number<T, R>(source: &mut R, reverse: bool, restore_cursor: bool) -> Result<T>
where
    T: Numeric,
    R: Read + Seek,
{
    let start = if restore_cursor {
        Some(source.stream_position()?)
    } else {
        None
    };

    let mut staged = T::Bytes::default();
    let read = read_up_to(source, staged.as_mut())?;
    if read < T::WIDTH {
        debug!("Short read: got {} of {} bytes", read, T::WIDTH);
    }

    let mut buf = T::Bytes::default();
    place_bytes(buf.as_mut(), &staged.as_ref()[..read], reverse);

    if let Some(pos) = start {
        source.seek(SeekFrom::Start(pos))?;
        debug!("Cursor restored to offset {}", pos);
    }

    Ok(T::from_native_bytes(buf))
}

/// Write a value's bytes to `sink`, reversed if `reverse` is set
pub fn write_number<T, W>(value: T, sink: &mut W, reverse: bool) -> Result<()>
where
    T: Numeric,
    W: Write,
{
    let bytes = number_to_bytes(value, reverse);
    sink.write_all(bytes.as_ref())?;
    Ok(())
}

/// Fill `buf` from `source` until it is full or the stream ends
fn read_up_to<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
