//! Stream decode against real files
//!
//! Exercises `read_number` / `write_number` over `std::fs::File`, which is the
//! seekable source the CLI `read` command uses.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use numkit::bytes::{read_number, write_number};
use std::fs::File;
use std::io::{Seek, SeekFrom};

#[test]
fn test_write_file_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.bin");

    {
        let mut file = File::create(&path).unwrap();
        write_number(0x0102u16, &mut file, true).unwrap();
        write_number(-7i32, &mut file, false).unwrap();
        write_number(3.25f32, &mut file, true).unwrap();
    }

    let mut file = File::open(&path).unwrap();
    let a: u16 = read_number(&mut file, true, false).unwrap();
    let b: i32 = read_number(&mut file, false, false).unwrap();
    let c: f32 = read_number(&mut file, true, false).unwrap();
    assert_eq!(a, 0x0102);
    assert_eq!(b, -7);
    assert_eq!(c, 3.25);
    assert_eq!(file.stream_position().unwrap(), 10);
}

#[test]
fn test_peek_file_keeps_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("peek.bin");
    std::fs::write(&path, [0x11u8, 0x22, 0x33, 0x44, 0x55]).unwrap();

    let mut file = File::open(&path).unwrap();
    file.seek(SeekFrom::Start(1)).unwrap();

    let peeked: u32 = read_number(&mut file, false, true).unwrap();
    assert_eq!(peeked.to_ne_bytes(), [0x22, 0x33, 0x44, 0x55]);
    assert_eq!(file.stream_position().unwrap(), 1);
}

#[test]
fn test_file_tail_is_zero_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tail.bin");
    std::fs::write(&path, [0xAAu8, 0xBB, 0xCC]).unwrap();

    let mut file = File::open(&path).unwrap();
    let first: u16 = read_number(&mut file, false, false).unwrap();
    let tail: u16 = read_number(&mut file, false, false).unwrap();
    let past_end: u16 = read_number(&mut file, false, false).unwrap();

    assert_eq!(first.to_ne_bytes(), [0xAA, 0xBB]);
    assert_eq!(tail.to_ne_bytes(), [0xCC, 0x00]);
    assert_eq!(past_end, 0);
}
