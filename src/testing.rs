//! Helpers for exercising hole punching: temp files with known content, and the zero stream and
//! zero validating writer in [`zero`].

use std::cmp::min;
use std::io::{Read, Seek, SeekFrom, Write};

use anyhow::{ensure, Context, Result};
use rand::Rng;
use tempfile::NamedTempFile;

use super::*;

pub mod zero;

pub use zero::{ZeroReader, ZeroWriter};

pub fn write_random_tempfile(len: u64) -> Result<NamedTempFile> {
    let mut rng = rand::thread_rng();
    write_tempfile_with(len, |buf| rng.fill(buf))
}

/// A byte that's never zero, and varies with its offset. Useful to see exactly where a punch
/// started and ended.
pub fn nonzero_pattern_byte(offset: u64) -> u8 {
    1 + ((offset + 1) as u8 & 0xfe)
}

/// Writes a temp file where each byte is [nonzero_pattern_byte] of its offset.
pub fn write_nonzero_tempfile(len: u64) -> Result<NamedTempFile> {
    let mut offset = 0;
    write_tempfile_with(len, |buf| {
        for byte in buf.iter_mut() {
            *byte = nonzero_pattern_byte(offset);
            offset += 1;
        }
    })
}

fn write_tempfile_with(len: u64, mut fill: impl FnMut(&mut [u8])) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    let mut buf = [0; 4096];
    let mut remaining_size = len;
    while remaining_size > 0 {
        let n1 = min(remaining_size, buf.len() as u64).try_into()?;
        let buf1 = &mut buf[..n1];
        fill(buf1);
        file.write_all(buf1)?;
        remaining_size -= n1 as u64;
    }
    ensure!(file.as_file().seek(SeekFrom::End(0))? == len);
    Ok(file)
}

/// Checks that `[offset, offset+length)` of file reads back as zeroes, streaming it through a
/// [ZeroWriter] so the range can be far larger than memory. Moves the file position.
pub fn check_hole(file: &File, offset: u64, length: u64) -> Result<()> {
    let mut file = file;
    file.seek(SeekFrom::Start(offset))?;
    let mut zero_writer = ZeroWriter::new(io::sink());
    let copied = io::copy(&mut file.take(length), &mut zero_writer).with_context(|| {
        format!("checking hole at {} for {}", offset, length)
    })?;
    ensure!(
        copied == length,
        "hole at {} for {} cut short at {}",
        offset,
        length,
        copied
    );
    ensure!(zero_writer.written() == length);
    Ok(())
}
