use std::cmp::min;
use std::io::{BufRead, Read, Write};

use super::*;

// Backs every write and fill_buf. Big enough that copying a gigabyte stays cheap.
static ZEROES: [u8; 1 << 16] = [0; 1 << 16];

/// A stream of `length` zero bytes that never allocates. Single pass: once drained, make a new
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroReader {
    remaining: u64,
}

impl ZeroReader {
    pub fn new(length: u64) -> Self {
        Self { remaining: length }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// True once every byte has been read. This is already true after the read that returned the
    /// last bytes, there's no need for a further zero length read to find out.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Writes all remaining zero bytes to w and returns how many that was.
    pub fn copy_to<W: Write + ?Sized>(&mut self, w: &mut W) -> io::Result<u64> {
        let mut written = 0;
        while self.remaining > 0 {
            let n = min(self.remaining, ZEROES.len() as u64) as usize;
            match w.write(&ZEROES[..n]) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => {
                    self.remaining -= n as u64;
                    written += n as u64;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(written)
    }
}

impl Read for ZeroReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = min(buf.len() as u64, self.remaining) as usize;
        buf[..n].fill(0);
        self.remaining -= n as u64;
        Ok(n)
    }
}

impl BufRead for ZeroReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        let n = min(self.remaining, ZEROES.len() as u64) as usize;
        Ok(&ZEROES[..n])
    }

    fn consume(&mut self, amt: usize) {
        self.remaining -= min(amt as u64, self.remaining);
    }
}

/// Forwards writes to an inner writer, failing on the first byte that isn't zero.
///
/// A buffer containing a non-zero byte is rejected whole: nothing from that write reaches the
/// inner writer. The error is an [io::ErrorKind::InvalidData] wrapping a [NonZeroByte], see
/// [NonZeroByte::from_io_error]. After that the writer is faulted and every write fails with the
/// same error.
#[derive(Debug)]
pub struct ZeroWriter<W> {
    inner: W,
    written: u64,
    rejected: Option<NonZeroByte>,
}

impl<W> ZeroWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            written: 0,
            rejected: None,
        }
    }

    /// Bytes the inner writer has accepted.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn rejected(&self) -> Option<NonZeroByte> {
        self.rejected
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ZeroWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(rejected) = self.rejected {
            return Err(rejected.into());
        }
        if let Some(offset) = buf.iter().position(|&byte| byte != 0) {
            let rejected = NonZeroByte {
                value: buf[offset],
                offset,
            };
            self.rejected = Some(rejected);
            return Err(rejected.into());
        }
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[test]
    fn read_short_of_buffer() -> anyhow::Result<()> {
        for len in [1, 3, (1 << 21) - 1] {
            let mut buf: Vec<u8> = (0..len + 1).map(|i| (i + 1) as u8 | 1).collect();
            let mut zr = ZeroReader::new(len as u64);
            let n = zr.read(&mut buf)?;
            assert_eq!(n, len);
            assert!(zr.is_empty());
            assert!(buf[..n].iter().all(|&b| b == 0));
            // The byte past the stream is untouched.
            assert_ne!(buf[n], 0);
            assert_eq!(zr.read(&mut buf)?, 0);
        }
        Ok(())
    }

    #[test]
    fn drain_in_small_reads() -> anyhow::Result<()> {
        for (len, buf_size) in [(0, 1), (1, 1), (10, 3), (4096, 7), (100_000, 4096)] {
            let mut zr = ZeroReader::new(len);
            let mut buf = vec![0xff; buf_size];
            let mut total = 0;
            let mut completions = 0;
            loop {
                let was_empty = zr.is_empty();
                let n = zr.read(&mut buf)?;
                if n == 0 {
                    assert!(was_empty);
                    break;
                }
                assert!(buf[..n].iter().all(|&b| b == 0));
                total += n as u64;
                assert_eq!(zr.remaining(), len - total);
                if zr.is_empty() {
                    completions += 1;
                }
            }
            assert_eq!(total, len);
            assert_eq!(completions, if len == 0 { 0 } else { 1 });
        }
        Ok(())
    }

    #[test]
    fn empty_reader() -> anyhow::Result<()> {
        let mut zr = ZeroReader::new(0);
        assert!(zr.is_empty());
        assert_eq!(zr.read(&mut [1; 8])?, 0);
        assert_eq!(zr.copy_to(&mut io::sink())?, 0);
        assert!(zr.fill_buf()?.is_empty());
        Ok(())
    }

    #[test]
    fn copy_to_counts_exactly() -> anyhow::Result<()> {
        for len in [0, 1, ZEROES.len() as u64 - 1, ZEROES.len() as u64 + 1, 1 << 26] {
            let mut zw = ZeroWriter::new(io::sink());
            let mut zr = ZeroReader::new(len);
            assert_eq!(zr.copy_to(&mut zw)?, len);
            assert_eq!(zw.written(), len);
            assert!(zr.is_empty());
            // Not restartable.
            assert_eq!(zr.copy_to(&mut zw)?, 0);
        }
        Ok(())
    }

    #[test]
    fn io_copy_through_zero_writer() -> anyhow::Result<()> {
        let len = (3 << 20) + 5;
        let mut zw = ZeroWriter::new(Vec::new());
        assert_eq!(io::copy(&mut ZeroReader::new(len), &mut zw)?, len);
        assert_eq!(zw.written(), len);
        let inner = zw.into_inner();
        assert_eq!(inner.len() as u64, len);
        assert!(inner.iter().all(|&b| b == 0));
        Ok(())
    }

    #[test]
    fn buf_read_consume() -> anyhow::Result<()> {
        let mut zr = ZeroReader::new(10);
        assert_eq!(zr.fill_buf()?.len(), 10);
        zr.consume(4);
        assert_eq!(zr.remaining(), 6);
        let mut out = Vec::new();
        assert_eq!(zr.read_to_end(&mut out)?, 6);
        assert_eq!(out, [0; 6]);
        Ok(())
    }

    #[test]
    fn zero_writer_rejects_non_zero() {
        let mut zw = ZeroWriter::new(Vec::new());
        assert_eq!(zw.write(&[0; 16]).unwrap(), 16);
        let err = zw.write(&[0, 0, 0, 7, 0, 9]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            NonZeroByte::from_io_error(&err),
            Some(NonZeroByte {
                value: 7,
                offset: 3
            })
        );
        assert_eq!(err.to_string(), "non-zero byte (7) at 3");
        // Nothing from the rejected write was forwarded.
        assert_eq!(zw.written(), 16);
        assert_eq!(zw.get_ref().len(), 16);
        // And it stays faulted, even for zeroes.
        let err = zw.write(&[0; 4]).unwrap_err();
        assert_eq!(
            NonZeroByte::from_io_error(&err),
            zw.rejected(),
        );
        assert_eq!(zw.written(), 16);
    }

    #[test]
    fn zero_writer_first_byte() {
        let mut zw = ZeroWriter::new(io::sink());
        let err = zw.write(&[0xff]).unwrap_err();
        assert_eq!(
            NonZeroByte::from_io_error(&err),
            Some(NonZeroByte {
                value: 0xff,
                offset: 0
            })
        );
        assert_eq!(zw.written(), 0);
    }

    #[test]
    fn zero_writer_empty_write() -> anyhow::Result<()> {
        let mut zw = ZeroWriter::new(Vec::new());
        assert_eq!(zw.write(&[])?, 0);
        zw.flush()?;
        assert_eq!(zw.written(), 0);
        Ok(())
    }
}
