use std::ffi::c_int;
use std::os::fd::RawFd;

use libc::ENXIO;
use libc::{SEEK_DATA, SEEK_HOLE};
use nix::errno::Errno;

use super::*;

type SeekWhence = c_int;

/// Returns None when there is no region of the requested type at or after offset.
pub fn seek_hole_whence(
    file: &File,
    offset: RegionOffset,
    whence: RegionType,
) -> io::Result<Option<RegionOffset>> {
    match lseek(file.as_raw_fd(), off_io(offset)?, whence) {
        Ok(offset) => Ok(Some(offset)),
        Err(ENXIO) => Ok(None),
        Err(errno) => Err(io::Error::from_raw_os_error(errno)),
    }
}

/// Using i64 rather than off_t to enforce 64-bit offsets (the libc wrappers all use type aliases
/// anyway).
fn lseek(fd: RawFd, offset: i64, whence: impl Into<SeekWhence>) -> Result<RegionOffset, i32> {
    let new_offset = unsafe { libc::lseek(fd, offset as libc::off_t, whence.into()) };
    if new_offset == -1 {
        return Err(Errno::last() as i32);
    }
    Ok(new_offset as RegionOffset)
}

impl From<RegionType> for SeekWhence {
    fn from(value: RegionType) -> Self {
        match value {
            Hole => SEEK_HOLE,
            Data => SEEK_DATA,
        }
    }
}
