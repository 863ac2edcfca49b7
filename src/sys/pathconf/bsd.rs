use std::ffi::c_int;

use super::*;
use crate::cpathbuf::CPathBuf;

/// _PC_MIN_HOLE_SIZE is 27 on Darwin.
/// https://github.com/apple/darwin-xnu/blob/main/bsd/sys/unistd.h. It doesn't seem to be defined
/// in the nix or libc crates for Darwin.
#[cfg(any(target_os = "macos", target_os = "ios"))]
const _PC_MIN_HOLE_SIZE: c_int = 27;
#[cfg(target_os = "freebsd")]
const _PC_MIN_HOLE_SIZE: c_int = libc::_PC_MIN_HOLE_SIZE;

/// fpathconf(_PC_MIN_HOLE_SIZE). This returns positive if holes are supported, and 1 if holes
/// are supported but the minimum hole size is unspecified.
pub fn min_hole_size(file: &File) -> io::Result<u64> {
    let long = unsafe { libc::fpathconf(file.as_raw_fd(), _PC_MIN_HOLE_SIZE) };
    pathconf_result(long)
}

pub fn path_min_hole_size(path: &Path) -> io::Result<u64> {
    let path: CPathBuf = path.try_into()?;
    let long = unsafe { libc::pathconf(path.as_ptr(), _PC_MIN_HOLE_SIZE) };
    pathconf_result(long)
}

fn pathconf_result(long: libc::c_long) -> io::Result<u64> {
    if long == -1 {
        return Err(io::Error::last_os_error());
    }
    // Zero or less would mean no hole support. Let the punch itself report that.
    Ok(long.max(1) as u64)
}
