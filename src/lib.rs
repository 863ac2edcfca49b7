//! Sparse file hole punching.
//!
//! [`punch_hole`] is the process-wide capability handle: `Some` on targets with a hole punching
//! primitive, `None` otherwise. Check it once up front and skip the optimization when it's absent.
//! [`testing`] has the zero stream and zero validating writer used to exercise punched ranges
//! without allocating buffers the size of the hole.

use std::fs::File;
use std::io;
use std::path::Path;

use cfg_if::cfg_if;

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
mod cpathbuf;
mod env;
mod error;
pub mod logging;
pub mod punchfile;
pub mod sys;
pub mod testing;

pub use error::*;
pub use punchfile::{aligned_range, punch_hole, punch_supported, try_punch, PunchFn};
pub use sys::seekhole;
pub use sys::{min_hole_size, path_disk_allocation, path_min_hole_size, SparseFile};


#[cfg(test)]
use test_log::test;

// Offsets and lengths are u64 at the API but the OS takes a signed 64 bit type.
fn off_io(value: u64) -> io::Result<i64> {
    value.try_into().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "file offset or length exceeds i64::MAX",
        )
    })
}
