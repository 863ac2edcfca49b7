//! Exposes required lower-level OS primitives for sparse files: hole punching, hole seeking and
//! allocation queries.

use super::*;

mod pathconf;
mod punchfile;
pub mod seekhole;

pub use pathconf::*;
pub(crate) use punchfile::PUNCHFILE;

cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use self::windows::*;
        pub use ::windows::Win32::System::Ioctl::*;
        use ::windows::Win32::Foundation::*;
        use std::os::windows::io::AsRawHandle;
        use ::windows::Win32::Storage::FileSystem::*;
        use ::windows::Win32::System::IO::*;
    } else if #[cfg(unix)] {
        mod unix;
        pub use self::unix::*;
        pub(crate) use std::os::fd::AsRawFd;
        pub(crate) use std::os::fd::AsFd;
    }
}

pub trait SparseFile {
    /// Marks the file sparse. Only Windows requires this before punching, elsewhere it does
    /// nothing.
    fn set_sparse(&self, set_sparse: bool) -> io::Result<()>;
}

#[cfg(not(windows))]
impl SparseFile for File {
    fn set_sparse(&self, _set_sparse: bool) -> io::Result<()> {
        Ok(())
    }
}
