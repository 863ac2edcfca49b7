//! Syscall wrappers for hole punching.

use tracing::debug;

use super::*;
use crate::punchfile::PunchFn;

cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod linux;
        pub use linux::*;
    } else if #[cfg(any(target_os = "macos", target_os = "ios"))] {
        mod macos;
        pub use macos::*;
    } else if #[cfg(target_os = "freebsd")] {
        mod freebsd;
        pub use freebsd::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use self::windows::*;
    }
}

cfg_if! {
    if #[cfg(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        windows
    ))] {
        pub(crate) const PUNCHFILE: Option<PunchFn> = Some(punchfile_traced);

        fn punchfile_traced(file: &File, offset: u64, length: u64) -> io::Result<()> {
            debug!(offset, length, "punching hole");
            punchfile(file, offset, length)
        }
    } else {
        pub(crate) const PUNCHFILE: Option<PunchFn> = None;
    }
}
