//! Recommended minimum hole sizes. Punches that aren't aligned to these may be rejected, or only
//! zero the partial blocks instead of freeing them.

use super::*;

cfg_if! {
    if #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))] {
        mod bsd;
        pub use bsd::*;
    } else if #[cfg(unix)] {
        mod blksize;
        pub use blksize::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use self::windows::*;
    }
}
